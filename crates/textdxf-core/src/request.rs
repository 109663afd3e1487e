//! 生成请求
//!
//! `FormInput` 是表单交给核心的原始字符串，`GenerationRequest`
//! 是校验、解析之后的值对象，只存活于一次生成调用中。

use crate::error::{Field, GenerateError};
use crate::sanitize::sanitize;
use crate::units::Unit;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// 输出文件扩展名
pub const DXF_EXTENSION: &str = "dxf";

/// 表单字段的原始文本
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub text: String,
    pub unit: String,
    pub aspect_ratio: String,
    pub height: String,
}

impl FormInput {
    /// 按表单顺序返回第一个为空（或只有空白）的必填字段
    pub fn first_missing(&self) -> Option<Field> {
        [
            (Field::Text, &self.text),
            (Field::Unit, &self.unit),
            (Field::AspectRatio, &self.aspect_ratio),
            (Field::Height, &self.height),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

/// 宽高比 `W:H`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AspectRatio {
    pub w: i64,
    pub h: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatioError {
    #[error("expected two components separated by ':', found {0}")]
    TokenCount(usize),

    #[error("component '{token}' is not an integer: {source}")]
    NotInteger {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

impl AspectRatio {
    pub const fn new(w: i64, h: i64) -> Self {
        Self { w, h }
    }

    /// 由高度推算宽度：`height * h / w`
    ///
    /// 先乘第二分量再除以第一分量，第一分量为零或结果溢出时报错。
    pub fn width_for(&self, height: f64) -> Result<f64, GenerateError> {
        if self.w == 0 {
            return Err(GenerateError::DivisionByZero);
        }
        let width = height * self.h as f64 / self.w as f64;
        if !width.is_finite() {
            return Err(GenerateError::NonFiniteWidth(width));
        }
        Ok(width)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.w, self.h)
    }
}

impl FromStr for AspectRatio {
    type Err = RatioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split(':').collect();
        if tokens.len() != 2 {
            return Err(RatioError::TokenCount(tokens.len()));
        }

        let parse = |token: &str| {
            token
                .trim()
                .parse::<i64>()
                .map_err(|source| RatioError::NotInteger {
                    token: token.to_string(),
                    source,
                })
        };

        Ok(Self::new(parse(tokens[0])?, parse(tokens[1])?))
    }
}

/// 解析高度，拒绝非数字与非有限值
fn parse_height(raw: &str) -> Result<f64, GenerateError> {
    let height: f64 = raw
        .trim()
        .parse()
        .map_err(|e| GenerateError::parse(Field::Height, raw, e))?;

    if !height.is_finite() {
        return Err(GenerateError::parse(Field::Height, raw, "not a finite number"));
    }
    Ok(height)
}

/// 校验后的生成请求
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// 绘制内容，同时也是文件名来源
    pub text: String,
    pub unit: Unit,
    pub aspect_ratio: AspectRatio,
    pub height: f64,
    pub output_directory: PathBuf,
}

impl GenerationRequest {
    /// 解析表单输入
    ///
    /// 依次解析高度、宽高比、单位，遇到第一个错误即返回。
    /// 必填字段检查由调用方先行完成。
    pub fn parse(input: &FormInput, output_directory: &Path) -> Result<Self, GenerateError> {
        let height = parse_height(&input.height)?;

        let aspect_ratio = input
            .aspect_ratio
            .parse::<AspectRatio>()
            .map_err(|e| GenerateError::parse(Field::AspectRatio, &input.aspect_ratio, e))?;

        let unit = input
            .unit
            .parse::<Unit>()
            .map_err(|e| GenerateError::parse(Field::Unit, &input.unit, e))?;

        Ok(Self {
            text: input.text.clone(),
            unit,
            aspect_ratio,
            height,
            output_directory: output_directory.to_path_buf(),
        })
    }

    /// 推导宽度
    pub fn width(&self) -> Result<f64, GenerateError> {
        self.aspect_ratio.width_for(self.height)
    }

    /// 输出文件名 `{sanitized}.dxf`
    pub fn file_name(&self) -> String {
        format!("{}.{}", sanitize(&self.text), DXF_EXTENSION)
    }

    /// 输出路径 `{output_directory}/{sanitized}.dxf`
    pub fn output_path(&self) -> PathBuf {
        self.output_directory.join(self.file_name())
    }
}
