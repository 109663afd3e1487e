//! 绘图单位

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 表单可选的绘图单位
///
/// 单位只记录在图纸中，不参与宽度计算。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Unit {
    /// 英寸 (默认)
    #[default]
    #[serde(rename = "inch")]
    Inch,
    /// 毫米
    #[serde(rename = "mm")]
    Millimeter,
}

impl Unit {
    /// 表单中按顺序列出的全部单位
    pub const ALL: [Unit; 2] = [Unit::Inch, Unit::Millimeter];

    /// 表单中使用的文本形式
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Inch => "inch",
            Unit::Millimeter => "mm",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 无法识别的单位文本
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown unit '{0}' (expected 'inch' or 'mm')")]
pub struct UnknownUnit(pub String);

impl FromStr for Unit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "inch" => Ok(Unit::Inch),
            "mm" => Ok(Unit::Millimeter),
            other => Err(UnknownUnit(other.to_string())),
        }
    }
}
