//! 状态栏消息

use crate::error::GenerateError;
use std::path::PathBuf;

/// 状态消息级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// 成功（绿色）
    Success,
    /// 中性提示
    #[default]
    Info,
    /// 错误（红色）
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Success)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Info)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Error)
    }

    /// 把一次生成的结果渲染为单行状态
    pub fn from_outcome(outcome: &Result<PathBuf, GenerateError>) -> Self {
        match outcome {
            Ok(_) => Self::success("DXF file generated successfully!"),
            Err(GenerateError::MissingField(_)) => Self::error("All fields are required!"),
            Err(GenerateError::NoOutputDirectory) => Self::error("Output directory not selected!"),
            Err(GenerateError::Cancelled) => {
                Self::info("File not saved; user cancelled overwrite.")
            }
            Err(e) => Self::error(e.to_string()),
        }
    }
}
