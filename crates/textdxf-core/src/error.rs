//! 生成流程错误定义

use std::fmt;
use thiserror::Error;

/// 表单中的必填字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Text,
    Unit,
    AspectRatio,
    Height,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Text => "text",
            Field::Unit => "unit",
            Field::AspectRatio => "aspect ratio",
            Field::Height => "height",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("missing required field: {0}")]
    MissingField(Field),

    #[error("output directory not selected")]
    NoOutputDirectory,

    #[error("invalid {field} '{value}': {reason}")]
    Parse {
        field: Field,
        value: String,
        reason: String,
    },

    #[error("division by zero: aspect ratio width component is 0")]
    DivisionByZero,

    #[error("computed width {0} is not a finite number")]
    NonFiniteWidth(f64),

    #[error("file not saved; user cancelled overwrite")]
    Cancelled,

    #[error("failed to write drawing: {0}")]
    Encoding(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl GenerateError {
    pub(crate) fn parse(field: Field, value: &str, reason: impl fmt::Display) -> Self {
        GenerateError::Parse {
            field,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    /// 用户拒绝覆盖，不属于失败
    pub fn is_cancelled(&self) -> bool {
        matches!(self, GenerateError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let err = GenerateError::parse(Field::Height, "abc", "not a number");
        assert_eq!(err.to_string(), "invalid height 'abc': not a number");
        assert!(!err.is_cancelled());
        assert!(GenerateError::Cancelled.is_cancelled());
    }
}
