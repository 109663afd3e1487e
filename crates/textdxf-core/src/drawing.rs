//! 待编码的文字图纸

use crate::error::GenerateError;
use crate::request::GenerationRequest;
use crate::units::Unit;
use nalgebra::Point2;

/// 默认图层
pub const DEFAULT_LAYER: &str = "0";

/// 图纸构造参数
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorOptions {
    /// 文字插入点
    pub insertion: Point2<f64>,
    /// 文字所在图层
    pub layer: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            insertion: Point2::origin(),
            layer: DEFAULT_LAYER.to_string(),
        }
    }
}

/// 只含一个文字实体的图纸
///
/// 在任何写入之前于内存中完整构造。
#[derive(Debug, Clone, PartialEq)]
pub struct TextDrawing {
    /// 文本内容
    pub content: String,
    /// 插入点
    pub insertion: Point2<f64>,
    /// 图层名称
    pub layer: String,
    /// 文字高度
    pub height: f64,
    /// 宽度因子（由宽高比推导）
    pub width_factor: f64,
    /// 绘图单位
    pub unit: Unit,
}

impl TextDrawing {
    /// 由请求构造图纸，宽高比第一分量为零时失败
    pub fn from_request(
        request: &GenerationRequest,
        options: &GeneratorOptions,
    ) -> Result<Self, GenerateError> {
        Ok(Self {
            content: request.text.clone(),
            insertion: options.insertion,
            layer: options.layer.clone(),
            height: request.height,
            width_factor: request.width()?,
            unit: request.unit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::AspectRatio;
    use std::path::PathBuf;

    fn request(ratio: AspectRatio) -> GenerationRequest {
        GenerationRequest {
            text: "Label 1".to_string(),
            unit: Unit::Millimeter,
            aspect_ratio: ratio,
            height: 10.0,
            output_directory: PathBuf::from("out"),
        }
    }

    #[test]
    fn test_from_request() {
        let drawing =
            TextDrawing::from_request(&request(AspectRatio::new(2, 1)), &GeneratorOptions::default())
                .unwrap();
        assert_eq!(drawing.content, "Label 1");
        assert_eq!(drawing.insertion, Point2::origin());
        assert_eq!(drawing.layer, DEFAULT_LAYER);
        assert_eq!(drawing.height, 10.0);
        assert_eq!(drawing.width_factor, 5.0);
        assert_eq!(drawing.unit, Unit::Millimeter);
    }

    #[test]
    fn test_from_request_zero_ratio() {
        let result =
            TextDrawing::from_request(&request(AspectRatio::new(0, 1)), &GeneratorOptions::default());
        assert!(matches!(result, Err(GenerateError::DivisionByZero)));
    }
}
