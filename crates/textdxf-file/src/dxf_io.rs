//! DXF文件导出
//!
//! 生成只包含一个 TEXT 实体的 AutoCAD DXF 图纸：
//! - 文字高度 (组码 40)
//! - 宽度因子 (组码 41)
//! - 绘图单位 ($INSUNITS)

use crate::error::FileError;
use dxf::enums::{AcadVersion, Units};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use textdxf_core::drawing::TextDrawing;
use textdxf_core::generator::DrawingWriter;
use textdxf_core::units::Unit;
use tracing::debug;

/// DXF 写出器
#[derive(Debug, Clone)]
pub struct DxfWriter {
    /// 输出的 DXF 版本
    pub version: AcadVersion,
}

impl Default for DxfWriter {
    fn default() -> Self {
        Self {
            version: AcadVersion::R2010,
        }
    }
}

impl DxfWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(version: AcadVersion) -> Self {
        Self { version }
    }

    /// 在内存中构造完整的 DXF 图纸
    pub fn to_drawing(&self, drawing: &TextDrawing) -> Result<dxf::Drawing, FileError> {
        if drawing.layer.is_empty() {
            return Err(FileError::InvalidDrawing("layer name is empty".to_string()));
        }

        let mut dxf_drawing = dxf::Drawing::new();
        dxf_drawing.header.version = self.version;
        dxf_drawing.header.default_drawing_units = unit_to_dxf(drawing.unit);

        let mut text = dxf::entities::Text::default();
        text.location = dxf::Point::new(drawing.insertion.x, drawing.insertion.y, 0.0);
        text.text_height = drawing.height;
        text.relative_x_scale_factor = drawing.width_factor;
        text.value = drawing.content.clone();

        let mut entity = dxf::entities::Entity::new(dxf::entities::EntityType::Text(text));
        entity.common.layer = drawing.layer.clone();
        dxf_drawing.add_entity(entity);

        Ok(dxf_drawing)
    }

    /// 导出到DXF文件
    pub fn export(&self, drawing: &TextDrawing, path: &Path) -> Result<(), FileError> {
        let dxf_drawing = self.to_drawing(drawing)?;
        debug!("Saving DXF ({:?}) to {}", self.version, path.display());

        // 图纸已在内存中构造完成，创建文件失败时以 IO 错误返回
        let mut writer = BufWriter::new(File::create(path)?);
        dxf_drawing
            .save(&mut writer)
            .map_err(|e| FileError::Dxf(e.to_string()))?;
        writer.flush()?;

        Ok(())
    }
}

impl DrawingWriter for DxfWriter {
    type Error = FileError;

    fn write(&self, drawing: &TextDrawing, path: &Path) -> Result<(), FileError> {
        self.export(drawing, path)
    }
}

/// 绘图单位转 $INSUNITS
fn unit_to_dxf(unit: Unit) -> Units {
    match unit {
        Unit::Inch => Units::Inches,
        Unit::Millimeter => Units::Millimeters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use textdxf_core::prelude::*;

    fn text_drawing(unit: Unit) -> TextDrawing {
        TextDrawing {
            content: "Hello DXF".to_string(),
            insertion: GeneratorOptions::default().insertion,
            layer: "0".to_string(),
            height: 10.0,
            width_factor: 5.0,
            unit,
        }
    }

    fn only_text(drawing: &dxf::Drawing) -> dxf::entities::Text {
        let entities: Vec<_> = drawing.entities().collect();
        assert_eq!(entities.len(), 1);
        match &entities[0].specific {
            dxf::entities::EntityType::Text(text) => text.clone(),
            other => panic!("expected TEXT entity, got {:?}", other),
        }
    }

    #[test]
    fn test_to_drawing() {
        let drawing = DxfWriter::new().to_drawing(&text_drawing(Unit::Millimeter)).unwrap();
        assert_eq!(drawing.header.version, AcadVersion::R2010);
        assert_eq!(drawing.header.default_drawing_units, Units::Millimeters);

        let text = only_text(&drawing);
        assert_eq!(text.value, "Hello DXF");
        assert_eq!(text.text_height, 10.0);
        assert_eq!(text.relative_x_scale_factor, 5.0);
    }

    #[test]
    fn test_with_version() {
        let writer = DxfWriter::with_version(AcadVersion::R2000);
        let drawing = writer.to_drawing(&text_drawing(Unit::Inch)).unwrap();
        assert_eq!(drawing.header.version, AcadVersion::R2000);
    }

    #[test]
    fn test_empty_layer_rejected() {
        let mut drawing = text_drawing(Unit::Inch);
        drawing.layer.clear();
        assert!(matches!(
            DxfWriter::new().to_drawing(&drawing),
            Err(FileError::InvalidDrawing(_))
        ));
    }

    #[test]
    fn test_export_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.dxf");

        DxfWriter::new().export(&text_drawing(Unit::Inch), &path).unwrap();

        let loaded = dxf::Drawing::load_file(&path).unwrap();
        assert_eq!(loaded.header.default_drawing_units, Units::Inches);
        let text = only_text(&loaded);
        assert_eq!(text.value, "Hello DXF");
        assert_eq!(text.text_height, 10.0);
        assert_eq!(text.relative_x_scale_factor, 5.0);
    }

    #[test]
    fn test_export_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("hello.dxf");
        let result = DxfWriter::new().export(&text_drawing(Unit::Inch), &path);
        assert!(matches!(result, Err(FileError::Io(_))));
        assert!(!path.exists());
    }

    fn form(text: &str, ratio: &str, height: &str) -> FormInput {
        FormInput {
            text: text.to_string(),
            unit: "mm".to_string(),
            aspect_ratio: ratio.to_string(),
            height: height.to_string(),
        }
    }

    #[test]
    fn test_generate_second_time_prompts_and_decline_keeps_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let generator = Generator::new(DxfWriter::new());
        let session = Session::with_output_dir(dir.path());

        let path = generator
            .generate(&form("Part A/1", "3:2", "9"), &session, &mut |_: &Path| -> bool {
                panic!("no prompt expected for a new file")
            })
            .unwrap();
        assert_eq!(path, dir.path().join("Part_A1.dxf"));
        let text = only_text(&dxf::Drawing::load_file(&path).unwrap());
        assert_eq!(text.value, "Part A/1");
        assert_eq!(text.relative_x_scale_factor, 6.0);

        let original = fs::read(&path).unwrap();
        let mut prompted = false;
        let err = generator
            .generate(&form("Part A/1", "2:1", "40"), &session, &mut |_: &Path| {
                prompted = true;
                false
            })
            .unwrap_err();

        assert!(prompted);
        assert!(err.is_cancelled());
        assert_eq!(fs::read(&path).unwrap(), original);
    }

    #[test]
    fn test_generate_zero_ratio_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let generator = Generator::new(DxfWriter::new());
        let session = Session::with_output_dir(dir.path());

        let err = generator
            .generate(&form("Zero", "0:1", "10"), &session, &mut |_: &Path| true)
            .unwrap_err();
        assert!(matches!(err, GenerateError::DivisionByZero));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
