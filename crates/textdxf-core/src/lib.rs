//! TextDXF 核心
//!
//! 把表单中的文字、单位、宽高比和高度转换为单实体文字图纸，
//! 并决定输出路径与是否覆盖已有文件。
//!
//! # 架构设计
//!
//! 生成流程只依赖两个协作者：
//! - `DrawingWriter`: 负责把 `TextDrawing` 编码并写入磁盘
//! - `OverwritePrompt`: 目标文件已存在时向用户确认是否覆盖
//!
//! # 示例
//!
//! ```rust
//! use textdxf_core::prelude::*;
//!
//! let ratio: AspectRatio = "3:2".parse().unwrap();
//! assert_eq!(ratio.width_for(9.0).unwrap(), 6.0);
//! assert_eq!(sanitize("a/b c"), "ab_c");
//! ```

pub mod drawing;
pub mod error;
pub mod generator;
pub mod request;
pub mod sanitize;
pub mod session;
pub mod status;
pub mod units;

pub use error::GenerateError;
pub use generator::Generator;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::drawing::{GeneratorOptions, TextDrawing};
    pub use crate::error::{Field, GenerateError};
    pub use crate::generator::{DrawingWriter, Generator, OverwritePrompt};
    pub use crate::request::{AspectRatio, FormInput, GenerationRequest};
    pub use crate::sanitize::sanitize;
    pub use crate::session::Session;
    pub use crate::status::{Severity, StatusMessage};
    pub use crate::units::Unit;
}
