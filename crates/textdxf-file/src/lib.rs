//! TextDXF 文件格式处理
//!
//! 把核心生成的 `TextDrawing` 编码为 `.dxf` 并写入磁盘。

pub mod dxf_io;
pub mod error;

pub use dxf_io::DxfWriter;
pub use error::FileError;
