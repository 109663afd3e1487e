//! 生成流程
//!
//! 每次调用依次经过：校验 → 解析 → 构图 → (确认覆盖) → 写出，
//! 最终以成功、失败或取消结束，不做重试。

use crate::drawing::{GeneratorOptions, TextDrawing};
use crate::error::GenerateError;
use crate::request::{FormInput, GenerationRequest};
use crate::session::Session;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// 目标文件已存在时的同步确认
pub trait OverwritePrompt {
    /// 返回 `true` 表示允许覆盖
    fn confirm_overwrite(&mut self, path: &Path) -> bool;
}

impl<F> OverwritePrompt for F
where
    F: FnMut(&Path) -> bool,
{
    fn confirm_overwrite(&mut self, path: &Path) -> bool {
        self(path)
    }
}

/// 图纸编码与写出
pub trait DrawingWriter {
    type Error: std::error::Error + Send + Sync + 'static;

    fn write(&self, drawing: &TextDrawing, path: &Path) -> Result<(), Self::Error>;
}

impl<W: DrawingWriter + ?Sized> DrawingWriter for &W {
    type Error = W::Error;

    fn write(&self, drawing: &TextDrawing, path: &Path) -> Result<(), Self::Error> {
        (**self).write(drawing, path)
    }
}

/// 文字图纸生成器
#[derive(Debug, Clone)]
pub struct Generator<W> {
    writer: W,
    options: GeneratorOptions,
}

impl<W: DrawingWriter> Generator<W> {
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, GeneratorOptions::default())
    }

    pub fn with_options(writer: W, options: GeneratorOptions) -> Self {
        Self { writer, options }
    }

    /// 执行一次生成，成功时返回写出的文件路径
    ///
    /// 最多写一次文件；任何中止路径都不会产生文件。
    pub fn generate(
        &self,
        input: &FormInput,
        session: &Session,
        prompt: &mut dyn OverwritePrompt,
    ) -> Result<PathBuf, GenerateError> {
        let result = self.run(input, session, prompt);
        match &result {
            Ok(path) => info!("Generated DXF: {}", path.display()),
            Err(GenerateError::Cancelled) => warn!("Generation cancelled by user"),
            Err(e @ GenerateError::Encoding(_)) => error!("Failed to write DXF: {}", e),
            Err(e) => warn!("Generation rejected: {}", e),
        }
        result
    }

    fn run(
        &self,
        input: &FormInput,
        session: &Session,
        prompt: &mut dyn OverwritePrompt,
    ) -> Result<PathBuf, GenerateError> {
        debug!("Validating form input");
        if let Some(field) = input.first_missing() {
            return Err(GenerateError::MissingField(field));
        }
        let output_dir = session.output_dir().ok_or(GenerateError::NoOutputDirectory)?;

        debug!("Parsing form input");
        let request = GenerationRequest::parse(input, output_dir)?;

        debug!(
            "Composing drawing: height={}, ratio={}, unit={}",
            request.height, request.aspect_ratio, request.unit
        );
        let drawing = TextDrawing::from_request(&request, &self.options)?;
        let path = request.output_path();

        if path.exists() {
            debug!("Output exists, asking to overwrite: {}", path.display());
            if !prompt.confirm_overwrite(&path) {
                return Err(GenerateError::Cancelled);
            }
        }

        debug!("Writing {}", path.display());
        self.writer
            .write(&drawing, &path)
            .map_err(|e| GenerateError::Encoding(Box::new(e)))?;

        Ok(path)
    }
}
