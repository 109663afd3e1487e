//! 表单状态管理

use std::path::{Path, PathBuf};
use textdxf_core::prelude::*;

/// 宽高比预设
pub const ASPECT_RATIO_PRESETS: [&str; 2] = ["2:1", "3:2"];

/// 未选择目录时的提示
pub const NO_DIRECTORY_LABEL: &str = "No directory selected";

/// 表单状态
///
/// 字段保存用户输入的原始文本，生成时才交给核心校验。
#[derive(Debug, Clone)]
pub struct FormState {
    pub text: String,
    pub unit: Unit,
    pub aspect_ratio: String,
    pub height: String,
    /// 跨多次生成保留的输出目录
    pub session: Session,
    /// 状态栏
    pub status: StatusMessage,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            text: String::new(),
            unit: Unit::default(),
            aspect_ratio: ASPECT_RATIO_PRESETS[0].to_string(),
            height: String::new(),
            session: Session::new(),
            status: StatusMessage::default(),
        }
    }
}

impl FormState {
    /// 当前字段的扁平快照
    pub fn to_input(&self) -> FormInput {
        FormInput {
            text: self.text.clone(),
            unit: self.unit.as_str().to_string(),
            aspect_ratio: self.aspect_ratio.clone(),
            height: self.height.clone(),
        }
    }

    pub fn set_output_dir(&mut self, dir: PathBuf) {
        tracing::info!("Output directory: {}", dir.display());
        self.session.set_output_dir(dir);
    }

    pub fn output_dir_label(&self) -> String {
        self.session
            .output_dir()
            .map(Path::display)
            .map(|d| d.to_string())
            .unwrap_or_else(|| NO_DIRECTORY_LABEL.to_string())
    }

    /// 用生成结果刷新状态栏
    pub fn apply_outcome(&mut self, outcome: &Result<PathBuf, GenerateError>) {
        self.status = StatusMessage::from_outcome(outcome);
    }
}
