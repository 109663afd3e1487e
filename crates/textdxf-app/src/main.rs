//! TextDXF 主应用程序入口
//! 使用 eframe 作为应用框架，表单、目录选择和覆盖确认都在 UI 线程上同步完成

use anyhow::Result;
use eframe::egui;
use std::path::Path;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use textdxf_core::generator::{Generator, OverwritePrompt};
use textdxf_file::DxfWriter;
use textdxf_ui::{show_form_panel, FormAction, FormState};

const APP_TITLE: &str = "DXF Text Generator";

/// TextDXF 应用程序
struct TextDxfApp {
    form: FormState,
    generator: Generator<DxfWriter>,
}

impl Default for TextDxfApp {
    fn default() -> Self {
        Self {
            form: FormState::default(),
            generator: Generator::new(DxfWriter::new()),
        }
    }
}

/// 原生模态确认框，阻塞直到用户选择
struct NativeOverwritePrompt;

impl OverwritePrompt for NativeOverwritePrompt {
    fn confirm_overwrite(&mut self, path: &Path) -> bool {
        let answer = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title("Overwrite File")
            .set_description(format!("File already exists. Overwrite?\n{}", path.display()))
            .set_buttons(rfd::MessageButtons::YesNo)
            .show();
        matches!(answer, rfd::MessageDialogResult::Yes)
    }
}

impl TextDxfApp {
    /// 打开目录对话框 - 选择输出目录
    fn show_directory_dialog(&mut self) {
        if let Some(dir) = rfd::FileDialog::new()
            .set_title("Choose Directory")
            .pick_folder()
        {
            self.form.set_output_dir(dir);
        }
    }

    /// 生成DXF并刷新状态栏
    fn generate(&mut self) {
        let input = self.form.to_input();
        let outcome = self
            .generator
            .generate(&input, &self.form.session, &mut NativeOverwritePrompt);
        self.form.apply_outcome(&outcome);
    }
}

impl eframe::App for TextDxfApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match show_form_panel(ctx, &mut self.form) {
            FormAction::ChooseDirectory => self.show_directory_dialog(),
            FormAction::Generate => self.generate(),
            FormAction::None => {}
        }
    }
}

fn main() -> Result<()> {
    // 初始化日志
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder().with_max_level(Level::INFO).finish()
    )?;

    info!("Starting {}...", APP_TITLE);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 260.0])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(|_cc| Ok(Box::new(TextDxfApp::default()))),
    ).map_err(|e| anyhow::anyhow!("eframe error: {}", e))?;

    Ok(())
}
