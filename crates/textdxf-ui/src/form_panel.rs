//! 参数表单面板

use crate::state::{FormState, ASPECT_RATIO_PRESETS};
use textdxf_core::prelude::{Severity, Unit};

/// 本帧用户触发的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    ChooseDirectory,
    Generate,
}

/// 状态级别对应的颜色
pub fn severity_color(severity: Severity, visuals: &egui::Visuals) -> egui::Color32 {
    match severity {
        Severity::Success => egui::Color32::from_rgb(0, 170, 0),
        Severity::Info => visuals.text_color(),
        Severity::Error => egui::Color32::from_rgb(220, 40, 40),
    }
}

/// 渲染参数表单
pub fn show_form_panel(ctx: &egui::Context, state: &mut FormState) -> FormAction {
    let mut action = FormAction::None;

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::Grid::new("generator_form")
            .num_columns(3)
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                ui.label("Enter Text:");
                ui.add(egui::TextEdit::singleline(&mut state.text).desired_width(220.0));
                ui.end_row();

                ui.label("Select Unit:");
                egui::ComboBox::from_id_salt("unit")
                    .selected_text(state.unit.as_str())
                    .show_ui(ui, |ui| {
                        for unit in Unit::ALL {
                            ui.selectable_value(&mut state.unit, unit, unit.as_str());
                        }
                    });
                ui.end_row();

                // 可手动输入，也可从预设中选择
                ui.label("Select Aspect Ratio:");
                ui.horizontal(|ui| {
                    ui.add(egui::TextEdit::singleline(&mut state.aspect_ratio).desired_width(80.0));
                    egui::ComboBox::from_id_salt("aspect_ratio_presets")
                        .selected_text("Presets")
                        .show_ui(ui, |ui| {
                            for preset in ASPECT_RATIO_PRESETS {
                                if ui
                                    .selectable_label(state.aspect_ratio == preset, preset)
                                    .clicked()
                                {
                                    state.aspect_ratio = preset.to_string();
                                }
                            }
                        });
                });
                ui.end_row();

                ui.label("Enter Height:");
                ui.add(egui::TextEdit::singleline(&mut state.height).desired_width(220.0));
                ui.end_row();

                ui.label("Output Directory:");
                ui.label(state.output_dir_label());
                if ui.button("Choose Directory").clicked() {
                    action = FormAction::ChooseDirectory;
                }
                ui.end_row();
            });

        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            if ui.button("Generate DXF").clicked() {
                action = FormAction::Generate;
            }

            if !state.status.text.is_empty() {
                ui.add_space(4.0);
                let color = severity_color(state.status.severity, ui.visuals());
                ui.colored_label(color, &state.status.text);
            }
        });
    });

    action
}
