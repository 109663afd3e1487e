//! TextDXF 用户界面
//!
//! 基于egui的即时模式参数表单。

pub mod form_panel;
pub mod state;

pub use form_panel::{show_form_panel, FormAction};
pub use state::FormState;
