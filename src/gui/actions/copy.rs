// src/gui/actions/copy.rs
use eframe::egui;
use crate::gui::app::App;

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.result_text.is_empty() {
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    logf!("Copy: {} bytes", app.result_text.len());
    ui_ctx.copy_text(app.result_text.clone());
    app.copied = true;
}
