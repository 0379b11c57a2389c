// src/gui/components/result_view.rs

use eframe::egui;
use crate::{config::consts::COPIED_HINT, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.label(egui::RichText::new("Generated code").strong());

    egui::ScrollArea::vertical()
        .id_salt("result_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let resp = ui.add(
                egui::TextEdit::multiline(&mut app.result_text)
                    .code_editor()
                    .desired_width(f32::INFINITY)
                    .desired_rows(12),
            );
            // Hand edits go to the clipboard too.
            if resp.changed() {
                app.copy_pending = true;
                app.copied = false;
            }
            if app.copied {
                let _ = resp.on_hover_text(COPIED_HINT);
            }
        });
}
