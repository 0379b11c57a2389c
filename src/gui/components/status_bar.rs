// src/gui/components/status_bar.rs

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if ui
            .add_enabled(!app.result_text.is_empty(), egui::Button::new("Copy"))
            .clicked()
        {
            actions::copy(app, ui.ctx());
        }

        let output = &mut app.state.options.output;
        if ui.checkbox(&mut output.auto_copy, "Copy on change").changed() {
            logf!("UI: auto_copy → {}", output.auto_copy);
        }

        let gui = &mut app.state.gui;
        if ui.checkbox(&mut gui.show_table, "Show table").changed() {
            logf!("UI: show_table → {}", gui.show_table);
        }

        ui.separator();

        let status = app.status_text();
        ui.label(status);
        if app.copied {
            ui.weak("(on clipboard)");
        }
    });
}
