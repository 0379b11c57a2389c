// src/gui/components/url_bar.rs

use eframe::egui;
use crate::{
    config::consts::{COPIED_HINT, DEFAULT_URL},
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut scrape_clicked = false;

    ui.horizontal(|ui| {
        ui.label("URL:");

        let button_w = 90.0;
        let edit_w = (ui.available_width() - button_w - 40.0).max(120.0);
        let edit = ui.add(
            egui::TextEdit::singleline(&mut app.state.options.scrape.url)
                .font(egui::TextStyle::Monospace)
                .desired_width(edit_w),
        );
        if edit.changed() {
            logd!("UI: url → {}", app.state.options.scrape.url);
        }
        let enter = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.button("↺").on_hover_text("Reset to the default archive page").clicked() {
            app.state.options.scrape.url = s!(DEFAULT_URL);
        }

        let red = egui::Color32::from_rgb(220, 30, 30);
        let button = ui.add(
            egui::Button::new(egui::RichText::new("SCRAPE").color(egui::Color32::BLACK).strong())
                .fill(red)
                .min_size(egui::vec2(button_w, 0.0)),
        );
        let button = if app.copied { button.on_hover_text(COPIED_HINT) } else { button };

        scrape_clicked = button.clicked() || enter;
    });

    // Run after the layout closure so the status line repaints with the result.
    if scrape_clicked {
        actions::scrape(app);
    }
}
