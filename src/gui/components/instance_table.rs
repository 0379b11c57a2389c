// src/gui/components/instance_table.rs
//
// Read-only view of the last scrape. Purely a view.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{data::INSTANCE_HEADERS, gui::app::App};

const ROW_H: f32 = 18.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.label(RichText::new(format!("Instances ({})", app.instances.len())).strong());

    let max_h = (ui.available_height() * 0.4).max(ROW_H * 4.0);

    TableBuilder::new(ui)
        .id_salt("instance_table")
        .striped(true)
        .max_scroll_height(max_h)
        .column(Column::initial(120.0).resizable(true).clip(true))
        .column(Column::initial(110.0).resizable(true).clip(true))
        .column(Column::initial(160.0).resizable(true).clip(true))
        .column(Column::remainder().at_least(60.0))
        .header(22.0, |mut header| {
            for h in INSTANCE_HEADERS {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_H, app.instances.len(), |mut row| {
                let Some(inst) = app.instances.get(row.index()) else { return };
                for (ci, cell) in inst.cells().into_iter().enumerate() {
                    row.col(|ui| {
                        // Optimal values are numbers; right-align them.
                        if ci == 1 {
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                ui.monospace(cell);
                            });
                        } else {
                            ui.label(cell);
                        }
                    });
                }
            });
        });
}
