// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{consts::WINDOW_TITLE, state::AppState},
    data::Instance,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // last scrape, replaced wholesale on the next one
    pub instances: Vec<Instance>,
    pub result_text: String,

    // result_text changed since it was last put on the clipboard
    pub copy_pending: bool,
    pub copied: bool,

    // status line (progress sink writes here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!("Init: url={}", state.options.scrape.url());
        Self {
            state,
            instances: Vec::new(),
            result_text: s!(),
            copy_pending: false,
            copied: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Replace the visible output. Queues a clipboard copy.
    pub fn set_result(&mut self, instances: Vec<Instance>, text: String) {
        self.instances = instances;
        self.result_text = text;
        self.copy_pending = true;
        self.copied = false;
    }

    pub fn clear_result(&mut self) {
        self.set_result(Vec::new(), s!());
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("url_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            crate::gui::components::url_bar::draw(ui, self);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            crate::gui::components::status_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.gui.show_table {
                crate::gui::components::instance_table::draw(ui, self);
                ui.separator();
            }
            crate::gui::components::result_view::draw(ui, self);
        });

        if self.copy_pending {
            self.copy_pending = false;
            if self.state.options.output.auto_copy && !self.result_text.is_empty() {
                crate::gui::actions::copy(self, ctx);
            }
        }
    }
}
