// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: f32,
    pub window_h: f32,

    /// Instance table above the code view
    pub show_table: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 900.0,
            window_h: 640.0,
            show_table: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
