// src/config/options.rs
use super::consts::DEFAULT_URL;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub output: OutputOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Raw text as typed; trimmed on use.
    pub url: String,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self { url: s!(DEFAULT_URL) }
    }
}

impl ScrapeOptions {
    pub fn url(&self) -> &str {
        self.url.trim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    /// Copy the generated code to the clipboard whenever it changes (GUI only).
    pub auto_copy: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self { auto_copy: true }
    }
}
