// src/gui/progress.rs
use std::sync::{Arc, Mutex};
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, url: &str) {
        logd!("UI: Scrape started for {}", url);
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn finish(&mut self, found: Option<usize>) {
        // Errors are reported by the caller, which has the message.
        if let Some(n) = found {
            self.set_status(format!("{n} instances scraped."));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_writes_summary() {
        let status = Arc::new(Mutex::new(s!("Idle")));
        let mut p = GuiProgress::new(status.clone());
        p.log("Fetching x");
        assert_eq!(*status.lock().unwrap(), "Fetching x");
        p.finish(Some(134));
        assert_eq!(*status.lock().unwrap(), "134 instances scraped.");
        p.finish(None);
        assert_eq!(*status.lock().unwrap(), "134 instances scraped.");
    }
}
