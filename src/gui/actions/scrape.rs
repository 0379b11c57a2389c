// src/gui/actions/scrape.rs
use crate::{
    gui::app::App,
    gui::progress::GuiProgress,
    scrape as pipeline,
};

pub fn scrape(app: &mut App) {
    let url = s!(app.state.options.scrape.url());
    logf!("UI: Scrape clicked url={}", url);

    let mut prog = GuiProgress::new(app.status.clone());

    // Blocks the UI thread until the page is in.
    match pipeline::scrape(&url, Some(&mut prog)) {
        Ok(scraped) => {
            let text = scraped.code.text();
            app.set_result(scraped.instances(), text);
            app.status(scraped.summary());
        }
        Err(e) => {
            app.clear_result();
            app.status(format!("Error: {e}"));
        }
    }
}
