// src/gui/actions/mod.rs
//
// Folder module facade: consumers only see actions::{copy, scrape}.

mod copy;
mod scrape;

pub use copy::copy;
pub use scrape::scrape;
