// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod classify;
pub mod codegen;
pub mod data;
pub mod file;
pub mod progress;
pub mod scrape;

pub mod cli;
pub mod gui;

pub use error::{Error, Result};
pub use scrape::{scrape, scrape_html, Scraped};
