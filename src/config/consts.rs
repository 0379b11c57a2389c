// src/config/consts.rs

// Net config
pub const DEFAULT_URL: &str = "http://www.seas.upenn.edu/qaplib/inst.html#El";
pub const USER_AGENT: &str = concat!("qaplib_scrape/", env!("CARGO_PKG_VERSION"));

// Local debug log
pub const LOG_FILE: &str = ".store/debug.log";

// Generated code
pub const NOT_FOUND_CLAUSE: &str = "throw \"Instance not found!\";";
pub const STRING_QUOTE: &str = "\"";

// GUI
pub const WINDOW_TITLE: &str = "QAPLIB Scraper";
pub const COPIED_HINT: &str = "Copied to clipboard!";
