//! # Page specs
//!
//! Where the data lives in the archive's HTML and how to pull it out.
//!
//! - Pure text in, rows out. No network, no GUI, no code generation.
//! - Patterns are regexes over raw markup. The archive pages are old
//!   hand-written HTML, so matching is case-insensitive and tolerant of
//!   whitespace, but anchored to the line layout of each table.
//! - Every spec is testable offline against inline fixtures.
//!
//! ```text
//! scrape::scrape → core::net::http_get → specs::instances::extract
//!                                      ↘ classify → codegen
//! ```
pub mod instances;
