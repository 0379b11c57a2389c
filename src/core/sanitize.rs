// src/core/sanitize.rs

/// Canonical form of a captured table cell: trimmed, lower-cased.
pub fn normalize_cell(s: &str) -> String {
    s.trim().to_lowercase()
}
