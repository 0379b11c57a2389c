// src/codegen.rs
//
// Lookup expressions for pasting into another code base:
//
//   o == "nug12" ? 578 : o == "nug14" ? 1014 : throw "Instance not found!";
//
// The trailing throw belongs to the generated language. It is text here.

use crate::classify::Category;
use crate::config::consts::{NOT_FOUND_CLAUSE, STRING_QUOTE};
use crate::data::InstanceTable;
use crate::error::{Error, Result};

/// One `key == ? value :` clause per row, then the not-found fallback.
/// `wrap` goes on both sides of each value (`"\""` for string literals).
pub fn generate_code<K, V>(keys: &[K], values: &[V], wrap: &str) -> Result<String>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    if keys.len() != values.len() {
        return Err(Error::LengthMismatch { keys: keys.len(), values: values.len() });
    }

    let mut code = String::new();
    for (key, value) in keys.iter().zip(values) {
        code.push_str("o == \"");
        code.push_str(key.as_ref());
        code.push_str("\" ? ");
        code.push_str(wrap);
        code.push_str(value.as_ref());
        code.push_str(wrap);
        code.push_str(" : ");
    }
    code.push_str(NOT_FOUND_CLAUSE);
    Ok(code)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedCode {
    /// name → optimal value, bare numeric literals
    pub optimal: String,
    /// name → algorithm citation, quoted
    pub algorithm: String,
    /// name → category label, quoted
    pub category: String,
}

impl GeneratedCode {
    /// The three expressions, one per line, each line terminated.
    pub fn text(&self) -> String {
        format!("{}\n{}\n{}\n", self.optimal, self.algorithm, self.category)
    }
}

pub fn render(table: &InstanceTable, categories: &[Category]) -> Result<GeneratedCode> {
    let labels: Vec<&str> = categories.iter().map(|c| c.label()).collect();

    Ok(GeneratedCode {
        optimal: generate_code(table.names(), table.optimal(), "")?,
        algorithm: generate_code(table.names(), table.algorithms(), STRING_QUOTE)?,
        category: generate_code(table.names(), &labels, STRING_QUOTE)?,
    })
}
