// src/data.rs
//
// Extracted rows live in three parallel sequences. `push` is the only way in,
// so names/optimal/algorithms always have the same length.

use crate::classify::Category;
use crate::core::sanitize::normalize_cell;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstanceTable {
    names: Vec<String>,
    optimal: Vec<String>,
    algorithms: Vec<String>,
}

impl InstanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one row. Cells are trimmed and lower-cased.
    pub fn push(&mut self, name: &str, optimal: &str, algorithm: &str) {
        self.names.push(normalize_cell(name));
        self.optimal.push(normalize_cell(optimal));
        self.algorithms.push(normalize_cell(algorithm));
    }

    #[inline]
    pub fn len(&self) -> usize { self.names.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.names.is_empty() }

    #[inline]
    pub fn names(&self) -> &[String] { &self.names }

    #[inline]
    pub fn optimal(&self) -> &[String] { &self.optimal }

    #[inline]
    pub fn algorithms(&self) -> &[String] { &self.algorithms }

    /// (name, optimal, algorithm) in extraction order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.names
            .iter()
            .zip(&self.optimal)
            .zip(&self.algorithms)
            .map(|((n, o), a)| (n.as_str(), o.as_str(), a.as_str()))
    }
}

/// One fully resolved row, as shown in the GUI table and the TSV output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance {
    pub name: String,
    pub optimal: String,
    pub algorithm: String,
    pub category: Category,
}

pub const INSTANCE_HEADERS: [&str; 4] = ["Name", "Optimal", "Algorithm", "Category"];

impl Instance {
    pub fn cells(&self) -> [&str; 4] {
        [self.name.as_str(), self.optimal.as_str(), self.algorithm.as_str(), self.category.label()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_sequences_in_lock_step() {
        let mut t = InstanceTable::new();
        t.push(" Nug12 ", "578", "OPT");
        t.push("Tai20a", " 703482", " (ro-ts) ");

        assert_eq!(t.len(), 2);
        assert_eq!(t.names().len(), t.optimal().len());
        assert_eq!(t.optimal().len(), t.algorithms().len());
        assert_eq!(t.names(), &["nug12", "tai20a"]);
        assert_eq!(t.algorithms()[1], "(ro-ts)");
    }

    #[test]
    fn rows_zip_in_order() {
        let mut t = InstanceTable::new();
        t.push("a", "1", "x");
        t.push("b", "2", "y");
        let rows: Vec<_> = t.rows().collect();
        assert_eq!(rows, vec![("a", "1", "x"), ("b", "2", "y")]);
    }
}
