// src/classify.rs
//
// Instance categories by name. The table is data: first matching row wins,
// and a new category is one more row.
//
// In a pattern, '.' stands for "one or more digits" (tai.a ~ tai20a, tai100a).
// Patterns match anywhere in the name, case-insensitively.

use std::fmt;
use std::sync::LazyLock;

use regex::RegexSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    I,
    II,
    III,
    IV,
    Unknown,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::I => "[I]",
            Category::II => "[II]",
            Category::III => "[III]",
            Category::IV => "[IV]",
            Category::Unknown => "[?]",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub static CATEGORY_PATTERNS: &[(Category, &[&str])] = &[
    (Category::I,   &["tai.a"]),
    (Category::II,  &["nug", "sko", "wil", "tho"]),
    (Category::III, &["ste", "els", "bur", "kra", "tai.c", "esc"]),
    (Category::IV,  &["tai.b"]),
];

/// `tai.a` → `(?i)tai\d+a`. Everything except the placeholder is literal.
pub fn pattern_to_regex(pattern: &str) -> String {
    let body = pattern
        .split('.')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\d+");
    format!("(?i){body}")
}

/// A compiled pattern table. `classify` uses the built-in one; build your own
/// with `from_table` to try a different grouping.
pub struct Classifier {
    groups: Vec<(Category, RegexSet)>,
}

impl Classifier {
    pub fn from_table(table: &[(Category, &[&str])]) -> Result<Self, regex::Error> {
        let mut groups = Vec::with_capacity(table.len());
        for (cat, patterns) in table {
            let set = RegexSet::new(patterns.iter().map(|p| pattern_to_regex(p)))?;
            groups.push((*cat, set));
        }
        Ok(Self { groups })
    }

    pub fn category_of(&self, name: &str) -> Category {
        self.groups
            .iter()
            .find(|(_, set)| set.is_match(name))
            .map(|(cat, _)| *cat)
            .unwrap_or(Category::Unknown)
    }
}

static CLASSIFIER: LazyLock<Classifier> =
    LazyLock::new(|| Classifier::from_table(CATEGORY_PATTERNS).unwrap());

pub fn classify(name: &str) -> Category {
    CLASSIFIER.category_of(name)
}

/// One category per name, same order.
pub fn classify_all<S: AsRef<str>>(names: &[S]) -> Vec<Category> {
    names.iter().map(|n| classify(n.as_ref())).collect()
}
