// src/specs/instances.rs
//
// Instance tables on the QAPLIB index page. Each table is a <pre> block with
// one instance per line:
//
//   <a href="data.d/nug12.dat">Nug12</a>   12     578 (OPT)  <a ...>(sol)</a>
//
// Some tables link the value too:
//
//   <a href="data.d/tai35b.dat">Tai35b</a> 35  <a href="soln.d/tai35b.sln">283315445</a> (RO-TS)
//
// The size column (2-3 digits) is matched but not kept.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::html;
use crate::data::InstanceTable;

static ROW_PLAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^\s*<a .*?>(.*?)</a>\s*\d{2,3}\s*(\d+)\s*\((.*?)\)").unwrap()
});

static ROW_LINKED_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^\s*<a .*?>(.*?)</a>\s*\d{2,3}\s*<[^>]*>\s*(\d+)\s*</a>\s*\((.*?)\)").unwrap()
});

struct RowMatch<'a> {
    at: usize,
    name: &'a str,
    optimal: &'a str,
    algorithm: &'a str,
}

fn matches_of<'a>(re: &Regex, block: &'a str, out: &mut Vec<RowMatch<'a>>) {
    for caps in re.captures_iter(block) {
        let (Some(name), Some(optimal), Some(algorithm)) = (caps.get(1), caps.get(2), caps.get(3))
        else {
            continue;
        };
        out.push(RowMatch {
            at: name.start(),
            name: name.as_str(),
            optimal: optimal.as_str(),
            algorithm: algorithm.as_str(),
        });
    }
}

/// Append every instance row of one `<pre>` block to `table`: all plain-layout
/// rows in document order, then all linked-value rows in document order.
/// Returns the number of rows added.
pub fn extract_block(block: &str, table: &mut InstanceTable) -> usize {
    let block = html::strip_footnote_markers(block);

    let mut found = Vec::new();
    matches_of(&ROW_PLAIN, &block, &mut found);
    let plain = found.len();

    let mut linked = Vec::new();
    matches_of(&ROW_LINKED_VALUE, &block, &mut linked);
    // A row already taken by the plain layout is not added twice.
    linked.retain(|l| !found[..plain].iter().any(|m| m.at == l.at));
    found.extend(linked);

    logd!(
        "Extract: block rows={} (plain={}, linked={})",
        found.len(),
        plain,
        found.len() - plain
    );

    for m in &found {
        table.push(m.name, m.optimal, m.algorithm);
    }
    found.len()
}

/// All instance rows on the page.
pub fn extract(doc: &str) -> InstanceTable {
    let mut table = InstanceTable::new();
    let mut blocks = 0usize;
    for block in html::pre_blocks(doc) {
        blocks += 1;
        extract_block(block, &mut table);
    }
    logf!("Extract: {} <pre> block(s), {} instance row(s)", blocks, table.len());
    table
}
