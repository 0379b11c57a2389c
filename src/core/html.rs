// src/core/html.rs
//
// Regex helpers over raw markup. Nothing here builds a DOM; the archive pages
// are hand-written HTML and the interesting data sits in <pre> blocks.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static PRE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<pre>[\s\S]*?</pre>").unwrap());

// A single tag (no '<' or '>' inside) directly wrapping "*". Matching one tag
// only keeps the strip from eating the entry that precedes the marker.
static FOOTNOTE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<[^<>]*>\*</a>").unwrap());

/// All `<pre>…</pre>` regions (tags included), in document order.
pub fn pre_blocks(doc: &str) -> impl Iterator<Item = &str> {
    PRE_BLOCK.find_iter(doc).map(|m| m.as_str())
}

/// Drop `<a …>*</a>` footnote markers.
pub fn strip_footnote_markers(block: &str) -> Cow<'_, str> {
    FOOTNOTE_MARKER.replace_all(block, "")
}
