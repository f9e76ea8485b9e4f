//! Recognizes the `@scratch <path>/<order>` tag that opens an extracted block.

use crate::model::{OrderKey, OutputPath};
use once_cell::sync::Lazy;
use regex::Regex;

// Greedy path: everything up to the final `/` belongs to the path.
static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@scratch\s+(.*)/([^/]*)").expect("tag regex is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    Tagged { path: OutputPath, order: OrderKey },
    NoMatch,
}

/// Looks for a tag anywhere in `text` (the begin line with its marker removed).
pub fn parse_tag(text: &str) -> Tag {
    match TAG_RE.captures(text) {
        Some(caps) => Tag::Tagged {
            path: OutputPath::new(&caps[1]),
            order: OrderKey::new(&caps[2]),
        },
        None => Tag::NoMatch,
    }
}
