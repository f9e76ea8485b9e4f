//! # Block Parser
//!
//! Walks one file's lines and pulls out the tagged comment blocks.
//!
//! ```text
//!            begin marker + @scratch tag
//!   Outside ─────────────────────────────▶ Inside(path, order)
//!      ▲                                       │  line marker → capture
//!      └───────────── end marker ──────────────┘  anything else → ignore
//! ```
//!
//! A begin line without a valid tag leaves the parser `Outside`, so the whole
//! block is skipped even if its lines carry the line marker. Inside a block,
//! the end marker is checked before the line marker (`*/` also starts with `*`).
//!
//! The parser never fails: unmatched markers and malformed tags produce nothing.

use crate::config::Markers;
use crate::model::Fragment;
use crate::store::FragmentStore;
use crate::tag::{parse_tag, Tag};

#[derive(Debug)]
enum State {
    Outside,
    Inside(Fragment),
}

pub struct BlockParser<'a> {
    markers: &'a Markers,
}

impl<'a> BlockParser<'a> {
    pub fn new(markers: &'a Markers) -> Self {
        Self { markers }
    }

    /// Returns the fragments of `source` in top-to-bottom order.
    ///
    /// A block left open at the end of the file keeps what it captured.
    pub fn parse(&self, source: &str) -> Vec<Fragment> {
        let mut fragments = Vec::new();
        let mut state = State::Outside;

        for raw in source.lines() {
            let line = raw.trim_start();
            state = match state {
                State::Outside => self.outside(line),
                State::Inside(mut fragment) => {
                    if line.starts_with(&self.markers.end) {
                        fragments.push(fragment);
                        State::Outside
                    } else {
                        if let Some(rest) = line.strip_prefix(self.markers.line.as_str()) {
                            fragment.chunk.push_line(&self.clean(rest));
                        }
                        State::Inside(fragment)
                    }
                }
            };
        }

        if let State::Inside(fragment) = state {
            fragments.push(fragment);
        }
        fragments
    }

    /// Parses `source` and appends every fragment to `store`.
    pub fn parse_into(&self, source: &str, store: &mut FragmentStore) {
        for fragment in self.parse(source) {
            store.append(fragment.path, fragment.order, fragment.chunk);
        }
    }

    fn outside(&self, line: &str) -> State {
        let Some(rest) = line.strip_prefix(self.markers.begin.as_str()) else {
            return State::Outside;
        };
        match parse_tag(rest) {
            Tag::Tagged { path, order } => State::Inside(Fragment::new(path, order)),
            Tag::NoMatch => State::Outside,
        }
    }

    fn clean(&self, text: &str) -> String {
        let strip = self.markers.strip.as_str();
        let text = if strip.is_empty() {
            text
        } else {
            text.strip_prefix(strip).unwrap_or(text)
        };
        if self.markers.unslash {
            text.replacen("\\/", "/", 1)
        } else {
            text.to_string()
        }
    }
}
