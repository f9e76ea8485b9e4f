//! # Fragment Store
//!
//! Run-scoped accumulator: `OutputPath → OrderKey → [Chunk]`.
//!
//! Chunks under one key stay in the order they were appended (file-scan order,
//! then top-to-bottom). Keys are kept unordered and sorted once, when a path's
//! chunks are read for writing.

use crate::model::{Chunk, OrderKey, OutputPath};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Default)]
pub struct FragmentStore {
    docs: BTreeMap<OutputPath, HashMap<OrderKey, Vec<Chunk>>>,
}

impl FragmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, path: OutputPath, order: OrderKey, chunk: Chunk) {
        self.docs
            .entry(path)
            .or_default()
            .entry(order)
            .or_default()
            .push(chunk);
    }

    /// Distinct output paths, sorted.
    pub fn paths(&self) -> impl Iterator<Item = &OutputPath> {
        self.docs.keys()
    }

    /// All chunks for `path`, ascending by key; same-key chunks keep append order.
    pub fn ordered_chunks(&self, path: &OutputPath) -> Vec<&Chunk> {
        let Some(by_key) = self.docs.get(path) else {
            return Vec::new();
        };
        let mut keys: Vec<&OrderKey> = by_key.keys().collect();
        keys.sort();
        keys.into_iter()
            .flat_map(|key| by_key[key].iter())
            .collect()
    }
}
