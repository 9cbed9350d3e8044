// src/spec/header.rs
use std::collections::HashMap;

use crate::spec::ColumnSpec;

/// Maps each header column, by position, to the output slot it feeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderIndex {
    /// One entry per header column. `None` means the column is discarded.
    slots: Vec<Option<usize>>,
}

impl HeaderIndex {
    /// Looks up every header token against the specs' match names.
    /// Comparison is byte-exact; when two specs share a match name the
    /// earlier one wins.
    pub fn build<T: AsRef<[u8]>>(header: &[T], specs: &[ColumnSpec]) -> Self {
        let mut by_name: HashMap<&[u8], usize> = HashMap::with_capacity(specs.len());
        for (idx, spec) in specs.iter().enumerate() {
            by_name.entry(spec.match_name.as_bytes()).or_insert(idx);
        }

        let slots = header
            .iter()
            .map(|token| by_name.get(token.as_ref()).copied())
            .collect();

        Self { slots }
    }

    /// Number of columns the header declared. Every data row must match it.
    pub fn column_count(&self) -> usize {
        self.slots.len()
    }

    /// Output slot fed by header column `column`, if any.
    pub fn slot(&self, column: usize) -> Option<usize> {
        self.slots.get(column).copied().flatten()
    }

    /// Slot per header column, in header order.
    pub fn slots(&self) -> &[Option<usize>] {
        &self.slots
    }

    /// Specs that no header column feeds.
    pub fn unmatched<'a>(&self, specs: &'a [ColumnSpec]) -> Vec<&'a ColumnSpec> {
        specs
            .iter()
            .enumerate()
            .filter(|(idx, _)| !self.slots.contains(&Some(*idx)))
            .map(|(_, spec)| spec)
            .collect()
    }
}
