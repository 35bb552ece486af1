//! Memoized layouts keyed by `(word_size, widths)`.
//!
//! A layout is a pure function of its key, so entries never go stale. Errors
//! are returned to the caller and not stored. Entries are grouped by word
//! size, and lookups borrow the width slice; only a miss copies it.

use crate::error::LayoutError;
use crate::layout::WordLayout;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct LayoutCache {
    entries: HashMap<u64, HashMap<Vec<u32>, WordLayout>>,
    hits: u64,
    misses: u64,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached layout for `(word_size, widths)`, computing it on first use.
    pub fn get_or_compute(
        &mut self,
        word_size: u64,
        widths: &[u32],
    ) -> Result<WordLayout, LayoutError> {
        if let Some(layout) = self.get(word_size, widths) {
            let layout = layout.clone();
            self.hits += 1;
            return Ok(layout);
        }
        self.misses += 1;
        let layout = WordLayout::compute(word_size, widths)?;
        self.entries
            .entry(word_size)
            .or_default()
            .insert(widths.to_vec(), layout.clone());
        Ok(layout)
    }

    /// Cached layout without computing or counting.
    pub fn get(&self, word_size: u64, widths: &[u32]) -> Option<&WordLayout> {
        self.entries.get(&word_size)?.get(widths)
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// `(hits, misses)` since construction.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}
