//! Memo of validation verdicts
//!
//! Owned by a single [`WordValidator`](super::WordValidator). Entries are
//! write-once per key and live until [`ValidationCache::clear`] or process exit.

use rustc_hash::FxHashMap;

use crate::core::WordLength;

/// Verdicts keyed by (uppercase word, length)
#[derive(Debug, Default, Clone)]
pub struct ValidationCache {
    entries: FxHashMap<(String, WordLength), bool>,
}

impl ValidationCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached verdict, if any
    #[must_use]
    pub fn get(&self, word: &str, length: WordLength) -> Option<bool> {
        self.entries.get(&(word.to_string(), length)).copied()
    }

    /// Record a verdict; an existing entry for the key is kept
    ///
    /// Returns the verdict stored for the key.
    pub fn insert(&mut self, word: &str, length: WordLength, valid: bool) -> bool {
        *self
            .entries
            .entry((word.to_string(), length))
            .or_insert(valid)
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
