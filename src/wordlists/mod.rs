//! Word lists for each playable length
//!
//! Provides embedded curated lists compiled into the binary and the
//! [`WordListProvider`] seam the validator and target picker read through.

mod embedded;
pub mod loader;

pub use embedded::{WORDS_5, WORDS_5_COUNT, WORDS_6, WORDS_6_COUNT, WORDS_7, WORDS_7_COUNT};

use std::io;
use std::path::Path;

use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

use crate::core::WordLength;
use crate::error::{GameError, GameResult};
use loader::{load_from_file, words_from_slice};

/// Source of the curated word list for each length
pub trait WordListProvider {
    /// All curated words of `length`, uppercase, in list order
    fn words_for_length(&self, length: WordLength) -> &[String];

    /// Check membership of an uppercase word
    fn contains(&self, word: &str, length: WordLength) -> bool {
        self.words_for_length(length).iter().any(|w| w == word)
    }
}

/// Curated lists with hashed membership
#[derive(Debug, Clone)]
pub struct WordBank {
    lists: [Vec<String>; 3],
    index: [FxHashSet<String>; 3],
}

impl WordBank {
    /// Bank over the lists embedded at build time
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_lists(
            words_from_slice(WORDS_5, WordLength::Five),
            words_from_slice(WORDS_6, WordLength::Six),
            words_from_slice(WORDS_7, WordLength::Seven),
        )
    }

    /// Bank over caller-supplied lists
    ///
    /// Words are expected to be uppercase and of the matching length.
    #[must_use]
    pub fn from_lists(five: Vec<String>, six: Vec<String>, seven: Vec<String>) -> Self {
        let lists = [five, six, seven];
        let index = lists
            .clone()
            .map(|list| list.into_iter().collect::<FxHashSet<_>>());
        Self { lists, index }
    }

    /// Replace the list for one length
    #[must_use]
    pub fn with_list(mut self, length: WordLength, words: Vec<String>) -> Self {
        let slot = slot(length);
        self.index[slot] = words.iter().cloned().collect();
        self.lists[slot] = words;
        self
    }

    /// Replace lists with `words-{5,6,7}.txt` files found in `dir`
    ///
    /// Missing files and files with no usable words keep the current list.
    ///
    /// # Errors
    /// Returns an I/O error if an existing file cannot be read.
    pub fn with_overrides_from<P: AsRef<Path>>(mut self, dir: P) -> io::Result<Self> {
        for length in WordLength::ALL {
            let path = dir.as_ref().join(format!("words-{length}.txt"));
            if !path.is_file() {
                continue;
            }
            let words = load_from_file(&path, length)?;
            if words.is_empty() {
                tracing::warn!(path = %path.display(), "word list override has no usable words");
                continue;
            }
            tracing::debug!(path = %path.display(), count = words.len(), "loaded word list override");
            self = self.with_list(length, words);
        }
        Ok(self)
    }

    /// Number of curated words for `length`
    #[must_use]
    pub fn count(&self, length: WordLength) -> usize {
        self.lists[slot(length)].len()
    }

    /// Pick a uniformly random curated word
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if the list for `length` is empty.
    pub fn random_word<R: Rng + ?Sized>(&self, length: WordLength, rng: &mut R) -> GameResult<&str> {
        self.lists[slot(length)]
            .choose(rng)
            .map(String::as_str)
            .ok_or(GameError::EmptyWordList(length))
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::embedded()
    }
}

impl WordListProvider for WordBank {
    fn words_for_length(&self, length: WordLength) -> &[String] {
        &self.lists[slot(length)]
    }

    fn contains(&self, word: &str, length: WordLength) -> bool {
        self.index[slot(length)].contains(word)
    }
}

const fn slot(length: WordLength) -> usize {
    match length {
        WordLength::Five => 0,
        WordLength::Six => 1,
        WordLength::Seven => 2,
    }
}
