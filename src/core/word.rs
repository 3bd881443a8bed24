//! Word representation
//!
//! A [`Word`] is an uppercase ASCII word whose length is one of the playable
//! [`WordLength`]s.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::WordError;

/// Playable word lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum WordLength {
    Five,
    Six,
    Seven,
}

impl WordLength {
    /// All lengths in ascending order
    pub const ALL: [Self; 3] = [Self::Five, Self::Six, Self::Seven];

    /// Number of letters
    #[inline]
    #[must_use]
    pub const fn letters(self) -> usize {
        match self {
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
        }
    }

    /// Default number of guesses allowed for this length
    #[must_use]
    pub const fn default_max_guesses(self) -> usize {
        match self {
            Self::Five | Self::Six => 6,
            Self::Seven => 7,
        }
    }
}

impl TryFrom<usize> for WordLength {
    type Error = WordError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(Self::Five),
            6 => Ok(Self::Six),
            7 => Ok(Self::Seven),
            other => Err(WordError::UnsupportedLength(other)),
        }
    }
}

impl From<WordLength> for usize {
    fn from(length: WordLength) -> Self {
        length.letters()
    }
}

impl fmt::Display for WordLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters())
    }
}

/// An uppercase word of a playable length
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    length: WordLength,
}

impl Word {
    /// Create a word that must have exactly `length` letters
    ///
    /// Input is trimmed and uppercased first.
    ///
    /// # Errors
    /// Returns `WordError` if the length differs or the text has non-letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_arcade::core::{Word, WordLength};
    ///
    /// let word = Word::new("crane", WordLength::Five).unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("crane", WordLength::Six).is_err());
    /// assert!(Word::new("cr4ne", WordLength::Five).is_err());
    /// ```
    pub fn new(text: &str, length: WordLength) -> Result<Self, WordError> {
        let text = normalize(text);

        if !text.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let actual = text.len();
        if actual != length.letters() {
            return Err(WordError::InvalidLength {
                expected: length.letters(),
                actual,
            });
        }

        Ok(Self { text, length })
    }

    /// Create a word and infer its length
    ///
    /// # Errors
    /// Returns `WordError::UnsupportedLength` for lengths other than 5-7.
    pub fn parse(text: &str) -> Result<Self, WordError> {
        let normalized = normalize(text);
        let length = WordLength::try_from(normalized.chars().count())?;
        Self::new(&normalized, length)
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Word length
    #[inline]
    #[must_use]
    pub const fn length(&self) -> WordLength {
        self.length
    }

    /// Check if the word contains a specific (uppercase) letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars().contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_uppercase()
}
