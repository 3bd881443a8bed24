//! Per-letter feedback for a guess
//!
//! Each guess position receives a [`Verdict`]:
//! - `Correct` = letter at the same position in the target (green)
//! - `Present` = letter appears elsewhere in the target (yellow)
//! - `Absent` = letter does not appear in the target (gray)
//!
//! The scorer is deliberately simple: it does not budget duplicate letters, so
//! a letter guessed twice against a target holding it once can be marked
//! `Present` twice.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Word;

/// Feedback for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Not in the target
    Absent,
    /// In the target, wrong position
    Present,
    /// Right letter, right position
    Correct,
}

impl Verdict {
    /// Emoji tile for this verdict
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Score one guess against the target
///
/// Returns one verdict per position. Inputs are expected to have equal length;
/// extra positions on either side are ignored.
///
/// # Examples
/// ```
/// use wordle_arcade::core::{score, Verdict};
///
/// let verdicts = score(b"CRANE", b"SLATE");
/// assert_eq!(verdicts[2], Verdict::Correct);
/// assert_eq!(verdicts[0], Verdict::Absent);
/// ```
#[must_use]
pub fn score(guess: &[u8], target: &[u8]) -> Vec<Verdict> {
    guess
        .iter()
        .zip(target)
        .map(|(&letter, &expected)| {
            if letter == expected {
                Verdict::Correct
            } else if target.contains(&letter) {
                Verdict::Present
            } else {
                Verdict::Absent
            }
        })
        .collect()
}

/// Feedback pattern for a whole guess
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feedback(Vec<Verdict>);

impl Feedback {
    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// # Examples
    /// ```
    /// use wordle_arcade::core::{Feedback, Word, WordLength};
    ///
    /// let guess = Word::new("crane", WordLength::Five).unwrap();
    /// let target = Word::new("slate", WordLength::Five).unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(feedback.to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        Self(score(guess.chars(), target.chars()))
    }

    /// Verdicts in position order
    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no positions
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&v| v == Verdict::Correct)
    }

    /// Count the correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Correct).count()
    }

    /// Count the present positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Present).count()
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use wordle_arcade::core::Feedback;
    ///
    /// let p1 = Feedback::parse("GY-GY").unwrap();
    /// let p2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let verdicts = s
            .chars()
            .map(|ch| match ch {
                'G' | 'g' | '🟩' => Some(Verdict::Correct),
                'Y' | 'y' | '🟨' => Some(Verdict::Present),
                '-' | '_' | '⬜' => Some(Verdict::Absent),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()?;

        if verdicts.is_empty() {
            return None;
        }
        Some(Self(verdicts))
    }

    /// Convert pattern to emoji string
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

/// Aggregate display verdict for `letter` across every submitted guess
///
/// Favors `Correct` over `Present` over `Absent`. Returns `None` if the letter
/// was never guessed.
#[must_use]
pub fn letter_status(guesses: &[Word], target: &Word, letter: u8) -> Option<Verdict> {
    guesses
        .iter()
        .flat_map(|guess| {
            score(guess.chars(), target.chars())
                .into_iter()
                .zip(guess.chars())
                .filter(move |&(_, &ch)| ch == letter)
                .map(|(verdict, _)| verdict)
                .collect::<Vec<_>>()
        })
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordLength;

    fn word(text: &str) -> Word {
        Word::parse(text).unwrap()
    }

    #[test]
    fn score_length_matches_word_length() {
        for (guess, target) in [("crane", "slate"), ("puzzle", "letter"), ("arcades", "puzzles")] {
            let verdicts = score(word(guess).chars(), word(target).chars());
            assert_eq!(verdicts.len(), guess.len());
        }
    }

    #[test]
    fn score_all_absent() {
        let feedback = Feedback::calculate(&word("bumpy"), &word("crane"));
        assert_eq!(feedback.count_correct(), 0);
        assert_eq!(feedback.count_present(), 0);
        assert_eq!(feedback.to_emoji(), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn score_all_correct() {
        let w = word("crane");
        let feedback = Feedback::calculate(&w, &w);
        assert!(feedback.is_perfect());
        assert_eq!(feedback.count_correct(), 5);
    }

    #[test]
    fn exact_position_always_correct() {
        // ROBOT vs FLOOR: the second O sits at FLOOR's index 3
        let verdicts = score(b"ROBOT", b"FLOOR");
        assert_eq!(
            verdicts,
            vec![
                Verdict::Present,
                Verdict::Present,
                Verdict::Absent,
                Verdict::Correct,
                Verdict::Absent
            ]
        );
    }

    #[test]
    fn duplicate_letters_not_budgeted() {
        // Target holds one L; both guessed L's off-position are marked present
        let verdicts = score(b"LLAMA", b"HOTEL");
        assert_eq!(verdicts[0], Verdict::Present);
        assert_eq!(verdicts[1], Verdict::Present);
    }

    #[test]
    fn feedback_parse_valid() {
        let p1 = Feedback::parse("GYG--").unwrap();
        let p2 = Feedback::parse("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Feedback::parse("gyg__").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.count_correct(), 2);
        assert_eq!(p1.count_present(), 1);
    }

    #[test]
    fn feedback_parse_invalid() {
        assert!(Feedback::parse("GXGGY").is_none());
        assert!(Feedback::parse("").is_none());
        assert!("GQ".parse::<Feedback>().is_err());
    }

    #[test]
    fn letter_status_prefers_correct() {
        let target = word("crane");
        let guesses = vec![word("react"), word("crepe")];

        // C: present in REACT, correct in CREPE
        assert_eq!(letter_status(&guesses, &target, b'C'), Some(Verdict::Correct));
        // E: present in REACT, present + correct in CREPE
        assert_eq!(letter_status(&guesses, &target, b'E'), Some(Verdict::Correct));
        // T only ever absent
        assert_eq!(letter_status(&guesses, &target, b'T'), Some(Verdict::Absent));
        // A sits at index 2 in both REACT and CRANE
        assert_eq!(letter_status(&guesses, &target, b'A'), Some(Verdict::Correct));
        // R only present when REACT is the sole guess
        assert_eq!(
            letter_status(&guesses[..1], &target, b'R'),
            Some(Verdict::Present)
        );
        // Never guessed
        assert_eq!(letter_status(&guesses, &target, b'Z'), None);
    }

    #[test]
    fn letter_status_no_guesses() {
        let target = Word::new("crane", WordLength::Five).unwrap();
        assert_eq!(letter_status(&[], &target, b'C'), None);
    }
}
