//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::{Word, WordLength};
use std::fs;
use std::io;
use std::path::Path;

/// Load words of one length from a file
///
/// One word per line. Blank lines, entries of the wrong length and entries
/// with non-letters are skipped. Words are returned uppercase, in file order.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_arcade::core::WordLength;
/// use wordle_arcade::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words-5.txt", WordLength::Five).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: WordLength) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines(), length))
}

/// Convert an embedded string slice to owned, validated words
///
/// # Examples
/// ```
/// use wordle_arcade::core::WordLength;
/// use wordle_arcade::wordlists::loader::words_from_slice;
/// use wordle_arcade::wordlists::WORDS_5;
///
/// let words = words_from_slice(WORDS_5, WordLength::Five);
/// assert_eq!(words.len(), WORDS_5.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], length: WordLength) -> Vec<String> {
    words_from_lines(slice.iter().copied(), length)
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>, length: WordLength) -> Vec<String> {
    lines
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed, length).ok().map(|w| w.text().to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "SLATE", "Irate"];
        let words = words_from_slice(input, WordLength::Five);

        assert_eq!(words, vec!["CRANE", "SLATE", "IRATE"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "sl4te", "slate"];
        let words = words_from_slice(input, WordLength::Five);

        assert_eq!(words, vec!["CRANE", "SLATE"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input, WordLength::Six).is_empty());
    }

    #[test]
    fn load_from_file_reads_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "planet\n\n  rocket \nsun\nplanets").unwrap();

        let words = load_from_file(file.path(), WordLength::Six).unwrap();
        assert_eq!(words, vec!["PLANET", "ROCKET"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from_file(dir.path().join("missing.txt"), WordLength::Five).is_err());
    }
}
