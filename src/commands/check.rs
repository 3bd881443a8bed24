//! Word check command

use std::time::Duration;

use anyhow::Result;
use indicatif::ProgressBar;

use super::Session;
use crate::core::{Word, WordLength};
use crate::output::print_check_result;

/// Validate each word and print the verdicts
///
/// The length comes from `length` when given, otherwise from the word.
/// Returns how many words were accepted.
///
/// # Errors
///
/// Returns an error if a word's length cannot be played.
pub async fn run_check(session: &Session, words: &[String], length: Option<WordLength>) -> Result<usize> {
    let mut validator = session.validator();
    let mut accepted = 0;

    for text in words {
        let length = match length {
            Some(length) => length,
            None => Word::parse(text)?.length(),
        };

        let spinner = ProgressBar::new_spinner().with_message(format!("checking {}...", text.to_uppercase()));
        spinner.enable_steady_tick(Duration::from_millis(80));
        let valid = validator.validate(text, length).await;
        spinner.finish_and_clear();

        print_check_result(text, valid);
        accepted += usize::from(valid);
    }
    Ok(accepted)
}
