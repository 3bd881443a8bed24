//! Remote word services
//!
//! Two seams talk to the network:
//! - [`WordLookup`]: confirm that a spelling is a real word
//! - [`WordSource`]: supply a pool of candidate target words
//!
//! Calls are best-effort. [`settle`] bounds a lookup with a timeout and folds
//! every failure into [`LookupVerdict::Unavailable`], so callers only ever see
//! a verdict.

mod datamuse;
mod dictionary;
mod picker;
mod wordnik;

pub use datamuse::{DatamuseLookup, DatamuseSource};
pub use dictionary::DictionaryLookup;
pub use picker::TargetPicker;
pub use wordnik::WordnikSource;

use std::time::Duration;

use async_trait::async_trait;

use crate::core::WordLength;
use crate::error::{RemoteError, RemoteResult};

/// Outcome of one remote confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupVerdict {
    /// The service knows the word
    Valid,
    /// The service answered and does not know the word
    Invalid,
    /// The service could not answer
    Unavailable,
}

impl LookupVerdict {
    /// Combine settled verdicts: any `Valid` wins, then any `Invalid`
    ///
    /// Returns `None` when no service produced a decisive answer.
    #[must_use]
    pub fn reduce(verdicts: &[Self]) -> Option<bool> {
        if verdicts.contains(&Self::Valid) {
            Some(true)
        } else if verdicts.contains(&Self::Invalid) {
            Some(false)
        } else {
            None
        }
    }
}

/// A service that can confirm a word exists
#[async_trait]
pub trait WordLookup: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Ask whether `word` (uppercase) is a real word of `length`
    ///
    /// # Errors
    /// Returns a `RemoteError` when the service cannot give an answer.
    async fn lookup(&self, word: &str, length: WordLength) -> RemoteResult<bool>;
}

/// A service that can supply candidate target words
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Fetch candidate words of `length`, already passed through [`filter_candidates`]
    ///
    /// # Errors
    /// Returns a `RemoteError` when the service cannot be reached or is not configured.
    async fn fetch_candidates(&self, length: WordLength) -> RemoteResult<Vec<String>>;
}

/// Run one lookup to completion, bounded by `timeout`
///
/// Errors and timeouts become `Unavailable` and are logged; they never escape.
pub async fn settle(
    lookup: &dyn WordLookup,
    word: &str,
    length: WordLength,
    timeout: Duration,
) -> LookupVerdict {
    let result = tokio::time::timeout(timeout, lookup.lookup(word, length))
        .await
        .unwrap_or_else(|_| Err(RemoteError::Timeout(timeout.as_millis() as u64)));

    match result {
        Ok(true) => LookupVerdict::Valid,
        Ok(false) => LookupVerdict::Invalid,
        Err(err) => {
            tracing::warn!(service = lookup.name(), %word, error = %err, "word lookup unavailable");
            LookupVerdict::Unavailable
        }
    }
}

/// Keep only uppercase, exact-length, letters-only candidates
///
/// Entries with hyphens, apostrophes or spaces are dropped along with anything
/// else that is not A-Z.
#[must_use]
pub fn filter_candidates<I, S>(raw: I, length: WordLength) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .map(|word| word.as_ref().trim().to_uppercase())
        .filter(|word| word.len() == length.letters() && word.bytes().all(|b| b.is_ascii_uppercase()))
        .collect()
}

/// HTTP client shared by the remote services
pub(crate) fn http_client(timeout: Duration) -> reqwest::Client {
    let builder = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("wordle_arcade/", env!("CARGO_PKG_VERSION")));
    // Test servers listen on loopback; ignore proxy variables there
    #[cfg(test)]
    let builder = builder.no_proxy();

    builder
        .build()
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to default HTTP client");
            reqwest::Client::new()
        })
}


#[cfg(test)]
mod tests {
    use super::testing::StubLookup;
    use super::*;

    #[test]
    fn reduce_any_valid_wins() {
        use LookupVerdict::{Invalid, Unavailable, Valid};
        assert_eq!(LookupVerdict::reduce(&[Invalid, Valid]), Some(true));
        assert_eq!(LookupVerdict::reduce(&[Unavailable, Valid]), Some(true));
        assert_eq!(LookupVerdict::reduce(&[Invalid, Unavailable]), Some(false));
        assert_eq!(LookupVerdict::reduce(&[Unavailable, Unavailable]), None);
        assert_eq!(LookupVerdict::reduce(&[]), None);
    }

    #[test]
    fn filter_candidates_keeps_clean_words() {
        let raw = ["crane", "ice-cream", "don't", "new york", "SLATE", "caf\u{e9}s", "abc", "toolong"];
        assert_eq!(filter_candidates(raw, WordLength::Five), vec!["CRANE", "SLATE"]);
    }

    #[tokio::test]
    async fn settle_maps_answers() {
        let timeout = Duration::from_secs(1);
        let valid = StubLookup::new(Some(true));
        let invalid = StubLookup::new(Some(false));
        let broken = StubLookup::new(None);

        assert_eq!(settle(&valid, "CRANE", WordLength::Five, timeout).await, LookupVerdict::Valid);
        assert_eq!(settle(&invalid, "CRANE", WordLength::Five, timeout).await, LookupVerdict::Invalid);
        assert_eq!(
            settle(&broken, "CRANE", WordLength::Five, timeout).await,
            LookupVerdict::Unavailable
        );
    }

    #[tokio::test]
    async fn settle_times_out() {
        let slow = StubLookup::new(Some(true)).delayed(Duration::from_millis(200));
        let verdict = settle(&slow, "CRANE", WordLength::Five, Duration::from_millis(10)).await;
        assert_eq!(verdict, LookupVerdict::Unavailable);
    }
}
