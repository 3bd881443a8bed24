//! Layered word validation
//!
//! A guess is accepted when it has the right shape, passes the nonsense
//! filter, and is either on the curated list or confirmed by a remote lookup.
//! Remote trouble never surfaces as an error: the answer degrades to the
//! local list.

use std::time::Duration;

use super::cache::ValidationCache;
use super::nonsense::is_nonsense;
use crate::config::Config;
use crate::core::WordLength;
use crate::remote::{DatamuseLookup, DictionaryLookup, LookupVerdict, WordLookup, settle};
use crate::wordlists::{WordBank, WordListProvider};

/// Validator over a word list and up to two remote lookups
pub struct WordValidator<P = WordBank> {
    words: P,
    cache: ValidationCache,
    spelling: Option<Box<dyn WordLookup>>,
    dictionary: Option<Box<dyn WordLookup>>,
    remote_enabled: bool,
    cache_enabled: bool,
    timeout: Duration,
}

impl<P: WordListProvider> WordValidator<P> {
    /// Local-only validator with caching on
    #[must_use]
    pub fn new(words: P) -> Self {
        Self {
            words,
            cache: ValidationCache::new(),
            spelling: None,
            dictionary: None,
            remote_enabled: false,
            cache_enabled: true,
            timeout: Duration::from_secs(3),
        }
    }

    /// Validator wired to the services enabled in `config`
    #[must_use]
    pub fn from_config(words: P, config: &Config) -> Self {
        let api = &config.api;
        let mut validator = Self::new(words)
            .with_caching(config.cache_validation_results)
            .with_timeout(Duration::from_millis(api.timeout_ms));

        if config.enable_api_validation {
            if api.datamuse_enabled {
                validator = validator.with_spelling_lookup(Box::new(DatamuseLookup::from_config(api)));
            }
            if api.dictionary_enabled {
                validator = validator.with_dictionary_lookup(Box::new(DictionaryLookup::from_config(api)));
            }
        }
        validator
    }

    /// Set the spelling lookup and turn remote confirmation on
    #[must_use]
    pub fn with_spelling_lookup(mut self, lookup: Box<dyn WordLookup>) -> Self {
        self.spelling = Some(lookup);
        self.remote_enabled = true;
        self
    }

    /// Set the dictionary lookup and turn remote confirmation on
    #[must_use]
    pub fn with_dictionary_lookup(mut self, lookup: Box<dyn WordLookup>) -> Self {
        self.dictionary = Some(lookup);
        self.remote_enabled = true;
        self
    }

    #[must_use]
    pub const fn with_caching(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Turn remote confirmation off without dropping the lookups
    pub fn set_remote_enabled(&mut self, enabled: bool) {
        self.remote_enabled = enabled && (self.spelling.is_some() || self.dictionary.is_some());
    }

    #[must_use]
    pub const fn remote_enabled(&self) -> bool {
        self.remote_enabled
    }

    /// The word list this validator consults
    #[must_use]
    pub const fn words(&self) -> &P {
        &self.words
    }

    /// Decide whether `word` is an acceptable guess of `length`
    ///
    /// Never fails. When no remote lookup gives a decisive answer the verdict
    /// is the local-list result and is not cached.
    #[tracing::instrument(skip(self))]
    pub async fn validate(&mut self, word: &str, length: WordLength) -> bool {
        let Some(word) = screen(word, length) else {
            return false;
        };

        if let Some(valid) = self.cached(&word, length) {
            tracing::debug!(%word, valid, "validation cache hit");
            return valid;
        }

        if self.words.contains(&word, length) {
            return self.remember(&word, length, true);
        }

        match self.confirm_remotely(&word, length).await {
            Some(valid) => self.remember(&word, length, valid),
            None => {
                if self.remote_enabled {
                    tracing::warn!(%word, "no lookup answered, using local list only");
                }
                self.words.contains(&word, length)
            }
        }
    }

    /// Synchronous check against the cache and the local list only
    #[must_use]
    pub fn validate_local(&self, word: &str, length: WordLength) -> bool {
        let Some(word) = screen(word, length) else {
            return false;
        };
        self.cached(&word, length)
            .unwrap_or_else(|| self.words.contains(&word, length))
    }

    /// Forget every cached verdict
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    fn cached(&self, word: &str, length: WordLength) -> Option<bool> {
        if self.cache_enabled {
            self.cache.get(word, length)
        } else {
            None
        }
    }

    fn remember(&mut self, word: &str, length: WordLength, valid: bool) -> bool {
        if self.cache_enabled {
            self.cache.insert(word, length, valid)
        } else {
            valid
        }
    }

    /// Ask both lookups and wait for both to settle
    async fn confirm_remotely(&self, word: &str, length: WordLength) -> Option<bool> {
        if !self.remote_enabled {
            return None;
        }

        let (spelling, dictionary) = tokio::join!(
            settle_optional(self.spelling.as_deref(), word, length, self.timeout),
            settle_optional(self.dictionary.as_deref(), word, length, self.timeout),
        );
        tracing::debug!(%word, ?spelling, ?dictionary, "remote lookups settled");

        LookupVerdict::reduce(&[spelling, dictionary])
    }
}

impl<P> std::fmt::Debug for WordValidator<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordValidator")
            .field("spelling", &self.spelling.as_ref().map(|l| l.name()))
            .field("dictionary", &self.dictionary.as_ref().map(|l| l.name()))
            .field("remote_enabled", &self.remote_enabled)
            .field("cache_enabled", &self.cache_enabled)
            .field("cached", &self.cache.len())
            .finish_non_exhaustive()
    }
}

async fn settle_optional(
    lookup: Option<&dyn WordLookup>,
    word: &str,
    length: WordLength,
    timeout: Duration,
) -> LookupVerdict {
    match lookup {
        Some(lookup) => settle(lookup, word, length, timeout).await,
        None => LookupVerdict::Unavailable,
    }
}

/// Uppercase `word` and apply the shape and nonsense checks
fn screen(word: &str, length: WordLength) -> Option<String> {
    let word = word.trim().to_uppercase();
    let shaped = word.len() == length.letters() && word.bytes().all(|b| b.is_ascii_uppercase());
    (shaped && !is_nonsense(&word)).then_some(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::testing::StubLookup;
    use std::sync::atomic::Ordering;

    fn with_stubs(spelling: StubLookup, dictionary: StubLookup) -> WordValidator {
        WordValidator::new(WordBank::embedded())
            .with_spelling_lookup(Box::new(spelling))
            .with_dictionary_lookup(Box::new(dictionary))
            .with_timeout(Duration::from_millis(50))
    }

    #[tokio::test]
    async fn local_word_skips_remote() {
        let spelling = StubLookup::new(Some(false));
        let dictionary = StubLookup::new(Some(false));
        let (a, b) = (spelling.calls(), dictionary.calls());
        let mut validator = with_stubs(spelling, dictionary);

        assert!(validator.validate("HELLO", WordLength::Five).await);
        assert!(validator.validate("hello", WordLength::Five).await);
        assert_eq!(a.load(Ordering::SeqCst), 0);
        assert_eq!(b.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn nonsense_rejected_before_lookup() {
        let spelling = StubLookup::new(Some(true));
        let calls = spelling.calls();
        let mut validator = with_stubs(spelling, StubLookup::new(Some(true)));

        assert!(!validator.validate("ZZZZZ", WordLength::Five).await);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(validator.cache_len(), 0);
    }

    #[tokio::test]
    async fn shape_checks() {
        let mut validator = WordValidator::new(WordBank::embedded());
        assert!(!validator.validate("HELLO", WordLength::Six).await);
        assert!(!validator.validate("HEL1O", WordLength::Five).await);
        assert!(!validator.validate("", WordLength::Five).await);
    }

    #[tokio::test]
    async fn one_confirmation_is_enough() {
        let mut validator = with_stubs(StubLookup::new(Some(false)), StubLookup::new(Some(true)));
        assert!(validator.validate("GLORP", WordLength::Five).await);
    }

    #[tokio::test]
    async fn unavailable_does_not_preempt_valid() {
        let slow_valid = StubLookup::new(Some(true)).delayed(Duration::from_millis(10));
        let mut validator = with_stubs(StubLookup::new(None), slow_valid);
        assert!(validator.validate("GLORP", WordLength::Five).await);
    }

    #[tokio::test]
    async fn both_invalid_is_cached_false() {
        let mut validator = with_stubs(StubLookup::new(Some(false)), StubLookup::new(Some(false)));
        assert!(!validator.validate("GLORP", WordLength::Five).await);
        assert_eq!(validator.cache_len(), 1);
        assert!(!validator.validate_local("GLORP", WordLength::Five));
    }

    #[tokio::test]
    async fn remote_verdict_is_cached() {
        let spelling = StubLookup::new(Some(true));
        let dictionary = StubLookup::new(Some(true));
        let (a, b) = (spelling.calls(), dictionary.calls());
        let mut validator = with_stubs(spelling, dictionary);

        assert!(validator.validate("GLORP", WordLength::Five).await);
        assert!(validator.validate("GLORP", WordLength::Five).await);
        assert_eq!(a.load(Ordering::SeqCst), 1);
        assert_eq!(b.load(Ordering::SeqCst), 1);

        // The cached verdict is visible to the local path
        assert!(validator.validate_local("GLORP", WordLength::Five));

        validator.clear_cache();
        assert!(!validator.validate_local("GLORP", WordLength::Five));
    }

    #[tokio::test]
    async fn all_unavailable_falls_back_uncached() {
        let spelling = StubLookup::new(None);
        let calls = spelling.calls();
        let slow = StubLookup::new(Some(true)).delayed(Duration::from_millis(500));
        let mut validator = with_stubs(spelling, slow);

        assert!(!validator.validate("GLORP", WordLength::Five).await);
        assert_eq!(validator.cache_len(), 0);

        assert!(!validator.validate("GLORP", WordLength::Five).await);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn caching_can_be_disabled() {
        let spelling = StubLookup::new(Some(true));
        let calls = spelling.calls();
        let mut validator = with_stubs(spelling, StubLookup::new(Some(false))).with_caching(false);

        assert!(validator.validate("GLORP", WordLength::Five).await);
        assert!(validator.validate("GLORP", WordLength::Five).await);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(validator.cache_len(), 0);
    }

    #[tokio::test]
    async fn remote_disabled_uses_local_list() {
        let spelling = StubLookup::new(Some(true));
        let calls = spelling.calls();
        let mut validator = with_stubs(spelling, StubLookup::new(Some(true)));
        validator.set_remote_enabled(false);

        assert!(!validator.validate("GLORP", WordLength::Five).await);
        assert!(validator.validate("CRANE", WordLength::Five).await);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn offline_config_has_no_remote() {
        let config = Config {
            enable_api_validation: false,
            ..Config::default()
        };
        let validator = WordValidator::from_config(WordBank::embedded(), &config);
        assert!(!validator.remote_enabled());
        assert!(validator.validate_local("CRANE", WordLength::Five));
        assert!(!validator.validate_local("QWERT", WordLength::Five));
    }
}
