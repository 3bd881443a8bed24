//! Target word selection
//!
//! Remote sources are asked concurrently; the first source in configured
//! order that returns a non-empty pool supplies the target. When none does,
//! the target comes from the local curated list.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use rand::prelude::IndexedRandom;
use tokio::task::JoinSet;

use super::{DatamuseSource, WordSource, WordnikSource};
use crate::config::Config;
use crate::core::WordLength;
use crate::error::{GameError, GameResult};
use crate::wordlists::WordListProvider;

/// Chooses the hidden word for a round
#[derive(Clone, Default)]
pub struct TargetPicker {
    sources: Vec<Arc<dyn WordSource>>,
    timeout: Duration,
}

impl TargetPicker {
    /// Picker with no remote sources; always uses the local list
    #[must_use]
    pub fn local() -> Self {
        Self::default()
    }

    /// Picker over `sources`, earlier sources preferred
    #[must_use]
    pub fn new(sources: Vec<Arc<dyn WordSource>>, timeout: Duration) -> Self {
        Self { sources, timeout }
    }

    /// Sources enabled by `config`: Datamuse, then Wordnik when keyed
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let api = &config.api;
        let mut sources: Vec<Arc<dyn WordSource>> = Vec::new();

        if config.enable_api_validation {
            if api.datamuse_enabled {
                sources.push(Arc::new(DatamuseSource::from_config(api)));
            }
            let wordnik = WordnikSource::from_config(api);
            if wordnik.has_key() {
                sources.push(Arc::new(wordnik));
            }
        }

        Self::new(sources, Duration::from_millis(api.timeout_ms))
    }

    /// Number of remote sources consulted
    #[must_use]
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Source names in preference order
    pub fn source_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sources.iter().map(|s| s.name())
    }

    /// Choose a target of `length`
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` when no remote pool is available and
    /// the local list for `length` is empty.
    #[tracing::instrument(skip_all, fields(%length))]
    pub async fn pick<P, R>(&self, words: &P, length: WordLength, rng: &mut R) -> GameResult<String>
    where
        P: WordListProvider + ?Sized,
        R: Rng + ?Sized,
    {
        let pools = self.fetch_pools(length).await;

        if let Some((name, pool)) = pools.into_iter().flatten().find(|(_, pool)| !pool.is_empty())
            && let Some(word) = pool.choose(rng)
        {
            tracing::debug!(source = name, pool = pool.len(), "target from remote pool");
            return Ok(word.clone());
        }

        tracing::debug!("target from local list");
        words
            .words_for_length(length)
            .choose(rng)
            .cloned()
            .ok_or(GameError::EmptyWordList(length))
    }

    /// Query every source and return the pools in source order
    async fn fetch_pools(&self, length: WordLength) -> Vec<Option<(&'static str, Vec<String>)>> {
        let mut tasks = JoinSet::new();
        for (index, source) in self.sources.iter().enumerate() {
            let source = Arc::clone(source);
            let timeout = self.timeout;
            tasks.spawn(async move {
                let name = source.name();
                let result = match tokio::time::timeout(timeout, source.fetch_candidates(length)).await {
                    Ok(Ok(pool)) => Some((name, pool)),
                    Ok(Err(err)) => {
                        tracing::warn!(source = name, error = %err, "word source unavailable");
                        None
                    }
                    Err(_) => {
                        tracing::warn!(source = name, "word source timed out");
                        None
                    }
                };
                (index, result)
            });
        }

        let mut pools = vec![None; self.sources.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, result)) => pools[index] = result,
                Err(err) => tracing::warn!(error = %err, "word source task failed"),
            }
        }
        pools
    }
}

impl std::fmt::Debug for TargetPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<_> = self.source_names().collect();
        f.debug_struct("TargetPicker")
            .field("sources", &names)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::StubSource;
    use super::*;
    use crate::wordlists::WordBank;

    fn picker(sources: Vec<StubSource>) -> TargetPicker {
        let sources = sources
            .into_iter()
            .map(|s| Arc::new(s) as Arc<dyn WordSource>)
            .collect();
        TargetPicker::new(sources, Duration::from_secs(1))
    }

    #[tokio::test]
    async fn first_non_empty_source_wins() {
        let picker = picker(vec![
            StubSource(None),
            StubSource(Some(vec!["ice-cream", "ab"])),
            StubSource(Some(vec!["plumb"])),
            StubSource(Some(vec!["crane"])),
        ]);
        let bank = WordBank::embedded();
        let word = picker.pick(&bank, WordLength::Five, &mut rand::rng()).await.unwrap();
        assert_eq!(word, "PLUMB");
    }

    #[tokio::test]
    async fn falls_back_to_local_list() {
        let picker = picker(vec![StubSource(None), StubSource(Some(vec![]))]);
        let bank = WordBank::from_lists(vec!["CRANE".into()], vec!["PLANET".into()], vec!["ARCADES".into()]);
        let word = picker.pick(&bank, WordLength::Six, &mut rand::rng()).await.unwrap();
        assert_eq!(word, "PLANET");
    }

    #[tokio::test]
    async fn empty_local_list_is_an_error() {
        let bank = WordBank::from_lists(vec!["CRANE".into()], Vec::new(), Vec::new());
        let result = TargetPicker::local()
            .pick(&bank, WordLength::Seven, &mut rand::rng())
            .await;
        assert_eq!(result, Err(GameError::EmptyWordList(WordLength::Seven)));
    }

    #[test]
    fn offline_config_has_no_sources() {
        let config = Config {
            enable_api_validation: false,
            ..Config::default()
        };
        assert_eq!(TargetPicker::from_config(&config).source_count(), 0);

        // No wordnik key by default, datamuse only
        assert_eq!(TargetPicker::from_config(&Config::default()).source_count(), 1);
    }

    #[test]
    fn datamuse_is_preferred_over_wordnik() {
        let mut config = Config::default();
        config.api.wordnik_api_key = Some("secret".to_string());

        let picker = TargetPicker::from_config(&config);
        let names: Vec<_> = picker.source_names().collect();
        assert_eq!(names, ["datamuse", "wordnik"]);
    }
}
