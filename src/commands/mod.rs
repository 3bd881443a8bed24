//! Command implementations

pub mod check;
pub mod play;
pub mod stats;

pub use check::run_check;
pub use play::run_play;
pub use stats::{run_export, run_import, run_reset, run_stats};

use crate::config::Config;
use crate::error::StoreResult;
use crate::storage::{FileStore, Scorecard};
use crate::validation::WordValidator;
use crate::wordlists::WordBank;

/// State shared by every command of one invocation
#[derive(Debug, Clone)]
pub struct Session {
    pub config: Config,
    pub words: WordBank,
}

impl Session {
    /// Load word lists, applying any overrides from `config.word_list_dir`
    #[must_use]
    pub fn new(config: Config) -> Self {
        let mut words = WordBank::embedded();
        if let Some(dir) = &config.word_list_dir {
            match words.clone().with_overrides_from(dir) {
                Ok(loaded) => words = loaded,
                Err(err) => tracing::warn!(
                    dir = %dir.display(),
                    error = %err,
                    "could not read word list overrides, using embedded lists"
                ),
            }
        }
        Self { config, words }
    }

    /// Validator over the session's words and configured lookups
    #[must_use]
    pub fn validator(&self) -> WordValidator {
        WordValidator::from_config(self.words.clone(), &self.config)
    }

    /// Scorecard in the configured data directory
    ///
    /// # Errors
    /// Returns `StoreError::NoDataDir` when no data directory can be found.
    pub fn scorecard(&self) -> StoreResult<Scorecard<FileStore>> {
        FileStore::open(self.config.data_dir.as_deref()).map(Scorecard::new)
    }
}
