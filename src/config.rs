//! Configuration loading
//!
//! Settings are merged with figment, lowest precedence first:
//! 1. Built-in defaults
//! 2. User config: `<config dir>/wordle-arcade/config.{toml,json}`
//! 3. Project config in the search directory: `appsettings.json`,
//!    `wordle-arcade.toml`, `wordle-arcade.json`
//! 4. Files added with [`ConfigLoader::with_file`]
//! 5. Environment variables prefixed `WORDLE_ARCADE_` (`__` separates nested
//!    keys, e.g. `WORDLE_ARCADE_API__TIMEOUT_MS=1500`)
//!
//! A missing or unreadable configuration is never fatal for the game:
//! [`ConfigLoader::load_or_default`] logs the problem and keeps the defaults.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::core::WordLength;
use crate::error::{ConfigError, ConfigResult};

const APP_NAME: &str = "wordle-arcade";

/// Project config file names, low to high precedence
const PROJECT_FILES: &[&str] = &["appsettings.json", "wordle-arcade.toml", "wordle-arcade.json"];

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Guesses allowed per round, by word length
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct GuessLimits {
    #[serde(rename = "5")]
    pub five: usize,
    #[serde(rename = "6")]
    pub six: usize,
    #[serde(rename = "7")]
    pub seven: usize,
}

impl GuessLimits {
    /// Limit for one length; never below one guess
    #[must_use]
    pub fn for_length(&self, length: WordLength) -> usize {
        let limit = match length {
            WordLength::Five => self.five,
            WordLength::Six => self.six,
            WordLength::Seven => self.seven,
        };
        limit.max(1)
    }
}

impl Default for GuessLimits {
    fn default() -> Self {
        Self {
            five: WordLength::Five.default_max_guesses(),
            six: WordLength::Six.default_max_guesses(),
            seven: WordLength::Seven.default_max_guesses(),
        }
    }
}

/// Remote word service settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    /// Spelling lookup and random-word pool
    pub datamuse_url: String,
    pub datamuse_enabled: bool,
    /// Dictionary definitions
    pub dictionary_url: String,
    pub dictionary_enabled: bool,
    /// Random-word source; skipped unless an API key is set
    pub wordnik_url: String,
    pub wordnik_api_key: Option<String>,
    /// Per-request timeout
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            datamuse_url: "https://api.datamuse.com".to_string(),
            datamuse_enabled: true,
            dictionary_url: "https://api.dictionaryapi.dev/api/v2/entries/en".to_string(),
            dictionary_enabled: true,
            wordnik_url: "https://api.wordnik.com/v4".to_string(),
            wordnik_api_key: None,
            timeout_ms: 3000,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Length used when none is requested
    pub default_word_length: WordLength,
    /// Confirm unknown words with the remote services
    pub enable_api_validation: bool,
    /// Memoize validation verdicts for the process lifetime
    pub cache_validation_results: bool,
    pub max_guesses_by_length: GuessLimits,
    /// Round countdown; 0 disables the timer
    pub round_seconds: u32,
    /// Elapsed seconds between hint unlocks; 0 disables hints
    pub hint_interval_seconds: u32,
    pub log_level: LogLevel,
    /// Where the scorecard is stored (platform data dir if unset)
    pub data_dir: Option<PathBuf>,
    /// Directory with `words-{5,6,7}.txt` replacing the embedded lists
    pub word_list_dir: Option<PathBuf>,
    pub api: ApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_word_length: WordLength::Five,
            enable_api_validation: true,
            cache_validation_results: true,
            max_guesses_by_length: GuessLimits::default(),
            round_seconds: 300,
            hint_interval_seconds: 60,
            log_level: LogLevel::Info,
            data_dir: None,
            word_list_dir: None,
            api: ApiConfig::default(),
        }
    }
}

/// Builder for discovering and merging configuration sources
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    search_dir: Option<PathBuf>,
    include_user_config: bool,
    explicit_files: Vec<PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            search_dir: None,
            include_user_config: true,
            explicit_files: Vec::new(),
        }
    }

    /// Look for project config files in `dir`.
    #[must_use]
    pub fn with_search_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.search_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Set whether to include the user config file.
    #[must_use]
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Add an explicit config file; it must exist.
    #[must_use]
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    ///
    /// # Errors
    /// Returns `ConfigError::NotFound` for a missing explicit file and
    /// `ConfigError::Deserialize` for malformed values.
    #[tracing::instrument(skip(self), fields(search_dir = ?self.search_dir))]
    pub fn load(self) -> ConfigResult<Config> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if self.include_user_config
            && let Some(user_file) = find_user_config()
        {
            figment = merge_file(figment, &user_file);
        }

        if let Some(ref dir) = self.search_dir {
            for name in PROJECT_FILES {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    figment = merge_file(figment, &candidate);
                }
            }
        }

        for file in &self.explicit_files {
            if !file.is_file() {
                return Err(ConfigError::NotFound(file.clone()));
            }
            figment = merge_file(figment, file);
        }

        figment = figment.merge(Env::prefixed("WORDLE_ARCADE_").split("__"));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::debug!(
            default_length = %config.default_word_length,
            api = config.enable_api_validation,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration, falling back to built-in defaults on any error.
    #[must_use]
    pub fn load_or_default(self) -> Config {
        let (config, error) = self.load_or_fallback();
        if let Some(err) = error {
            warn_fallback(&err);
        }
        config
    }

    /// Like [`load_or_default`](Self::load_or_default), but hands the error
    /// back instead of logging it.
    ///
    /// Used before logging is installed; pass the error to [`warn_fallback`]
    /// once it is.
    #[must_use]
    pub fn load_or_fallback(self) -> (Config, Option<ConfigError>) {
        match self.load() {
            Ok(config) => (config, None),
            Err(err) => (Config::default(), Some(err)),
        }
    }
}

/// Report that configuration fell back to the defaults
pub fn warn_fallback(err: &ConfigError) {
    tracing::warn!(error = %err, "could not load configuration, using defaults");
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn merge_file(figment: Figment, path: &Path) -> Figment {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => figment.merge(Json::file_exact(path)),
        _ => figment.merge(Toml::file_exact(path)),
    }
}

/// Get the project directories for platform path resolution.
pub(crate) fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

fn find_user_config() -> Option<PathBuf> {
    let dirs = project_dirs()?;
    ["config.toml", "config.json"]
        .iter()
        .map(|name| dirs.config_dir().join(name))
        .find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn loader() -> ConfigLoader {
        ConfigLoader::new().with_user_config(false)
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.default_word_length, WordLength::Five);
        assert!(config.enable_api_validation);
        assert!(config.cache_validation_results);
        assert_eq!(config.max_guesses_by_length.for_length(WordLength::Seven), 7);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn loader_builds_with_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = loader().with_search_dir(tmp.path()).load().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn toml_file_overrides_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("wordle-arcade.toml");
        fs::write(
            &path,
            r#"default_word_length = 7
enable_api_validation = false
log_level = "debug"

[max_guesses_by_length]
"6" = 8

[api]
timeout_ms = 500
"#,
        )
        .unwrap();

        let config = loader().with_search_dir(tmp.path()).load().unwrap();
        assert_eq!(config.default_word_length, WordLength::Seven);
        assert!(!config.enable_api_validation);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.max_guesses_by_length.six, 8);
        assert_eq!(config.max_guesses_by_length.five, 6);
        assert_eq!(config.api.timeout_ms, 500);
        assert_eq!(config.api.datamuse_url, ApiConfig::default().datamuse_url);
    }

    #[test]
    fn appsettings_json_is_recognized() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("appsettings.json"),
            r#"{"cache_validation_results": false, "default_word_length": 6}"#,
        )
        .unwrap();

        let config = loader().with_search_dir(tmp.path()).load().unwrap();
        assert!(!config.cache_validation_results);
        assert_eq!(config.default_word_length, WordLength::Six);
    }

    #[test]
    fn explicit_file_wins_over_project_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("wordle-arcade.toml"), "round_seconds = 90\n").unwrap();
        let explicit = tmp.path().join("override.toml");
        fs::write(&explicit, "round_seconds = 45\n").unwrap();

        let config = loader()
            .with_search_dir(tmp.path())
            .with_file(&explicit)
            .load()
            .unwrap();
        assert_eq!(config.round_seconds, 45);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let result = loader().with_file(tmp.path().join("nope.toml")).load();
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("wordle-arcade.toml"), "default_word_length = 9\n").unwrap();

        assert!(loader().with_search_dir(tmp.path()).load().is_err());
        let config = loader().with_search_dir(tmp.path()).load_or_default();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn fallback_returns_the_load_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("wordle-arcade.toml"), "default_word_length = 9\n").unwrap();

        let (config, error) = loader().with_search_dir(tmp.path()).load_or_fallback();
        assert_eq!(config, Config::default());
        assert!(matches!(error, Some(ConfigError::Deserialize(_))));

        let (_, error) = loader().with_search_dir(tmp.path().join("absent")).load_or_fallback();
        assert!(error.is_none());
    }

    #[test]
    fn guess_limits_never_zero() {
        let limits = GuessLimits {
            five: 0,
            six: 6,
            seven: 7,
        };
        assert_eq!(limits.for_length(WordLength::Five), 1);
    }
}
