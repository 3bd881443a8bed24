//! Error types for the word game core.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::WordLength;

/// Reasons a typed guess is rejected before it reaches the board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// The word does not have the round's length.
    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidLength {
        /// Length required by the round.
        expected: usize,
        /// Length of the submitted text.
        actual: usize,
    },

    /// The word contains something other than ASCII letters.
    #[error("word must contain only letters A-Z")]
    InvalidCharacters,

    /// The length is not one of the playable lengths.
    #[error("unsupported word length {0}; use 5, 6 or 7")]
    UnsupportedLength(usize),
}

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// An explicitly requested configuration file does not exist.
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised by a [`StatsStore`](crate::storage::StatsStore).
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("store I/O failed for {}: {source}", path.display())]
    Io {
        /// File the store was touching.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// No data directory could be determined for the current platform.
    #[error("no data directory available on this platform")]
    NoDataDir,

    /// The stats record could not be serialized.
    #[error("failed to encode player stats: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type alias using [`StoreError`].
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures of a single remote collaborator call.
///
/// These never escape the validator; they are folded into
/// [`LookupVerdict::Unavailable`](crate::remote::LookupVerdict::Unavailable).
#[derive(Error, Debug)]
pub enum RemoteError {
    /// The HTTP request failed or returned an unreadable body.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with an unexpected status.
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    /// The call did not complete within the configured timeout.
    #[error("timed out after {0} ms")]
    Timeout(u64),

    /// The source is not usable with the current configuration.
    #[error("source disabled: {0}")]
    Disabled(&'static str),
}

/// Result type alias using [`RemoteError`].
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Game-level errors.
///
/// `EmptyWordList` signals a data-loading bug and is never absorbed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A word length has no backing word list.
    #[error("no words available for length {0}")]
    EmptyWordList(WordLength),

    /// A guess was submitted after the round ended.
    #[error("the round is already over")]
    RoundOver,

    /// A guess was submitted while the round clock is paused.
    #[error("the round is paused")]
    Paused,

    /// The guess failed shape checks.
    #[error(transparent)]
    InvalidWord(#[from] WordError),

    /// The guess is well-formed but not an accepted word.
    #[error("{0} is not a valid word")]
    NotAWord(String),
}

/// Result type alias using [`GameError`].
pub type GameResult<T> = Result<T, GameError>;
