//! Logging setup
//!
//! Logs go to stderr so they never interleave with the board on stdout.
//! `RUST_LOG` wins over the configured level; otherwise `-v`/`-q` shift it.

use tracing_subscriber::EnvFilter;

use crate::config::LogLevel;

/// Filter directive for the configured level adjusted by CLI flags
#[must_use]
pub fn level_directive(configured: LogLevel, verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return LogLevel::Error.as_str();
    }
    match verbose {
        0 => configured.as_str(),
        1 => LogLevel::Debug.as_str(),
        _ => LogLevel::Trace.as_str(),
    }
}

/// Build the filter, preferring `RUST_LOG` when it is set and valid
#[must_use]
pub fn env_filter(configured: LogLevel, verbose: u8, quiet: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(configured, verbose, quiet)))
}

/// Install the global fmt subscriber
///
/// Calling it a second time leaves the first subscriber in place.
pub fn init(configured: LogLevel, verbose: u8, quiet: bool) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter(configured, verbose, quiet))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
