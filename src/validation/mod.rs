//! Guess validation
//!
//! - [`is_nonsense`]: pure heuristic pre-filter
//! - [`ValidationCache`]: per-process memo of verdicts
//! - [`WordValidator`]: the full layered check

mod cache;
mod nonsense;
mod validator;

pub use cache::ValidationCache;
pub use nonsense::is_nonsense;
pub use validator::WordValidator;
