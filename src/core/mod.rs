//! Core domain types for the word game
//!
//! Words, lengths and per-letter feedback. Everything here is pure and has no
//! I/O.

mod pattern;
mod word;

pub use pattern::{Feedback, Verdict, letter_status, score};
pub use word::{Word, WordLength};
