//! Wordle Arcade
//!
//! Core of a Wordle-style game with 5, 6 and 7 letter words: per-letter guess
//! feedback, layered word validation with best-effort remote lookups, a round
//! state machine with countdown and hints, and a persisted scorecard.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_arcade::core::{Feedback, Word, WordLength};
//! use wordle_arcade::validation::{WordValidator, is_nonsense};
//! use wordle_arcade::wordlists::WordBank;
//!
//! let guess = Word::new("slate", WordLength::Five).unwrap();
//! let target = Word::new("crane", WordLength::Five).unwrap();
//! assert_eq!(Feedback::calculate(&guess, &target).count_correct(), 2);
//!
//! assert!(is_nonsense("QWERT"));
//!
//! let validator = WordValidator::new(WordBank::embedded());
//! assert!(validator.validate_local("hello", WordLength::Five));
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Guess validation
pub mod validation;

// Remote word services
pub mod remote;

// Rounds, clock and hints
pub mod game;

// Points, stats and titles
pub mod scoring;

// Scorecard persistence
pub mod storage;

pub mod config;
pub mod error;
pub mod observability;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
