//! Terminal output formatting
//!
//! Display utilities for the board, keyboard and scorecard.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_check_result, print_hint, print_keyboard, print_round_result,
    print_scorecard, print_status_line,
};
