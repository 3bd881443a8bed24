//! Formatting utilities for terminal output

use colored::{ColoredString, Colorize};

use crate::core::{Feedback, Verdict, Word};

/// Keyboard rows shown under the board
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// One letter as a colored tile
#[must_use]
pub fn tile(letter: char, verdict: Option<Verdict>) -> ColoredString {
    let text = format!(" {letter} ");
    match verdict {
        Some(Verdict::Correct) => text.black().on_green().bold(),
        Some(Verdict::Present) => text.black().on_yellow().bold(),
        Some(Verdict::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// A played guess as a row of tiles
#[must_use]
pub fn guess_row(word: &Word, feedback: &Feedback) -> String {
    word.chars()
        .iter()
        .zip(feedback.verdicts())
        .map(|(&b, &v)| tile(char::from(b), Some(v)).to_string())
        .collect()
}

/// Seconds as `m:ss`
#[must_use]
pub fn clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "\u{2591}".repeat(width);
    }
    // Clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "\u{2588}".repeat(filled), "\u{2591}".repeat(width - filled))
}

/// Parse `#RRGGBB` into its components
#[must_use]
pub fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_pads_seconds() {
        assert_eq!(clock(0), "0:00");
        assert_eq!(clock(65), "1:05");
        assert_eq!(clock(300), "5:00");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "\u{2591}".repeat(10));
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "\u{2588}".repeat(10));
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, format!("{}{}", "\u{2588}".repeat(5), "\u{2591}".repeat(5)));
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "\u{2591}".repeat(4));
    }

    #[test]
    fn hex_colors() {
        assert_eq!(hex_rgb("#FF4500"), Some((255, 69, 0)));
        assert_eq!(hex_rgb("#8b4513"), Some((139, 69, 19)));
        assert_eq!(hex_rgb("FF4500"), None);
        assert_eq!(hex_rgb("#FFF"), None);
    }
}
