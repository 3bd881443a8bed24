//! Persistent player record
//!
//! Field names match the stored JSON (`playerName`, `gamesByLength`, ...),
//! so records saved by earlier versions of the game load unchanged.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use super::table::score_for;
use crate::core::WordLength;

/// Most recent rounds kept in [`PlayerStats::game_history`]
pub const HISTORY_LIMIT: usize = 100;

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Won,
    Lost,
    Timeout,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Won => "won",
            Self::Lost => "lost",
            Self::Timeout => "timeout",
        })
    }
}

/// One finished round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub word_length: WordLength,
    pub result: Outcome,
    /// Milliseconds since the Unix epoch
    pub timestamp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attempts: Option<u32>,
    /// Seconds spent on the round
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<u32>,
}

impl GameRecord {
    /// Record stamped with the current time
    #[must_use]
    pub fn new(word_length: WordLength, result: Outcome) -> Self {
        Self {
            word_length,
            result,
            timestamp: now_millis(),
            word: None,
            attempts: None,
            time_spent: None,
        }
    }

    #[must_use]
    pub fn with_word(mut self, word: impl Into<String>) -> Self {
        self.word = Some(word.into());
        self
    }

    #[must_use]
    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = Some(attempts);
        self
    }

    #[must_use]
    pub fn with_time_spent(mut self, seconds: u32) -> Self {
        self.time_spent = Some(seconds);
        self
    }

    #[must_use]
    pub fn at(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Points this round is worth
    #[must_use]
    pub const fn points(&self) -> u32 {
        score_for(self.word_length, self.result)
    }
}

/// Counters for one word length
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthStats {
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub timeout: u32,
    pub score: u32,
}

impl LengthStats {
    /// Share of played rounds that were won, as a percentage
    #[must_use]
    pub fn win_percentage(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            f64::from(self.won) / f64::from(self.played) * 100.0
        }
    }
}

/// Per-length counters, keyed `"5"`, `"6"`, `"7"` on disk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamesByLength {
    #[serde(rename = "5")]
    pub five: LengthStats,
    #[serde(rename = "6")]
    pub six: LengthStats,
    #[serde(rename = "7")]
    pub seven: LengthStats,
}

impl GamesByLength {
    #[must_use]
    pub const fn get(&self, length: WordLength) -> &LengthStats {
        match length {
            WordLength::Five => &self.five,
            WordLength::Six => &self.six,
            WordLength::Seven => &self.seven,
        }
    }

    pub fn get_mut(&mut self, length: WordLength) -> &mut LengthStats {
        match length {
            WordLength::Five => &mut self.five,
            WordLength::Six => &mut self.six,
            WordLength::Seven => &mut self.seven,
        }
    }

    /// Counters paired with their length, ascending
    pub fn iter(&self) -> impl Iterator<Item = (WordLength, &LengthStats)> {
        WordLength::ALL.into_iter().map(|length| (length, self.get(length)))
    }
}

/// Everything remembered about a player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub player_name: String,
    pub total_games: u32,
    pub total_score: u32,
    pub games_by_length: GamesByLength,
    #[serde(default)]
    pub game_history: Vec<GameRecord>,
    /// Milliseconds since the Unix epoch
    pub last_played: u64,
}

impl PlayerStats {
    /// Fresh record for `name` (trimmed)
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            player_name: name.trim().to_string(),
            total_games: 0,
            total_score: 0,
            games_by_length: GamesByLength::default(),
            game_history: Vec::new(),
            last_played: now_millis(),
        }
    }

    /// Apply a finished round and return the points it earned
    ///
    /// Every call counts; callers guard against recording a round twice.
    pub fn record_outcome(&mut self, record: GameRecord) -> u32 {
        let points = record.points();
        let counters = self.games_by_length.get_mut(record.word_length);

        counters.played = counters.played.saturating_add(1);
        let tally = match record.result {
            Outcome::Won => &mut counters.won,
            Outcome::Lost => &mut counters.lost,
            Outcome::Timeout => &mut counters.timeout,
        };
        *tally = tally.saturating_add(1);
        counters.score = counters.score.saturating_add(points);

        self.total_games = self.total_games.saturating_add(1);
        self.total_score = self.total_score.saturating_add(points);
        self.last_played = record.timestamp.max(self.last_played);
        self.game_history.push(record);

        if self.game_history.len() > HISTORY_LIMIT {
            let excess = self.game_history.len() - HISTORY_LIMIT;
            self.game_history.drain(..excess);
        }
        points
    }

    /// Rounds won across all lengths
    #[must_use]
    pub fn total_won(&self) -> u32 {
        let won = self.sum_counters(|s| s.won);
        u32::try_from(won).unwrap_or(u32::MAX)
    }

    /// Check that totals equal the sums of the per-length counters
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.sum_counters(|s| s.played) == u64::from(self.total_games)
            && self.sum_counters(|s| s.score) == u64::from(self.total_score)
    }

    /// Sum one counter across lengths without overflowing `u32`
    fn sum_counters(&self, counter: impl Fn(&LengthStats) -> u32) -> u64 {
        self.games_by_length
            .iter()
            .map(|(_, s)| u64::from(counter(s)))
            .sum()
    }
}

/// Current time in milliseconds since the Unix epoch
#[must_use]
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}
