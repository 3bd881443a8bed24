//! Derived statistics for display

use serde::Serialize;

use super::stats::{GameRecord, GamesByLength, Outcome, PlayerStats};
use super::titles::{Title, title_for};
use crate::core::WordLength;

/// Length with the best win ratio and that ratio, rounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BestCategory {
    pub length: WordLength,
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedStats {
    /// Percentage of all rounds won
    pub win_rate: f64,
    pub average_score: f64,
    /// Most played length
    pub favorite_length: WordLength,
    pub current_streak: u32,
    pub best_category: BestCategory,
    pub times_played: u32,
    pub last_played: u64,
}

/// Count consecutive wins at the end of `history`
#[must_use]
pub fn win_streak(history: &[GameRecord]) -> u32 {
    let streak = history
        .iter()
        .rev()
        .take_while(|record| record.result == Outcome::Won)
        .count();
    u32::try_from(streak).unwrap_or(u32::MAX)
}

#[must_use]
pub fn detailed_stats(stats: &PlayerStats) -> DetailedStats {
    let (win_rate, average_score) = if stats.total_games == 0 {
        (0.0, 0.0)
    } else {
        let games = f64::from(stats.total_games);
        (
            f64::from(stats.total_won()) / games * 100.0,
            f64::from(stats.total_score) / games,
        )
    };

    DetailedStats {
        win_rate,
        average_score,
        favorite_length: favorite_length(&stats.games_by_length),
        current_streak: win_streak(&stats.game_history),
        best_category: best_category(&stats.games_by_length),
        times_played: stats.total_games,
        last_played: stats.last_played,
    }
}

/// Most played length; ties keep the shorter length, 5 when nothing is played
fn favorite_length(games: &GamesByLength) -> WordLength {
    let mut favorite = (WordLength::Five, 0);
    for (length, counters) in games.iter() {
        if counters.played > favorite.1 {
            favorite = (length, counters.played);
        }
    }
    favorite.0
}

/// Played length with the strictly highest win ratio; ties keep the shorter
fn best_category(games: &GamesByLength) -> BestCategory {
    let mut best = (WordLength::Five, 0.0_f64);
    for (length, counters) in games.iter().filter(|(_, c)| c.played > 0) {
        let percentage = counters.win_percentage();
        if percentage > best.1 {
            best = (length, percentage);
        }
    }

    let percentage = best.1.round() as u32;
    BestCategory {
        length: best.0,
        percentage,
    }
}

/// Everything the scorecard view shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorecardSummary {
    pub player_name: String,
    #[serde(skip)]
    pub title: &'static Title,
    pub total_score: u32,
    pub total_games: u32,
    pub detailed_stats: DetailedStats,
    pub games_by_length: GamesByLength,
}

#[must_use]
pub fn summarize(stats: &PlayerStats) -> ScorecardSummary {
    ScorecardSummary {
        player_name: stats.player_name.clone(),
        title: title_for(stats.total_score),
        total_score: stats.total_score,
        total_games: stats.total_games,
        detailed_stats: detailed_stats(stats),
        games_by_length: stats.games_by_length,
    }
}
