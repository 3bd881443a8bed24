//! Scoring and titles
//!
//! Turns finished rounds into points, keeps the [`PlayerStats`] record, and
//! derives the title, streak and breakdown shown on the scorecard.

mod stats;
mod summary;
mod table;
mod titles;

pub use stats::{
    GameRecord, GamesByLength, HISTORY_LIMIT, LengthStats, Outcome, PlayerStats, now_millis,
};
pub use summary::{BestCategory, DetailedStats, ScorecardSummary, detailed_stats, summarize, win_streak};
pub use table::{Points, points_for, score_for};
pub use titles::{TITLES, Title, title_for};
