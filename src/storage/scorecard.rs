//! Scorecard service over a [`StatsStore`]

use super::StatsStore;
use crate::error::StoreResult;
use crate::scoring::{GameRecord, PlayerStats};

/// Key the player record is stored under
pub const STATS_KEY: &str = "wordle_arcade_player_stats";

/// Reads and writes the single player record
#[derive(Debug)]
pub struct Scorecard<S: StatsStore> {
    store: S,
}

impl<S: StatsStore> Scorecard<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored record, or `None` when absent or unreadable
    ///
    /// A corrupt record is logged and treated as missing.
    ///
    /// # Errors
    /// Returns `StoreError` when the store itself fails.
    pub fn load(&self) -> StoreResult<Option<PlayerStats>> {
        let Some(blob) = self.store.get(STATS_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str::<PlayerStats>(&blob) {
            Ok(stats) => Ok(Some(stats)),
            Err(err) => {
                tracing::warn!(error = %err, "stored player stats are malformed, ignoring them");
                Ok(None)
            }
        }
    }

    /// Stored record if it belongs to `name`
    ///
    /// # Errors
    /// Returns `StoreError` when the store itself fails.
    pub fn load_player(&self, name: &str) -> StoreResult<Option<PlayerStats>> {
        Ok(self.load()?.filter(|stats| stats.player_name == name.trim()))
    }

    /// Start a fresh record for `name`, replacing any existing one
    ///
    /// # Errors
    /// Returns `StoreError` when the record cannot be written.
    pub fn initialize_player(&mut self, name: &str) -> StoreResult<PlayerStats> {
        let stats = PlayerStats::new(name);
        self.save(&stats)?;
        tracing::info!(player = %stats.player_name, "initialized player");
        Ok(stats)
    }

    /// Stored record, or a fresh one for `name` when none can be read
    ///
    /// # Errors
    /// Returns `StoreError` when the store itself fails.
    pub fn load_or_initialize(&mut self, name: &str) -> StoreResult<PlayerStats> {
        match self.load()? {
            Some(stats) => Ok(stats),
            None => self.initialize_player(name),
        }
    }

    /// Apply a finished round to the stored record
    ///
    /// Returns the updated record and the points earned, or `None` when no
    /// player has been initialized.
    ///
    /// # Errors
    /// Returns `StoreError` when the store fails.
    pub fn record(&mut self, record: GameRecord) -> StoreResult<Option<(PlayerStats, u32)>> {
        let Some(mut stats) = self.load()? else {
            tracing::warn!("no player initialized, round not recorded");
            return Ok(None);
        };

        let (length, outcome) = (record.word_length, record.result);
        let points = stats.record_outcome(record);
        self.save(&stats)?;
        tracing::info!(%length, %outcome, points, total = stats.total_score, "recorded round");
        Ok(Some((stats, points)))
    }

    /// Pretty JSON backup of the record, empty when there is none
    ///
    /// # Errors
    /// Returns `StoreError` when the store fails.
    pub fn export(&self) -> StoreResult<String> {
        match self.load()? {
            Some(stats) => Ok(serde_json::to_string_pretty(&stats)?),
            None => Ok(String::new()),
        }
    }

    /// Replace the record with a backup
    ///
    /// Returns `false` without touching the store when `data` does not parse.
    ///
    /// # Errors
    /// Returns `StoreError` when the store fails.
    pub fn import(&mut self, data: &str) -> StoreResult<bool> {
        match serde_json::from_str::<PlayerStats>(data) {
            Ok(stats) => {
                if !stats.is_consistent() {
                    tracing::warn!("imported stats have totals that do not match their counters");
                }
                self.save(&stats)?;
                Ok(true)
            }
            Err(err) => {
                tracing::warn!(error = %err, "rejected stats import");
                Ok(false)
            }
        }
    }

    /// Delete the record
    ///
    /// # Errors
    /// Returns `StoreError` when the store fails.
    pub fn reset(&mut self) -> StoreResult<()> {
        self.store.remove(STATS_KEY)
    }

    /// Whether anything is stored under the record key
    ///
    /// # Errors
    /// Returns `StoreError` when the store fails.
    pub fn has_player_data(&self) -> StoreResult<bool> {
        Ok(self.store.get(STATS_KEY)?.is_some())
    }

    fn save(&mut self, stats: &PlayerStats) -> StoreResult<()> {
        let blob = serde_json::to_string(stats)?;
        self.store.set(STATS_KEY, &blob)
    }
}
