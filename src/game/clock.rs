//! Round countdown and hint schedule
//!
//! Time advances only through explicit one-second ticks, so a round is fully
//! deterministic under test.

/// Elapsed time and the optional time limit of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundClock {
    elapsed: u32,
    limit: Option<u32>,
    paused: bool,
}

impl RoundClock {
    /// Clock with a limit of `seconds`; 0 means untimed
    #[must_use]
    pub const fn new(seconds: u32) -> Self {
        Self {
            elapsed: 0,
            limit: if seconds == 0 { None } else { Some(seconds) },
            paused: false,
        }
    }

    /// Advance one second unless paused; returns whether time moved
    pub const fn advance(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.elapsed = self.elapsed.saturating_add(1);
        true
    }

    #[must_use]
    pub const fn is_expired(&self) -> bool {
        match self.limit {
            Some(limit) => self.elapsed >= limit,
            None => false,
        }
    }

    #[must_use]
    pub const fn elapsed(&self) -> u32 {
        self.elapsed
    }

    /// Seconds left, `None` when untimed
    #[must_use]
    pub const fn remaining(&self) -> Option<u32> {
        match self.limit {
            Some(limit) => Some(limit.saturating_sub(self.elapsed)),
            None => None,
        }
    }

    pub const fn pause(&mut self) {
        self.paused = true;
    }

    pub const fn resume(&mut self) {
        self.paused = false;
    }

    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }
}

/// A revealed letter of the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    /// Zero-based position in the target
    pub position: usize,
    pub letter: char,
}

/// Unlocks one hint every `interval` elapsed seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintSchedule {
    interval: u32,
}

impl HintSchedule {
    /// Schedule with `interval` seconds between hints; 0 disables hints
    #[must_use]
    pub const fn new(interval: u32) -> Self {
        Self { interval }
    }

    /// Whether a hint unlocks at exactly `elapsed` seconds
    #[must_use]
    pub const fn unlocks_at(&self, elapsed: u32) -> bool {
        self.interval > 0 && elapsed > 0 && elapsed % self.interval == 0
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.interval > 0
    }
}
