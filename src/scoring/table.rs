//! Points awarded per round

use crate::core::WordLength;

use super::Outcome;

/// Points for each outcome at one word length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Points {
    pub win: u32,
    pub lose: u32,
    pub timeout: u32,
}

impl Points {
    /// Points for `outcome`
    #[must_use]
    pub const fn for_outcome(self, outcome: Outcome) -> u32 {
        match outcome {
            Outcome::Won => self.win,
            Outcome::Lost => self.lose,
            Outcome::Timeout => self.timeout,
        }
    }
}

/// Score table; longer words pay more, and running out the clock pays more
/// than using up every guess
#[must_use]
pub const fn points_for(length: WordLength) -> Points {
    match length {
        WordLength::Five => Points { win: 5, lose: 1, timeout: 2 },
        WordLength::Six => Points { win: 6, lose: 2, timeout: 3 },
        WordLength::Seven => Points { win: 7, lose: 3, timeout: 4 },
    }
}

/// Points for one finished round
#[must_use]
pub const fn score_for(length: WordLength, outcome: Outcome) -> u32 {
    points_for(length).for_outcome(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_values() {
        assert_eq!(score_for(WordLength::Five, Outcome::Won), 5);
        assert_eq!(score_for(WordLength::Five, Outcome::Lost), 1);
        assert_eq!(score_for(WordLength::Five, Outcome::Timeout), 2);
        assert_eq!(score_for(WordLength::Six, Outcome::Won), 6);
        assert_eq!(score_for(WordLength::Six, Outcome::Lost), 2);
        assert_eq!(score_for(WordLength::Six, Outcome::Timeout), 3);
        assert_eq!(score_for(WordLength::Seven, Outcome::Won), 7);
        assert_eq!(score_for(WordLength::Seven, Outcome::Lost), 3);
        assert_eq!(score_for(WordLength::Seven, Outcome::Timeout), 4);
    }

    #[test]
    fn win_always_pays_most() {
        for length in WordLength::ALL {
            let points = points_for(length);
            assert!(points.win > points.timeout);
            assert!(points.timeout > points.lose);
        }
    }
}
