//! Round lifecycle
//!
//! A [`Round`] owns the target, the guesses and the clock. Hosts drive it with
//! guesses and one-second ticks, then hand the finished round to the
//! scorecard with [`Round::take_record`].

mod clock;
mod round;

pub use clock::{Hint, HintSchedule, RoundClock};
pub use round::{Round, RoundEvent, RoundSettings, RoundStatus};
