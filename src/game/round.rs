//! A single round of play
//!
//! `Playing` moves to `Won` on a perfect guess, to `Lost` when the guesses run
//! out, and to `Lost` with a `Timeout` outcome when the clock expires. Every
//! transition happens once; after that the round ignores guesses and ticks.

use super::clock::{Hint, HintSchedule, RoundClock};
use crate::config::Config;
use crate::core::{Feedback, Verdict, Word, WordLength, letter_status};
use crate::error::{GameError, GameResult};
use crate::scoring::{GameRecord, Outcome};
use crate::validation::WordValidator;
use crate::wordlists::WordListProvider;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Playing,
    Won,
    Lost,
}

/// Something the clock caused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    HintUnlocked(Hint),
    TimedOut,
}

/// Per-round limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSettings {
    pub max_guesses: usize,
    /// 0 disables the countdown
    pub round_seconds: u32,
    /// 0 disables hints
    pub hint_interval_seconds: u32,
}

impl RoundSettings {
    #[must_use]
    pub fn for_length(config: &Config, length: WordLength) -> Self {
        Self {
            max_guesses: config.max_guesses_by_length.for_length(length),
            round_seconds: config.round_seconds,
            hint_interval_seconds: config.hint_interval_seconds,
        }
    }

    /// Default guess limit, no timer, no hints
    #[must_use]
    pub const fn untimed(length: WordLength) -> Self {
        Self {
            max_guesses: length.default_max_guesses(),
            round_seconds: 0,
            hint_interval_seconds: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Round {
    target: Word,
    max_guesses: usize,
    guesses: Vec<Word>,
    feedback: Vec<Feedback>,
    status: RoundStatus,
    outcome: Option<Outcome>,
    clock: RoundClock,
    hints: HintSchedule,
    revealed: Vec<Hint>,
    recorded: bool,
}

impl Round {
    #[must_use]
    pub fn new(target: Word, settings: RoundSettings) -> Self {
        Self {
            target,
            max_guesses: settings.max_guesses.max(1),
            guesses: Vec::new(),
            feedback: Vec::new(),
            status: RoundStatus::Playing,
            outcome: None,
            clock: RoundClock::new(settings.round_seconds),
            hints: HintSchedule::new(settings.hint_interval_seconds),
            revealed: Vec::new(),
            recorded: false,
        }
    }

    /// Validate `text` and play it
    ///
    /// # Errors
    /// - `GameError::RoundOver` once the round has ended
    /// - `GameError::Paused` while the clock is paused
    /// - `GameError::InvalidWord` for the wrong length or non-letters
    /// - `GameError::NotAWord` when the validator rejects the word
    pub async fn submit_guess<P: WordListProvider>(
        &mut self,
        validator: &mut WordValidator<P>,
        text: &str,
    ) -> GameResult<&Feedback> {
        let word = self.prepare(text)?;
        if !validator.validate(word.text(), self.length()).await {
            return Err(GameError::NotAWord(word.text().to_string()));
        }
        Ok(self.play(word))
    }

    /// Like [`Round::submit_guess`] but only consults the cache and local list
    ///
    /// # Errors
    /// Same as [`Round::submit_guess`].
    pub fn submit_guess_local<P: WordListProvider>(
        &mut self,
        validator: &WordValidator<P>,
        text: &str,
    ) -> GameResult<&Feedback> {
        let word = self.prepare(text)?;
        if !validator.validate_local(word.text(), self.length()) {
            return Err(GameError::NotAWord(word.text().to_string()));
        }
        Ok(self.play(word))
    }

    fn prepare(&self, text: &str) -> GameResult<Word> {
        if self.is_over() {
            return Err(GameError::RoundOver);
        }
        if self.is_paused() {
            return Err(GameError::Paused);
        }
        Ok(Word::new(text, self.length())?)
    }

    fn play(&mut self, word: Word) -> &Feedback {
        let feedback = Feedback::calculate(&word, &self.target);
        let perfect = feedback.is_perfect();
        self.guesses.push(word);
        self.feedback.push(feedback);

        if perfect {
            self.finish(Outcome::Won);
        } else if self.guesses.len() >= self.max_guesses {
            self.finish(Outcome::Lost);
        }

        // Just pushed
        &self.feedback[self.feedback.len() - 1]
    }

    /// Advance the clock by one second
    ///
    /// Does nothing once the round is over or while paused.
    pub fn tick(&mut self) -> Option<RoundEvent> {
        if self.is_over() || !self.clock.advance() {
            return None;
        }

        if self.clock.is_expired() {
            self.finish(Outcome::Timeout);
            return Some(RoundEvent::TimedOut);
        }

        if self.hints.unlocks_at(self.clock.elapsed()) {
            return self.reveal_next().map(RoundEvent::HintUnlocked);
        }
        None
    }

    pub const fn pause(&mut self) {
        self.clock.pause();
    }

    pub const fn resume(&mut self) {
        self.clock.resume();
    }

    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    /// Reveal the first position not yet solved or hinted
    ///
    /// At least one letter always stays hidden.
    fn reveal_next(&mut self) -> Option<Hint> {
        if self.revealed.len() + 1 >= self.target.chars().len() {
            return None;
        }

        let solved = |position: usize| {
            self.feedback
                .iter()
                .any(|f| f.verdicts()[position] == Verdict::Correct)
        };
        let position = (0..self.target.chars().len())
            .find(|&p| !solved(p) && !self.revealed.iter().any(|h| h.position == p))?;

        let hint = Hint {
            position,
            letter: char::from(self.target.chars()[position]),
        };
        self.revealed.push(hint);
        Some(hint)
    }

    fn finish(&mut self, outcome: Outcome) {
        if self.status != RoundStatus::Playing {
            return;
        }
        self.status = match outcome {
            Outcome::Won => RoundStatus::Won,
            Outcome::Lost | Outcome::Timeout => RoundStatus::Lost,
        };
        self.outcome = Some(outcome);
        tracing::debug!(%outcome, guesses = self.guesses.len(), "round finished");
    }

    /// Hand over the finished round for recording, at most once
    pub fn take_record(&mut self) -> Option<GameRecord> {
        let outcome = self.outcome?;
        if self.recorded {
            return None;
        }
        self.recorded = true;

        let attempts = u32::try_from(self.guesses.len()).unwrap_or(u32::MAX);
        Some(
            GameRecord::new(self.length(), outcome)
                .with_word(self.target.text())
                .with_attempts(attempts)
                .with_time_spent(self.clock.elapsed()),
        )
    }

    /// Aggregate verdict for a letter across all guesses
    #[must_use]
    pub fn letter_status(&self, letter: u8) -> Option<Verdict> {
        letter_status(&self.guesses, &self.target, letter)
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn length(&self) -> WordLength {
        self.target.length()
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != RoundStatus::Playing
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Played guesses with their feedback, oldest first
    pub fn rows(&self) -> impl Iterator<Item = (&Word, &Feedback)> {
        self.guesses.iter().zip(&self.feedback)
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.max_guesses.saturating_sub(self.guesses.len())
    }

    #[must_use]
    pub const fn elapsed_seconds(&self) -> u32 {
        self.clock.elapsed()
    }

    #[must_use]
    pub const fn remaining_seconds(&self) -> Option<u32> {
        self.clock.remaining()
    }

    #[must_use]
    pub fn hints(&self) -> &[Hint] {
        &self.revealed
    }
}
