//! Terminal play mode
//!
//! Reads guesses line by line while a one-second ticker drives the round
//! clock. Lines starting with `/` are commands so that words like PAUSE stay
//! playable.

use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use indicatif::ProgressBar;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio::time::{Interval, MissedTickBehavior};

use super::Session;
use crate::core::{Word, WordLength};
use crate::error::GameError;
use crate::game::{Round, RoundEvent, RoundSettings};
use crate::output::{
    print_board, print_hint, print_keyboard, print_round_result, print_scorecard, print_status_line,
};
use crate::remote::TargetPicker;
use crate::scoring::summarize;
use crate::storage::{Scorecard, StatsStore};
use crate::validation::WordValidator;
use crate::wordlists::WordBank;

const DEFAULT_PLAYER: &str = "Player";

/// Options for a play session
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub length: WordLength,
    /// Player to record under; the stored player or a prompt when `None`
    pub player: Option<String>,
}

enum RoundEnd {
    Finished,
    Quit,
}

/// Play rounds on stdin/stdout until the player stops
///
/// # Errors
///
/// Returns an error on I/O failure, a store failure, or an empty word list.
pub async fn run_play<S: StatsStore>(
    session: &Session,
    scorecard: &mut Scorecard<S>,
    options: PlayOptions,
) -> Result<usize> {
    let input = BufReader::new(tokio::io::stdin());
    run_play_with(session, scorecard, options, input).await
}

/// Play rounds reading player input from `input`
///
/// Returns the number of rounds played to the end.
///
/// # Errors
///
/// Returns an error on I/O failure, a store failure, or an empty word list.
pub async fn run_play_with<S, R>(
    session: &Session,
    scorecard: &mut Scorecard<S>,
    options: PlayOptions,
    input: R,
) -> Result<usize>
where
    S: StatsStore,
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let name = resolve_player(scorecard, options.player, &mut lines).await?;
    let stats = match scorecard.load_player(&name)? {
        Some(stats) => stats,
        None => scorecard.initialize_player(&name)?,
    };

    let mut validator = session.validator();
    let picker = TargetPicker::from_config(&session.config);
    let settings = RoundSettings::for_length(&session.config, options.length);
    let mut rng = rand::rng();

    print_banner(&stats.player_name, options.length, settings);

    let mut finished = 0;
    loop {
        let target = picker.pick(validator.words(), options.length, &mut rng).await?;
        let mut round = Round::new(Word::new(&target, options.length)?, settings);

        if let RoundEnd::Quit = play_round(&mut round, &mut validator, &mut lines).await? {
            println!("Round abandoned. The word was {}.", round.target().text().bright_yellow());
            break;
        }
        finished += 1;

        let points = match round.take_record() {
            Some(record) => scorecard.record(record)?.map(|(_, points)| points),
            None => None,
        };
        print_round_result(&round, points);

        println!("\nPlay again? [Y/n]");
        match lines.next_line().await? {
            Some(answer) if !answer.trim().eq_ignore_ascii_case("n") => {}
            _ => break,
        }
    }

    if let Some(stats) = scorecard.load()? {
        print_scorecard(&summarize(&stats));
    }
    Ok(finished)
}

async fn resolve_player<S, R>(
    scorecard: &Scorecard<S>,
    requested: Option<String>,
    lines: &mut Lines<R>,
) -> Result<String>
where
    S: StatsStore,
    R: AsyncBufRead + Unpin,
{
    if let Some(name) = requested.filter(|n| !n.trim().is_empty()) {
        return Ok(name.trim().to_string());
    }
    if let Some(stats) = scorecard.load()? {
        return Ok(stats.player_name);
    }

    println!("Enter your name:");
    let name = lines.next_line().await?.unwrap_or_default();
    let name = name.trim();
    Ok(if name.is_empty() { DEFAULT_PLAYER } else { name }.to_string())
}

fn print_banner(player: &str, length: WordLength, settings: RoundSettings) {
    println!("\n{}", "\u{2550}".repeat(60).cyan());
    println!(
        " {} {}-letter words, {} guesses",
        "WORDLE ARCADE".bright_cyan().bold(),
        length,
        settings.max_guesses
    );
    println!("{}", "\u{2550}".repeat(60).cyan());
    println!("Welcome, {}!", player.bright_yellow().bold());
    if settings.round_seconds > 0 {
        println!("Each round lasts {} seconds.", settings.round_seconds);
    }
    if settings.hint_interval_seconds > 0 {
        println!("A hint unlocks every {} seconds.", settings.hint_interval_seconds);
    }
    println!("Commands: /pause, /resume, /quit\n");
}

async fn play_round<R: AsyncBufRead + Unpin>(
    round: &mut Round,
    validator: &mut WordValidator<WordBank>,
    lines: &mut Lines<R>,
) -> Result<RoundEnd> {
    print_board(round);
    print_status_line(round);

    let mut ticker = round_ticker().await;

    while !round.is_over() {
        tokio::select! {
            _ = ticker.tick() => {
                if let Some(RoundEvent::HintUnlocked(hint)) = round.tick() {
                    print_hint(hint);
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    return Ok(RoundEnd::Quit);
                };
                let input = line.trim();
                match input.to_lowercase().as_str() {
                    "" => {}
                    "/quit" | "/q" => return Ok(RoundEnd::Quit),
                    "/pause" => {
                        round.pause();
                        println!("Paused. Type /resume to continue.");
                    }
                    "/resume" => {
                        round.resume();
                        print_status_line(round);
                    }
                    _ => submit(round, validator, input).await,
                }
            }
        }
    }
    Ok(RoundEnd::Finished)
}

/// One-second ticker for the round clock
///
/// Ticks missed while a guess is being checked fire back to back afterwards,
/// so lookup time still counts against the round.
async fn round_ticker() -> Interval {
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);
    // The first tick completes immediately
    ticker.tick().await;
    ticker
}

async fn submit(round: &mut Round, validator: &mut WordValidator<WordBank>, input: &str) {
    let spinner = ProgressBar::new_spinner().with_message("checking...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    let result = round.submit_guess(validator, input).await.map(|_| ());
    spinner.finish_and_clear();

    match result {
        Ok(()) => {
            print_board(round);
            print_keyboard(round);
            if !round.is_over() {
                print_status_line(round);
            }
        }
        Err(GameError::NotAWord(_)) => println!("{}", "NOT A VALID WORD!".red().bold()),
        Err(GameError::RoundOver) => {}
        Err(GameError::Paused) => println!("The round is paused. Type /resume to continue."),
        Err(err) => println!("{}", err.to_string().yellow()),
    }
}
