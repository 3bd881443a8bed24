//! Display functions for rounds and the scorecard

use colored::Colorize;

use super::formatters::{KEYBOARD_ROWS, clock, create_progress_bar, guess_row, hex_rgb, tile};
use crate::game::{Hint, Round, RoundStatus};
use crate::scoring::{Outcome, ScorecardSummary, Title};

/// Print the guesses played so far and the empty rows left
pub fn print_board(round: &Round) {
    println!();
    for (word, feedback) in round.rows() {
        println!("  {}  {}", guess_row(word, feedback), feedback.to_emoji());
    }
    let blank = " _ ".repeat(round.length().letters());
    for _ in 0..round.remaining_guesses() {
        println!("  {}", blank.bright_black());
    }
    println!();
}

/// Print the alphabet colored by what the guesses revealed
pub fn print_keyboard(round: &Round) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: String = row
            .bytes()
            .map(|b| tile(char::from(b), round.letter_status(b)).to_string())
            .collect();
        println!("  {}{keys}", " ".repeat(indent * 2));
    }
    println!();
}

/// Print the time left and any hints unlocked
pub fn print_status_line(round: &Round) {
    let mut parts = vec![format!(
        "Guess {}/{}",
        (round.guesses().len() + 1).min(round.max_guesses()),
        round.max_guesses()
    )];
    if let Some(remaining) = round.remaining_seconds() {
        parts.push(format!("\u{23f1} {}", clock(remaining)));
    }
    if !round.hints().is_empty() {
        parts.push(format!("Hints: {}", hint_pattern(round)));
    }
    println!("{}", parts.join("   ").bright_black());
}

/// Target letters revealed by hints, `_` for hidden ones
fn hint_pattern(round: &Round) -> String {
    let mut shown = vec!['_'; round.length().letters()];
    for &Hint { position, letter } in round.hints() {
        shown[position] = letter;
    }
    shown.into_iter().collect()
}

/// Announce a newly unlocked hint
pub fn print_hint(hint: Hint) {
    println!(
        "{} letter {} is {}",
        "\u{1f4a1} Hint:".bright_cyan().bold(),
        hint.position + 1,
        hint.letter.to_string().bright_yellow().bold()
    );
}

/// Print how the round ended
pub fn print_round_result(round: &Round, points: Option<u32>) {
    let target = round.target().text().bright_yellow().bold();
    match (round.status(), round.outcome()) {
        (RoundStatus::Won, _) => println!(
            "{}",
            format!("\u{2705} Solved in {} guesses!", round.guesses().len())
                .green()
                .bold()
        ),
        (_, Some(Outcome::Timeout)) => {
            println!("{} The word was {target}", "\u{23f0} Time's up!".yellow().bold());
        }
        _ => println!("{} The word was {target}", "\u{274c} Out of guesses.".red().bold()),
    }
    if let Some(points) = points {
        println!("   +{} points", points.to_string().bright_green().bold());
    }
}

fn title_line(title: &Title) -> String {
    let name = format!("{} {}", title.icon, title.title);
    let name = match hex_rgb(title.color) {
        Some((r, g, b)) => name.truecolor(r, g, b).bold().to_string(),
        None => name.bold().to_string(),
    };
    format!("{name} ({})", title.description)
}

/// Print the player scorecard
pub fn print_scorecard(summary: &ScorecardSummary) {
    let stats = &summary.detailed_stats;

    println!("\n{}", "\u{2550}".repeat(60).cyan());
    println!(
        " {} {}",
        "SCORECARD:".bright_cyan().bold(),
        summary.player_name.bright_yellow().bold()
    );
    println!("{}", "\u{2550}".repeat(60).cyan());

    println!("\n   {}", title_line(summary.title));
    println!(
        "   Total score:    {}",
        summary.total_score.to_string().bright_yellow().bold()
    );
    println!("   Games played:   {}", summary.total_games);
    println!("   Win rate:       {:.1}%", stats.win_rate);
    println!("   Average score:  {:.1}", stats.average_score);
    println!("   Current streak: {}", stats.current_streak);
    println!("   Favorite:       {} letters", stats.favorite_length);
    println!(
        "   Best category:  {} letters ({}%)",
        stats.best_category.length, stats.best_category.percentage
    );

    println!("\n\u{1f4c8} {}", "By length:".bright_cyan().bold());
    for (length, counters) in summary.games_by_length.iter() {
        let bar = create_progress_bar(counters.win_percentage(), 100.0, 20);
        println!(
            "   {length}: {} {:3} played  {:3} won  {:3} lost  {:3} timeout  {:4} pts",
            bar.green(),
            counters.played,
            counters.won,
            counters.lost,
            counters.timeout,
            counters.score
        );
    }
    println!();
}

/// Print a validator verdict for one word
pub fn print_check_result(word: &str, valid: bool) {
    if valid {
        println!("{} {}", "\u{2714}".green().bold(), word.to_uppercase().bold());
    } else {
        println!(
            "{} {} is not a valid word",
            "\u{2718}".red().bold(),
            word.to_uppercase().bold()
        );
    }
}
