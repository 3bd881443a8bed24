//! Scorecard commands: show, export, import, reset

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use colored::Colorize;

use crate::output::print_scorecard;
use crate::scoring::summarize;
use crate::storage::{Scorecard, StatsStore};

/// Print the stored scorecard
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn run_stats<S: StatsStore>(scorecard: &Scorecard<S>) -> Result<()> {
    match scorecard.load()? {
        Some(stats) => print_scorecard(&summarize(&stats)),
        None => println!("No games recorded yet. Run `wordle_arcade play` to start."),
    }
    Ok(())
}

/// Write the stats backup to `output`, or stdout when `None`
///
/// # Errors
///
/// Returns an error if the store cannot be read or the file cannot be written.
pub fn run_export<S: StatsStore>(scorecard: &Scorecard<S>, output: Option<&Path>) -> Result<()> {
    let backup = scorecard.export()?;
    if backup.is_empty() {
        bail!("no player data to export");
    }

    match output {
        Some(path) => {
            fs::write(path, &backup)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("{} stats exported to {}", "\u{2714}".green(), path.display());
        }
        None => println!("{backup}"),
    }
    Ok(())
}

/// Replace the stored stats with the backup in `input`
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a stats backup, or the
/// store cannot be written.
pub fn run_import<S: StatsStore>(scorecard: &mut Scorecard<S>, input: &Path) -> Result<()> {
    let data = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    if !scorecard.import(&data)? {
        bail!("{} is not a valid stats backup", input.display());
    }
    println!("{} stats imported from {}", "\u{2714}".green(), input.display());
    Ok(())
}

/// Delete the stored stats; requires `confirmed`
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn run_reset<S: StatsStore>(scorecard: &mut Scorecard<S>, confirmed: bool) -> Result<()> {
    if !confirmed {
        println!("This deletes all recorded games. Re-run with --yes to confirm.");
        return Ok(());
    }
    scorecard.reset()?;
    println!("{} stats reset", "\u{2714}".green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordLength;
    use crate::scoring::{GameRecord, Outcome};
    use crate::storage::MemoryStore;
    use tempfile::TempDir;

    fn with_player() -> Scorecard<MemoryStore> {
        let mut card = Scorecard::new(MemoryStore::new());
        card.initialize_player("Ada").unwrap();
        card.record(GameRecord::new(WordLength::Five, Outcome::Won)).unwrap();
        card
    }

    #[test]
    fn export_then_import_through_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("backup.json");
        let card = with_player();
        run_export(&card, Some(&path)).unwrap();

        let mut restored = Scorecard::new(MemoryStore::new());
        run_import(&mut restored, &path).unwrap();
        assert_eq!(restored.load().unwrap(), card.load().unwrap());
    }

    #[test]
    fn export_without_data_fails() {
        let card = Scorecard::new(MemoryStore::new());
        assert!(run_export(&card, None).is_err());
    }

    #[test]
    fn import_rejects_garbage() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("garbage.json");
        fs::write(&path, "not stats").unwrap();

        let mut card = with_player();
        assert!(run_import(&mut card, &path).is_err());
        assert_eq!(card.load().unwrap().unwrap().total_score, 5);
    }

    #[test]
    fn reset_needs_confirmation() {
        let mut card = with_player();
        run_reset(&mut card, false).unwrap();
        assert!(card.has_player_data().unwrap());
        run_reset(&mut card, true).unwrap();
        assert!(!card.has_player_data().unwrap());
    }
}
