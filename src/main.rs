//! Wordle Arcade - CLI
//!
//! Plays 5, 6 and 7 letter rounds in the terminal and keeps a local scorecard.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_arcade::{
    commands::{Session, play::PlayOptions, run_check, run_export, run_import, run_play, run_reset, run_stats},
    config::{ConfigLoader, warn_fallback},
    core::WordLength,
    observability,
};

#[derive(Parser)]
#[command(
    name = "wordle_arcade",
    about = "Word-guessing game with 5, 6 and 7 letter rounds, hints and a persistent scorecard",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length: 5, 6 or 7 (default from config)
    #[arg(short, long, global = true, value_parser = parse_length)]
    length: Option<WordLength>,

    /// Path to configuration file (added on top of discovered files)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Skip remote word services; use only the built-in lists
    #[arg(long, global = true)]
    offline: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play rounds in the terminal (default)
    Play {
        /// Player name to record under
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Check whether words are accepted as guesses
    Check {
        /// Words to check
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Show the scorecard
    Stats,

    /// Print or save a JSON backup of the scorecard
    Export {
        /// Write to FILE instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Restore the scorecard from a JSON backup
    Import {
        /// Backup file
        file: PathBuf,
    },

    /// Delete all recorded games
    Reset {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

fn parse_length(value: &str) -> Result<WordLength, String> {
    let letters: usize = value.parse().map_err(|_| format!("'{value}' is not a number"))?;
    WordLength::try_from(letters).map_err(|e| e.to_string())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let mut loader = ConfigLoader::new().with_search_dir(&cwd);
    if let Some(ref path) = cli.config {
        loader = loader.with_file(path);
    }
    let (mut config, config_error) = loader.load_or_fallback();
    if cli.offline {
        config.enable_api_validation = false;
    }

    observability::init(config.log_level, cli.verbose, cli.quiet);
    if let Some(ref err) = config_error {
        warn_fallback(err);
    }
    tracing::debug!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        offline = cli.offline,
        config = ?cli.config,
        "CLI initialized"
    );

    let length = cli.length.unwrap_or(config.default_word_length);
    let session = Session::new(config);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { name: None });

    let result = match command {
        Commands::Play { name } => {
            let mut scorecard = session.scorecard()?;
            let options = PlayOptions { length, player: name };
            run_play(&session, &mut scorecard, options).await.map(|_| ())
        }
        Commands::Check { words } => run_check(&session, &words, cli.length).await.map(|_| ()),
        Commands::Stats => run_stats(&session.scorecard()?),
        Commands::Export { output } => run_export(&session.scorecard()?, output.as_deref()),
        Commands::Import { file } => run_import(&mut session.scorecard()?, &file),
        Commands::Reset { yes } => run_reset(&mut session.scorecard()?, yes),
    };
    if let Err(ref err) = result {
        tracing::error!(error = %err, "fatal error");
    }
    result
}
