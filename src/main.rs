//! pbwordle - CLI
//!
//! Play a round of Wordle in the terminal. Pass a seed to get a reproducible
//! target that friends can play too.

use anyhow::{Context, Result};
use clap::Parser;
use flexi_logger::Logger;
use pbwordle::{
    commands::{PlayConfig, run_play},
    game::GameState,
    wordlists::{Dictionary, EXTRA, SHORT, loader::load_from_file},
};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pbwordle",
    about = "Clone of the popular Wordle game",
    version,
    author
)]
struct Cli {
    /// Optional game seed; the same seed always picks the same word
    seed: Option<String>,

    /// Name shown at the start of the share code
    #[arg(short, long, default_value = "pbwordle")]
    name: String,

    /// File of target words (one per line) replacing the built-in list
    #[arg(long)]
    short: Option<PathBuf>,

    /// File of extra accepted guesses replacing the built-in list
    #[arg(long)]
    extra: Option<PathBuf>,
}

/// Build the dictionary from the built-in lists or the given files
fn load_dictionary(short: Option<&PathBuf>, extra: Option<&PathBuf>) -> Result<Dictionary> {
    let short = match short {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?,
        None => SHORT.iter().map(ToString::to_string).collect(),
    };
    let extra = match extra {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?,
        None => EXTRA.iter().map(ToString::to_string).collect(),
    };

    Ok(Dictionary::new(short, extra)?)
}

fn main() -> Result<()> {
    let _logger = Logger::try_with_env_or_str("warn")?
        .format(flexi_logger::colored_default_format)
        .start()?;

    let cli = Cli::parse();

    let dictionary = load_dictionary(cli.short.as_ref(), cli.extra.as_ref())?;

    let config = PlayConfig {
        seed: cli.seed,
        name: cli.name,
    };

    let state = run_play(&dictionary, &config, io::stdin().lock())?;
    if state == GameState::InProgress {
        log::warn!("round ended before it was decided");
    }
    Ok(())
}
