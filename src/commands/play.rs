//! Interactive play mode
//!
//! Text-based game loop: prompt for guesses until the round is won or lost.

use crate::game::{Game, GameError, GameState};
use crate::output::{print_board, print_outcome};
use crate::wordlists::{Dictionary, random_seed};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Settings for one round
#[derive(Debug, Clone)]
pub struct PlayConfig {
    /// Seed text; a random one is generated when absent
    pub seed: Option<String>,
    /// Name printed at the start of the share code
    pub name: String,
}

impl PlayConfig {
    #[must_use]
    pub fn new(seed: Option<String>) -> Self {
        Self {
            seed,
            name: "pbwordle".to_string(),
        }
    }
}

/// Play one round, reading guesses from `input`
///
/// Invalid words are reported and re-prompted. End of input abandons the
/// round. Returns the state the round ended in.
///
/// # Errors
///
/// Returns an error on I/O failure or if the chosen target is rejected.
pub fn run_play<R: BufRead>(
    dictionary: &Dictionary,
    config: &PlayConfig,
    mut input: R,
) -> Result<GameState> {
    let seed = config
        .seed
        .clone()
        .unwrap_or_else(|| random_seed(&mut rand::rng()));
    let target = dictionary.pick(Some(seed.as_str()));
    log::info!("starting round with seed {seed:?}");

    let mut game = Game::new(dictionary, target.text())
        .context("selected target is not a valid dictionary word")?;

    println!(
        "Guess the five-letter word in {} tries.",
        game.remaining_guesses()
    );

    while !game.state().is_over() {
        let Some(line) = read_guess(&mut input)? else {
            log::info!("input closed after {} guesses", game.guesses().len());
            break;
        };

        match game.guess(&line) {
            Ok(_) => print_board(&game),
            Err(GameError::InvalidWord(e)) => println!("{}\n", e.to_string().yellow()),
            Err(e @ GameError::GameOver) => return Err(e.into()),
        }
    }

    print_outcome(&game, &config.name, Some(seed.as_str()));
    Ok(game.state())
}

/// Prompt for and read one line; `None` at end of input
fn read_guess<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    print!("Guess: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
