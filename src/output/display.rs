//! Display functions for a round in progress and its outcome

use super::formatters::{format_guess, format_letter_states};
use crate::game::{Game, GameState};
use colored::Colorize;

/// Print every guess so far, colored by feedback, then the letter states
pub fn print_board(game: &Game<'_>) {
    println!();
    for (guess, feedback) in game.history() {
        println!("{}", format_guess(guess, feedback));
    }
    println!();
    println!("{}", format_letter_states(&game.letter_knowledge()));
    println!();
}

/// Print the result of a finished round and its share code
pub fn print_outcome(game: &Game<'_>, name: &str, seed: Option<&str>) {
    match game.state() {
        GameState::Win => println!("{}", "You won!".green().bold()),
        GameState::Loss => println!(
            "{} The word was: {}",
            "Game over.".red().bold(),
            game.target().text().to_uppercase().bright_yellow().bold()
        ),
        GameState::InProgress => println!(
            "Round abandoned. The word was: {}",
            game.target().text().to_uppercase().bright_yellow()
        ),
    }
    println!("{}", game.share_code(name, seed));
    println!();
}
