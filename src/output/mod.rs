//! Terminal output formatting
//!
//! Colored rendering of guesses, letter knowledge and round results.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_outcome};
