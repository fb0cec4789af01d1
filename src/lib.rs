//! pbwordle
//!
//! A terminal Wordle clone: a hidden five-letter word, six guesses, and
//! letter-by-letter feedback with exact duplicate-letter scoring.
//!
//! # Quick Start
//!
//! ```rust
//! use pbwordle::game::{Game, GameState};
//! use pbwordle::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::embedded().unwrap();
//! let target = dictionary.pick(Some("my seed"));
//! let mut game = Game::new(&dictionary, target.text()).unwrap();
//!
//! let feedback = game.guess(target.text()).unwrap();
//! assert!(feedback.is_perfect());
//! assert_eq!(game.state(), GameState::Win);
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
