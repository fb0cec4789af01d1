//! Core domain types for Wordle
//!
//! This module contains the fundamental game types with no I/O.
//! Scoring and letter knowledge are pure functions of their inputs.

mod feedback;
mod letters;
mod word;

pub use feedback::{Feedback, MatchType, score};
pub use letters::{LetterKnowledge, LetterState};
pub use word::{WORD_LENGTH, Word, WordError};
