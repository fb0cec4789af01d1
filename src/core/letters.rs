//! Aggregate knowledge about each letter of the alphabet

use super::feedback::{Feedback, MatchType};
use super::word::Word;

/// What the guesses so far reveal about one letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterState {
    #[default]
    Unknown,
    InWord,
    NotInWord,
}

/// Knowledge state of all 26 letters, a through z
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterKnowledge([LetterState; 26]);

impl LetterKnowledge {
    /// All letters `Unknown`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the knowledge
    ///
    /// `InWord` is never downgraded: any non-miss marks the letter `InWord`,
    /// a miss marks it `NotInWord` only if it is not already `InWord`.
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &outcome) in guess.chars().iter().zip(feedback.matches()) {
            let state = &mut self.0[usize::from(letter - b'a')];
            *state = match outcome {
                MatchType::Hit | MatchType::WrongPosition => LetterState::InWord,
                MatchType::Miss if *state == LetterState::InWord => LetterState::InWord,
                MatchType::Miss => LetterState::NotInWord,
            };
        }
    }

    /// State of `letter` (case-insensitive); non a-z letters are `Unknown`
    #[must_use]
    pub fn get(&self, letter: char) -> LetterState {
        let letter = letter.to_ascii_lowercase();
        if letter.is_ascii_lowercase() {
            self.0[usize::from(letter as u8 - b'a')]
        } else {
            LetterState::Unknown
        }
    }

    /// All 26 letters with their state, in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterState)> + '_ {
        (b'a'..=b'z').map(char::from).zip(self.0.iter().copied())
    }
}
