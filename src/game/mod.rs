//! A single round of Wordle
//!
//! `Game` owns the target and the append-only history of guesses and their
//! feedback. State and letter knowledge are derived from the history on
//! demand rather than stored.

mod share;

use crate::core::{Feedback, LetterKnowledge, Word, WordError, score};
use crate::wordlists::Dictionary;

/// Guesses allowed per round
pub const MAX_GUESSES: usize = 6;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    Win,
    Loss,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Errors from creating a game or submitting a guess
///
/// A failed call never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Wrong length, bad characters, or not in the dictionary; re-prompt
    #[error("{0}")]
    InvalidWord(#[from] WordError),

    /// A guess was submitted after the round ended
    #[error("game is over")]
    GameOver,
}

/// One round: a target word and the guesses made against it
#[derive(Debug, Clone)]
pub struct Game<'d> {
    dictionary: &'d Dictionary,
    target: Word,
    guesses: Vec<Word>,
    results: Vec<Feedback>,
}

impl<'d> Game<'d> {
    /// Start a round with `word` as the target
    ///
    /// # Errors
    /// Returns `GameError::InvalidWord` if `word` is not five letters or is
    /// not in `dictionary`.
    ///
    /// # Examples
    /// ```
    /// use pbwordle::game::{Game, GameState};
    /// use pbwordle::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["apple"], ["plate"]).unwrap();
    /// let mut game = Game::new(&dictionary, "Apple").unwrap();
    /// game.guess("plate").unwrap();
    /// assert_eq!(game.state(), GameState::InProgress);
    /// game.guess("apple").unwrap();
    /// assert_eq!(game.state(), GameState::Win);
    /// ```
    pub fn new(dictionary: &'d Dictionary, word: &str) -> Result<Self, GameError> {
        let target = validate(dictionary, word)?;
        log::debug!("new game started");
        Ok(Self {
            dictionary,
            target,
            guesses: Vec::with_capacity(MAX_GUESSES),
            results: Vec::with_capacity(MAX_GUESSES),
        })
    }

    /// Submit a guess and get its feedback
    ///
    /// # Errors
    /// - `GameError::GameOver` if the round has already been won or lost
    /// - `GameError::InvalidWord` if the guess is not a five-letter
    ///   dictionary word
    pub fn guess(&mut self, word: &str) -> Result<Feedback, GameError> {
        if self.state().is_over() {
            return Err(GameError::GameOver);
        }
        let guess = validate(self.dictionary, word)?;

        let feedback = score(&self.target, &guess);
        log::debug!(
            "guess {}: {} ({} hits)",
            self.guesses.len() + 1,
            guess,
            feedback.count_hits()
        );
        self.guesses.push(guess);
        self.results.push(feedback);
        Ok(feedback)
    }

    /// Current state, derived from the history
    #[must_use]
    pub fn state(&self) -> GameState {
        match self.guesses.last() {
            Some(last) if *last == self.target => GameState::Win,
            _ if self.guesses.len() >= MAX_GUESSES => GameState::Loss,
            _ => GameState::InProgress,
        }
    }

    /// Knowledge of every letter, recomputed from the full history
    #[must_use]
    pub fn letter_knowledge(&self) -> LetterKnowledge {
        let mut knowledge = LetterKnowledge::new();
        for (guess, feedback) in self.history() {
            knowledge.record(guess, feedback);
        }
        knowledge
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn results(&self) -> &[Feedback] {
        &self.results
    }

    /// Guesses paired with their feedback, in submission order
    pub fn history(&self) -> impl Iterator<Item = (&Word, &Feedback)> {
        self.guesses.iter().zip(&self.results)
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        if self.state().is_over() {
            0
        } else {
            MAX_GUESSES - self.guesses.len()
        }
    }
}

fn validate(dictionary: &Dictionary, word: &str) -> Result<Word, WordError> {
    let word = Word::new(word)?;
    if dictionary.contains_word(&word) {
        Ok(word)
    } else {
        Err(WordError::NotInWordList(word.to_string()))
    }
}
