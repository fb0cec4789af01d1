//! Colored formatting of guesses and letter knowledge

use crate::core::{Feedback, LetterKnowledge, LetterState, MatchType, Word};
use colored::{ColoredString, Colorize};

/// Color one guessed letter by its outcome
#[must_use]
pub fn color_match(letter: char, outcome: MatchType) -> ColoredString {
    let letter = letter.to_string();
    match outcome {
        MatchType::Miss => letter.white().on_black(),
        MatchType::WrongPosition => letter.black().on_yellow(),
        MatchType::Hit => letter.black().on_green(),
    }
}

/// Color one alphabet letter by what is known about it
#[must_use]
pub fn color_letter_state(letter: char, state: LetterState) -> ColoredString {
    let letter = letter.to_string();
    match state {
        LetterState::Unknown => letter.white().on_black(),
        LetterState::InWord => letter.black().on_green(),
        LetterState::NotInWord => letter.bright_black().on_black(),
    }
}

/// A guess with each letter colored by its feedback
#[must_use]
pub fn format_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.matches())
        .map(|(letter, &outcome)| color_match(letter, outcome).to_string())
        .collect()
}

/// The alphabet with each letter colored by its state
#[must_use]
pub fn format_letter_states(knowledge: &LetterKnowledge) -> String {
    knowledge
        .iter()
        .map(|(letter, state)| color_letter_state(letter, state).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;

    #[test]
    fn format_guess_keeps_letters_in_order() {
        colored::control::set_override(false);
        let target = Word::new("apple").unwrap();
        let guess = Word::new("plate").unwrap();
        assert_eq!(format_guess(&guess, &score(&target, &guess)), "plate");
    }

    #[test]
    fn format_letter_states_lists_alphabet() {
        colored::control::set_override(false);
        assert_eq!(
            format_letter_states(&LetterKnowledge::new()),
            "abcdefghijklmnopqrstuvwxyz"
        );
    }

    #[test]
    fn colors_follow_outcome() {
        assert_eq!(color_match('a', MatchType::Hit), "a".black().on_green());
        assert_eq!(
            color_match('a', MatchType::WrongPosition),
            "a".black().on_yellow()
        );
        assert_eq!(color_match('a', MatchType::Miss), "a".white().on_black());
        assert_eq!(
            color_letter_state('a', LetterState::NotInWord),
            "a".bright_black().on_black()
        );
    }
}
