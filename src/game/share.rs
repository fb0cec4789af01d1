//! Spoiler-free share code for a finished round

use super::{Game, GameState, MAX_GUESSES};
use std::fmt::Write;

impl Game<'_> {
    /// Summary line followed by one glyph row per guess
    ///
    /// The summary is `"<name> <guesses or X>/6"`, with ` [seed: <seed>]`
    /// appended when the round was seeded. `X` marks a round not won.
    ///
    /// # Examples
    /// ```
    /// use pbwordle::game::Game;
    /// use pbwordle::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["apple"], ["plate"]).unwrap();
    /// let mut game = Game::new(&dictionary, "apple").unwrap();
    /// game.guess("plate").unwrap();
    /// game.guess("apple").unwrap();
    /// assert_eq!(
    ///     game.share_code("pbwordle", Some("fruit")),
    ///     "pbwordle 2/6 [seed: fruit]\n🟨🟨🟨⬛🟩\n🟩🟩🟩🟩🟩"
    /// );
    /// ```
    #[must_use]
    pub fn share_code(&self, name: &str, seed: Option<&str>) -> String {
        let mut code = match self.state() {
            GameState::Win => format!("{name} {}/{MAX_GUESSES}", self.guesses.len()),
            GameState::InProgress | GameState::Loss => format!("{name} X/{MAX_GUESSES}"),
        };
        if let Some(seed) = seed {
            // Writing to a String cannot fail
            let _ = write!(code, " [seed: {seed}]");
        }
        for feedback in &self.results {
            code.push('\n');
            code.push_str(&feedback.to_share_row());
        }
        code
    }
}

#[cfg(test)]
mod tests {
    use crate::game::Game;
    use crate::wordlists::Dictionary;

    fn dictionary() -> Dictionary {
        Dictionary::new(
            ["apple"],
            ["chair", "puppy", "laugh", "plane", "rhino", "novel"],
        )
        .unwrap()
    }

    #[test]
    fn share_code_for_win() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, "apple").unwrap();
        game.guess("apple").unwrap();
        assert_eq!(game.share_code("pbwordle", None), "pbwordle 1/6\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_code_for_loss_uses_x() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, "apple").unwrap();
        for guess in ["chair", "puppy", "laugh", "plane", "rhino", "novel"] {
            game.guess(guess).unwrap();
        }
        let code = game.share_code("pbwordle", Some("abcde"));
        let lines: Vec<&str> = code.lines().collect();
        assert_eq!(lines[0], "pbwordle X/6 [seed: abcde]");
        assert_eq!(lines.len(), 7);
        assert!(lines[1..].iter().all(|row| row.chars().count() == 5));
    }

    #[test]
    fn share_code_rows_follow_guess_order() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, "apple").unwrap();
        game.guess("chair").unwrap();
        game.guess("puppy").unwrap();
        assert_eq!(
            game.share_code("mygame", None),
            "mygame X/6\n⬛⬛🟨⬛⬛\n🟨⬛🟩⬛⬛"
        );
    }
}
