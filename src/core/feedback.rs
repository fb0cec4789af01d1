//! Per-letter scoring of a guess against the target
//!
//! Each guessed letter is scored as one of:
//! - Miss (letter not available in the target)
//! - `WrongPosition` (letter in the target, elsewhere)
//! - Hit (letter in the correct position)

use super::word::{WORD_LENGTH, Word};

/// Outcome for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchType {
    Miss,
    WrongPosition,
    Hit,
}

impl MatchType {
    /// Share-code glyph for this outcome
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Miss => '⬛',
            Self::WrongPosition => '🟨',
            Self::Hit => '🟩',
        }
    }
}

/// Scored result of one guess, index-aligned with the guess letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([MatchType; WORD_LENGTH]);

impl Feedback {
    /// All hits (the guess was the target)
    pub const PERFECT: Self = Self([MatchType::Hit; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(matches: [MatchType; WORD_LENGTH]) -> Self {
        Self(matches)
    }

    #[inline]
    #[must_use]
    pub const fn matches(&self) -> &[MatchType; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the number of `Hit` entries
    #[must_use]
    pub fn count_hits(&self) -> usize {
        self.0.iter().filter(|&&m| m == MatchType::Hit).count()
    }

    /// Count the number of `WrongPosition` entries
    #[must_use]
    pub fn count_wrong_positions(&self) -> usize {
        self.0
            .iter()
            .filter(|&&m| m == MatchType::WrongPosition)
            .count()
    }

    /// Render as a row of share-code glyphs, e.g. "⬛🟨🟩⬛🟩"
    ///
    /// # Examples
    /// ```
    /// use pbwordle::core::{Word, score};
    ///
    /// let target = Word::new("apple").unwrap();
    /// let guess = Word::new("plate").unwrap();
    /// assert_eq!(score(&target, &guess).to_share_row(), "🟨🟨🟨⬛🟩");
    /// ```
    #[must_use]
    pub fn to_share_row(&self) -> String {
        self.0.iter().map(|m| m.glyph()).collect()
    }
}

/// Score `guess` against `target`, handling duplicate letters exactly
///
/// # Algorithm
/// 1. First pass: mark hits; every target letter not consumed by a hit
///    goes into a pool of available letters (duplicates counted)
/// 2. Second pass, left to right: a non-hit letter found in the pool is
///    `WrongPosition` and consumes one copy, otherwise it is a `Miss`
///
/// A guess never gets more `Hit`/`WrongPosition` credit for a letter than
/// the target has copies of it.
///
/// # Examples
/// ```
/// use pbwordle::core::{MatchType::*, Word, score};
///
/// let target = Word::new("lulls").unwrap();
/// let guess = Word::new("flail").unwrap();
/// assert_eq!(
///     score(&target, &guess).matches(),
///     &[Miss, WrongPosition, Miss, Miss, WrongPosition]
/// );
/// ```
#[must_use]
pub fn score(target: &Word, guess: &Word) -> Feedback {
    let mut result = [MatchType::Miss; WORD_LENGTH];
    let mut pool = [0u8; 26];

    for (i, (&t, &g)) in target.chars().iter().zip(guess.chars()).enumerate() {
        if t == g {
            result[i] = MatchType::Hit;
        } else {
            pool[usize::from(t - b'a')] += 1;
        }
    }

    for (slot, &g) in result.iter_mut().zip(guess.chars()) {
        if *slot == MatchType::Hit {
            continue;
        }
        let available = &mut pool[usize::from(g - b'a')];
        if *available > 0 {
            *available -= 1;
            *slot = MatchType::WrongPosition;
        }
    }

    Feedback(result)
}
