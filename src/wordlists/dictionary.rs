//! The set of words a round can be played with

use super::seed::seed_index;
use super::{EXTRA, SHORT};
use crate::core::Word;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Errors building a dictionary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DictionaryError {
    #[error("the target word list contains no valid five-letter words")]
    EmptyShortList,
}

/// Immutable set of valid words
///
/// Targets are drawn only from the short list; guesses may be any word
/// from the short or extra list.
#[derive(Debug, Clone)]
pub struct Dictionary {
    short: Vec<Word>,
    words: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from a target list and an extra guess list
    ///
    /// Entries are normalized; invalid ones are skipped with a warning.
    /// The short list keeps its given order, which seeded selection depends on.
    ///
    /// # Errors
    /// Returns `DictionaryError::EmptyShortList` if no short-list entry is a
    /// valid word.
    ///
    /// # Examples
    /// ```
    /// use pbwordle::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["crane", "slate"], ["irate"]).unwrap();
    /// assert!(dictionary.contains(" IRATE "));
    /// assert!(!dictionary.contains("cran"));
    /// ```
    pub fn new<S, E>(short: S, extra: E) -> Result<Self, DictionaryError>
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        let short = words_from_entries(short);
        if short.is_empty() {
            return Err(DictionaryError::EmptyShortList);
        }

        let mut words: FxHashSet<Word> = short.iter().cloned().collect();
        words.extend(words_from_entries(extra));

        log::debug!(
            "dictionary built: {} target words, {} valid words",
            short.len(),
            words.len()
        );

        Ok(Self { short, words })
    }

    /// Dictionary over the word lists compiled into the binary
    ///
    /// # Errors
    /// Only fails if the bundled short list is empty.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::new(SHORT, EXTRA)
    }

    /// Case-insensitive, whitespace-trimmed membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|word| self.words.contains(&word))
    }

    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Words a target can be drawn from, in list order
    #[must_use]
    pub fn short_list(&self) -> &[Word] {
        &self.short
    }

    /// Number of distinct valid words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick a target word
    ///
    /// With a seed the choice is deterministic (see [`seed_index`]),
    /// otherwise it is uniformly random over the short list.
    #[must_use]
    pub fn pick(&self, seed: Option<&str>) -> &Word {
        match seed {
            Some(seed) => &self.short[seed_index(seed, self.short.len())],
            // Never empty: construction rejects an empty short list
            None => self
                .short
                .choose(&mut rand::rng())
                .unwrap_or(&self.short[0]),
        }
    }
}

/// Convert raw entries to words, skipping and logging invalid ones
fn words_from_entries<I>(entries: I) -> Vec<Word>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut skipped = 0usize;
    let words = entries
        .into_iter()
        .filter_map(|entry| match Word::new(entry.as_ref()) {
            Ok(word) => Some(word),
            Err(e) => {
                log::warn!("skipping word list entry {:?}: {e}", entry.as_ref());
                skipped += 1;
                None
            }
        })
        .collect();
    if skipped > 0 {
        log::warn!("skipped {skipped} invalid word list entries");
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{EXTRA_COUNT, SHORT_COUNT};

    #[test]
    fn contains_is_case_insensitive_and_trimmed() {
        let dictionary = Dictionary::new(["apple"], ["plate"]).unwrap();
        assert!(dictionary.contains("apple"));
        assert!(dictionary.contains("APPLE"));
        assert!(dictionary.contains("  Plate\n"));
        assert!(!dictionary.contains("grape"));
        assert!(!dictionary.contains("apples"));
        assert!(!dictionary.contains(""));
    }

    #[test]
    fn union_of_lists_deduplicated() {
        let dictionary = Dictionary::new(["apple", "apple", "crane"], ["crane", "slate"]).unwrap();
        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.short_list().len(), 3);
    }

    #[test]
    fn invalid_entries_are_skipped() {
        let dictionary = Dictionary::new(["apple", "toolong", "ab"], ["12345", "slate"]).unwrap();
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.short_list().len(), 1);
        assert!(!dictionary.contains("12345"));
    }

    #[test]
    fn empty_short_list_is_rejected() {
        let empty: [&str; 0] = [];
        assert_eq!(
            Dictionary::new(empty, ["apple"]).unwrap_err(),
            DictionaryError::EmptyShortList
        );
        assert_eq!(
            Dictionary::new(["nope"], ["apple"]).unwrap_err(),
            DictionaryError::EmptyShortList
        );
    }

    #[test]
    fn seeded_pick_is_deterministic() {
        let dictionary = Dictionary::embedded().unwrap();
        let first = dictionary.pick(Some("hello"));
        let second = dictionary.pick(Some("hello"));
        assert_eq!(first, second);
    }

    #[test]
    fn seeded_pick_uses_list_order() {
        let dictionary = Dictionary::embedded().unwrap();
        assert_eq!(dictionary.pick(Some("hello")).text(), "bound");
        assert_eq!(dictionary.pick(Some("qwert")).text(), "child");
        assert_eq!(dictionary.pick(Some("2024-01-01")).text(), "twice");
    }

    #[test]
    fn targets_come_from_short_list_only() {
        let dictionary = Dictionary::new(["apple"], ["plate", "crane"]).unwrap();
        for seed in ["a", "b", "c", "d"] {
            assert_eq!(dictionary.pick(Some(seed)).text(), "apple");
        }
        for _ in 0..10 {
            assert_eq!(dictionary.pick(None).text(), "apple");
        }
    }

    #[test]
    fn unseeded_pick_is_a_short_word() {
        let dictionary = Dictionary::embedded().unwrap();
        let word = dictionary.pick(None);
        assert!(dictionary.short_list().contains(word));
    }

    #[test]
    fn embedded_dictionary_covers_both_lists() {
        let dictionary = Dictionary::embedded().unwrap();
        assert_eq!(dictionary.short_list().len(), SHORT_COUNT);
        assert!(dictionary.len() <= SHORT_COUNT + EXTRA_COUNT);
        assert!(dictionary.contains("apple"));
        assert!(dictionary.contains("plums"));
        assert!(!dictionary.contains("aaaaa"));
    }
}
