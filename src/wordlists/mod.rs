//! Word lists and the dictionary built from them
//!
//! Provides embedded word lists compiled into the binary, loading of custom
//! lists from disk, and seeded target selection.

mod dictionary;
mod embedded;
pub mod loader;
mod seed;

pub use dictionary::{Dictionary, DictionaryError};
pub use embedded::{EXTRA, EXTRA_COUNT, SHORT, SHORT_COUNT};
pub use seed::{random_seed, seed_index};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_count_matches_const() {
        assert_eq!(SHORT.len(), SHORT_COUNT);
    }

    #[test]
    fn extra_count_matches_const() {
        assert_eq!(EXTRA.len(), EXTRA_COUNT);
    }

    #[test]
    fn all_entries_are_valid_words() {
        for &word in SHORT.iter().chain(EXTRA) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn short_list_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = SHORT.iter().collect();
        assert_eq!(unique.len(), SHORT.len());
    }
}
