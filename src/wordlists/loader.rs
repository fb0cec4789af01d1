//! Word list loading utilities
//!
//! Reads newline-separated word lists from disk for custom dictionaries.

use std::fs;
use std::io;
use std::path::Path;

/// Load the raw entries of a word list file
///
/// Blank lines are skipped and surrounding whitespace is trimmed.
/// Entries are not validated here; `Dictionary::new` does that.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use pbwordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/wordlist_short.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_word_list(&content);
    log::debug!("loaded {} entries from {}", words.len(), path.display());
    Ok(words)
}

fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
