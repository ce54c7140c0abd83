//! Word list loading utilities
//!
//! Reads newline-delimited word lists from disk or converts embedded constants.

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Load words from a newline-delimited file
///
/// Lines are trimmed and lower-cased; blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file is missing or cannot be read.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let words = parse_word_list(&content);
    debug!(path = %path.display(), count = words.len(), "loaded word list");

    Ok(words)
}

/// Parse the contents of a word list
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("Silkworm\n\n  elephant \r\n");
/// assert_eq!(words, vec!["silkworm", "elephant"]);
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect()
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
