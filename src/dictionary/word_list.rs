//! In-memory dictionary backed by a word list

use super::{DEFAULT_LANGUAGE, SpellingOracle};
use crate::wordlists::DICTIONARY;
use rustc_hash::FxHashSet;

/// Spelling oracle that knows a fixed set of words in one language
///
/// Lookups for any other language tag report the word as unknown.
#[derive(Debug, Clone)]
pub struct WordListOracle {
    language: String,
    words: FxHashSet<String>,
}

impl WordListOracle {
    /// Create an oracle for `language` from an iterator of words
    ///
    /// Words are trimmed and lower-cased; blank entries are skipped.
    pub fn new<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|word| {
                let trimmed = word.as_ref().trim();
                (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
            })
            .collect();

        Self {
            language: language.into(),
            words,
        }
    }

    /// Create an English oracle from an iterator of words
    pub fn english<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(DEFAULT_LANGUAGE, words)
    }

    /// Create an English oracle from a string slice
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{SpellingOracle, WordListOracle};
    ///
    /// let oracle = WordListOracle::from_slice(&["silk", "worm"]);
    /// assert!(oracle.is_real_word("silk", "en"));
    /// assert!(!oracle.is_real_word("sworm", "en"));
    /// assert!(!oracle.is_real_word("silk", "fr"));
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        Self::english(slice.iter().copied())
    }

    /// English oracle over the dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_slice(DICTIONARY)
    }

    /// Language tag this oracle answers for
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of known words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the oracle knows no words at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the known words in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl SpellingOracle for WordListOracle {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        language.eq_ignore_ascii_case(&self.language) && self.words.contains(word)
    }
}
