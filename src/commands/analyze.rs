//! Root word analysis command
//!
//! Finds every dictionary word the validator would accept in a fresh round for a given
//! root, and the best score a round can reach.

use crate::core::{letter_count, normalize};
use crate::dictionary::SpellingOracle;
use crate::validator::WordValidator;
use rayon::prelude::*;

/// Result of analyzing a root word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub root: String,
    /// Playable words, longest first, then alphabetical
    pub words: Vec<String>,
    pub total_words: usize,
    /// Score for finding every playable word
    pub max_score: usize,
}

impl AnalysisResult {
    /// Longest playable word, if any
    #[must_use]
    pub fn longest(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    /// Number of playable words with exactly `length` letters
    #[must_use]
    pub fn count_with_length(&self, length: usize) -> usize {
        self.words
            .iter()
            .filter(|word| letter_count(word) == length)
            .count()
    }
}

/// Analyze which of `candidates` are playable from `root`
///
/// Each candidate is run through the full validation pipeline with no words used yet.
///
/// # Errors
///
/// Returns an error if the root is empty after normalization.
///
/// # Examples
/// ```
/// use word_scramble::commands::analyze_root;
/// use word_scramble::dictionary::WordListOracle;
/// use word_scramble::validator::WordValidator;
///
/// let words = ["silk", "worm", "milk", "zebra", "mi"];
/// let validator = WordValidator::new(WordListOracle::from_slice(&words));
///
/// let result = analyze_root("silkworm", &validator, &words).unwrap();
/// assert_eq!(result.words, vec!["milk", "silk", "worm"]);
/// assert_eq!(result.max_score, 12);
/// ```
pub fn analyze_root<O: SpellingOracle + Sync>(
    root: &str,
    validator: &WordValidator<O>,
    candidates: &[&str],
) -> Result<AnalysisResult, String> {
    let root = normalize(root);
    if root.is_empty() {
        return Err("Root word must not be empty".to_string());
    }

    let mut words: Vec<String> = candidates
        .par_iter()
        .filter_map(|&candidate| {
            validator
                .validate(&normalize(candidate), &root, &[])
                .ok()
                .flatten()
        })
        .collect();

    words.sort_unstable_by(|a, b| {
        letter_count(b)
            .cmp(&letter_count(a))
            .then_with(|| a.cmp(b))
    });
    words.dedup();

    let max_score = words.iter().map(|word| letter_count(word)).sum();

    Ok(AnalysisResult {
        root,
        total_words: words.len(),
        words,
        max_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListOracle;
    use crate::wordlists::DICTIONARY;

    const WORDS: &[&str] = &[
        "silk", "worm", "worms", "milk", "mi", "silks", "silkworm", "zebra", "owl", "sworn",
    ];

    fn validator() -> WordValidator<WordListOracle> {
        WordValidator::new(WordListOracle::from_slice(WORDS))
    }

    #[test]
    fn finds_playable_words() {
        let result = analyze_root("silkworm", &validator(), WORDS).unwrap();
        assert_eq!(result.root, "silkworm");
        assert_eq!(result.words, vec!["worms", "milk", "silk", "worm", "owl"]);
        assert_eq!(result.total_words, 5);
        assert_eq!(result.max_score, 5 + 4 + 4 + 4 + 3);
    }

    #[test]
    fn excludes_root_short_and_impossible_words() {
        let result = analyze_root("silkworm", &validator(), WORDS).unwrap();
        for excluded in ["silkworm", "mi", "silks", "zebra", "sworn"] {
            assert!(!result.words.iter().any(|w| w == excluded), "{excluded}");
        }
    }

    #[test]
    fn candidates_must_be_known_to_the_oracle() {
        let candidates = ["silk", "sworm"];
        let result = analyze_root("silkworm", &validator(), &candidates).unwrap();
        assert_eq!(result.words, vec!["silk"]);
    }

    #[test]
    fn duplicates_are_counted_once() {
        let candidates = ["silk", "silk", "SILK "];
        let result = analyze_root("silkworm", &validator(), &candidates).unwrap();
        assert_eq!(result.words, vec!["silk"]);
        assert_eq!(result.max_score, 4);
    }

    #[test]
    fn root_is_normalized() {
        let result = analyze_root("  SILKWORM ", &validator(), WORDS).unwrap();
        assert_eq!(result.root, "silkworm");
        assert_eq!(result.total_words, 5);
    }

    #[test]
    fn empty_root_is_an_error() {
        assert!(analyze_root("   ", &validator(), WORDS).is_err());
    }

    #[test]
    fn nothing_playable() {
        let result = analyze_root("xyz", &validator(), WORDS).unwrap();
        assert!(result.words.is_empty());
        assert_eq!(result.max_score, 0);
        assert_eq!(result.longest(), None);
    }

    #[test]
    fn length_helpers() {
        let result = analyze_root("silkworm", &validator(), WORDS).unwrap();
        assert_eq!(result.longest(), Some("worms"));
        assert_eq!(result.count_with_length(4), 3);
        assert_eq!(result.count_with_length(3), 1);
        assert_eq!(result.count_with_length(8), 0);
    }

    #[test]
    fn embedded_dictionary_silkworm() {
        let validator = WordValidator::new(WordListOracle::embedded());
        let result = analyze_root("silkworm", &validator, DICTIONARY).unwrap();

        assert_eq!(result.total_words, 49);
        for word in ["silk", "works", "rows", "milks", "ilk", "wok"] {
            assert!(result.words.iter().any(|w| w == word), "missing '{word}'");
        }
        assert!(result.words.iter().all(|w| letter_count(w) >= 3));
    }
}
