//! Spelling oracles
//!
//! The validator never decides on its own whether a word is real; it asks an injected
//! `SpellingOracle`. The crate ships `WordListOracle`, an in-memory word set.

mod word_list;

pub use word_list::WordListOracle;

/// Language tag used when none is configured
pub const DEFAULT_LANGUAGE: &str = "en";

/// Answers whether a word is a recognised dictionary word
pub trait SpellingOracle {
    /// Check `word` (already lower-cased) against the dictionary for `language`
    fn is_real_word(&self, word: &str, language: &str) -> bool;
}

impl<O: SpellingOracle + ?Sized> SpellingOracle for &O {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        (**self).is_real_word(word, language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Everything;

    impl SpellingOracle for Everything {
        fn is_real_word(&self, _word: &str, _language: &str) -> bool {
            true
        }
    }

    #[test]
    fn references_are_oracles() {
        fn check<O: SpellingOracle>(oracle: O) -> bool {
            oracle.is_real_word("anything", DEFAULT_LANGUAGE)
        }

        let oracle = Everything;
        assert!(check(&oracle));
        assert!(check(&&oracle));
    }

    #[test]
    fn trait_objects_are_oracles() {
        let oracle: &dyn SpellingOracle = &Everything;
        assert!(oracle.is_real_word("word", "en"));
    }
}
