//! Root word selection
//!
//! A round starts from a root word drawn at random from a pool loaded from a word list.

use crate::wordlists::START_WORDS;
use crate::wordlists::loader::{load_from_file, words_from_slice};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::io;
use std::path::Path;

/// Root word used when the pool has nothing to offer
pub const FALLBACK_ROOT: &str = "silkworm";

/// Supplies root words for new rounds
pub trait RootWordProvider {
    /// Pick a root word, or `None` if there is nothing to pick from
    fn pick_root(&self) -> Option<String>;
}

/// Pool of root words with uniform random selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    /// Create a pool from already-loaded words
    ///
    /// Entries are trimmed and lower-cased; blank entries are dropped.
    pub fn from_words<I, S>(words: I) -> Self
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

        Self { words }
    }

    /// Create a pool from a string slice
    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        Self::from_words(words_from_slice(slice))
    }

    /// Pool over the root words compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_slice(START_WORDS)
    }

    /// Load a pool from a newline-delimited word list
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file is missing or unreadable.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        load_from_file(path).map(Self::from_words)
    }

    /// All words in the pool
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words in the pool
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the pool is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick a word uniformly at random using `rng`
    pub fn pick_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }
}

impl RootWordProvider for WordPool {
    fn pick_root(&self) -> Option<String> {
        self.pick_with(&mut rand::rng()).map(ToString::to_string)
    }
}

impl<P: RootWordProvider + ?Sized> RootWordProvider for &P {
    fn pick_root(&self) -> Option<String> {
        (**self).pick_root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::START_WORDS_COUNT;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn from_words_normalizes() {
        let pool = WordPool::from_words(["  Silkworm ", "", "ELEPHANT", "   "]);
        assert_eq!(pool.words(), &["silkworm", "elephant"]);
    }

    #[test]
    fn empty_pool_picks_nothing() {
        let pool = WordPool::default();
        assert!(pool.is_empty());
        assert_eq!(pool.pick_root(), None);
    }

    #[test]
    fn single_word_pool_always_picks_it() {
        let pool = WordPool::from_slice(&["silkworm"]);
        for _ in 0..10 {
            assert_eq!(pool.pick_root().as_deref(), Some("silkworm"));
        }
    }

    #[test]
    fn pick_comes_from_pool() {
        let pool = WordPool::from_slice(&["silkworm", "elephant", "triangle"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let picked = pool.pick_with(&mut rng).unwrap();
            assert!(pool.words().iter().any(|w| w == picked));
        }
    }

    #[test]
    fn seeded_picks_are_deterministic() {
        let pool = WordPool::embedded();
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);
        for _ in 0..5 {
            assert_eq!(pool.pick_with(&mut first), pool.pick_with(&mut second));
        }
    }

    #[test]
    fn pick_covers_the_pool() {
        let pool = WordPool::from_slice(&["alpha", "bravo", "charlie"]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(pool.pick_with(&mut rng).unwrap());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn embedded_pool_has_every_start_word() {
        let pool = WordPool::embedded();
        assert_eq!(pool.len(), START_WORDS_COUNT);
        assert!(pool.words().iter().any(|w| w == FALLBACK_ROOT));
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = WordPool::from_file("does/not/exist/start.txt");
        assert!(result.is_err());
    }

    #[test]
    fn references_are_providers() {
        fn pick<P: RootWordProvider>(provider: P) -> Option<String> {
            provider.pick_root()
        }

        let pool = WordPool::from_slice(&["silkworm"]);
        assert_eq!(pick(&pool).as_deref(), Some("silkworm"));
    }
}
