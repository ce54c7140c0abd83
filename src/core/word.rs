//! Candidate normalization and letter multisets
//!
//! A `LetterPool` stores the letters of a root word with their multiplicities so that
//! candidates can be checked for spellability.

use rustc_hash::FxHashMap;
use std::fmt;

/// Minimum number of letters an accepted word must have
pub const MIN_WORD_LENGTH: usize = 3;

/// Normalize raw player input
///
/// Lower-cases the input, then trims leading and trailing whitespace and newlines.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Silk\n"), "silk");
/// assert_eq!(normalize(" \t "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Number of letters in a word
///
/// Counts characters rather than bytes; this is the unit for both scoring and the
/// minimum length rule.
#[inline]
#[must_use]
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}

/// Multiset of the letters in a word
///
/// Each `take` consumes one occurrence of a letter, so repeated letters in a candidate
/// need matching repeats in the pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
    remaining: usize,
}

impl LetterPool {
    /// Build a pool from every character of `word`
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }

        Self {
            counts,
            remaining: letter_count(word),
        }
    }

    /// Consume one occurrence of `letter`
    ///
    /// Returns `false` (and leaves the pool untouched) if no occurrence remains.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                self.remaining -= 1;
                true
            }
            _ => false,
        }
    }

    /// Occurrences of `letter` still available
    #[inline]
    #[must_use]
    pub fn available(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total letters still available
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    /// Check whether `candidate` can be spelled from this pool
    ///
    /// Works on a copy: one occurrence is consumed per candidate letter and the check
    /// fails on the first letter with nothing left. The pool itself is not modified.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("ababab");
    /// assert!(pool.can_spell("aabb"));
    /// assert!(!pool.can_spell("aaaab"));
    /// ```
    #[must_use]
    pub fn can_spell(&self, candidate: &str) -> bool {
        let mut working = self.clone();
        candidate.chars().all(|letter| working.take(letter))
    }
}

impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters: Vec<(char, usize)> = self
            .counts
            .iter()
            .filter(|&(_, &count)| count > 0)
            .map(|(&letter, &count)| (letter, count))
            .collect();
        letters.sort_unstable();

        for (letter, count) in letters {
            for _ in 0..count {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize("SILK"), "silk");
        assert_eq!(normalize("  SiLk  "), "silk");
        assert_eq!(normalize("worm\n"), "worm");
        assert_eq!(normalize("\t\r\nmilk \n"), "milk");
    }

    #[test]
    fn normalize_whitespace_only_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("\n\t"), "");
    }

    #[test]
    fn normalize_keeps_inner_whitespace() {
        assert_eq!(normalize(" ice cream "), "ice cream");
    }

    #[test]
    fn letter_count_counts_chars_not_bytes() {
        assert_eq!(letter_count("silk"), 4);
        assert_eq!(letter_count("café"), 4);
        assert_eq!(letter_count(""), 0);
    }

    #[test]
    fn pool_counts_duplicates() {
        let pool = LetterPool::new("ababab");
        assert_eq!(pool.available('a'), 3);
        assert_eq!(pool.available('b'), 3);
        assert_eq!(pool.available('z'), 0);
        assert_eq!(pool.remaining(), 6);
    }

    #[test]
    fn take_consumes_one_occurrence() {
        let mut pool = LetterPool::new("silkworm");
        assert!(pool.take('s'));
        assert!(!pool.take('s'));
        assert_eq!(pool.available('s'), 0);
        assert_eq!(pool.remaining(), 7);
    }

    #[test]
    fn take_missing_letter_leaves_pool_untouched() {
        let mut pool = LetterPool::new("silkworm");
        assert!(!pool.take('z'));
        assert_eq!(pool.remaining(), 8);
    }

    #[test]
    fn can_spell_respects_multiplicity() {
        let pool = LetterPool::new("ababab");
        assert!(pool.can_spell("aabb"));
        assert!(pool.can_spell("aaabbb"));
        assert!(!pool.can_spell("aaaa"));
        assert!(!pool.can_spell("abc"));
    }

    #[test]
    fn can_spell_ignores_order() {
        let pool = LetterPool::new("silkworm");
        assert!(pool.can_spell("worms"));
        assert!(pool.can_spell("milk"));
        assert!(!pool.can_spell("silks")); // Only one 's'
    }

    #[test]
    fn can_spell_does_not_consume() {
        let pool = LetterPool::new("silkworm");
        assert!(pool.can_spell("silk"));
        assert!(pool.can_spell("silk"));
        assert_eq!(pool.remaining(), 8);
    }

    #[test]
    fn empty_candidate_is_always_spellable() {
        assert!(LetterPool::new("abc").can_spell(""));
        assert!(LetterPool::new("").can_spell(""));
    }

    #[test]
    fn display_lists_sorted_letters() {
        let pool = LetterPool::new("banana");
        assert_eq!(format!("{pool}"), "aaabnn");
    }
}
