//! Word validation pipeline
//!
//! Decides whether a normalized candidate is acceptable for a root word and the words
//! already used this round. Checks run in a fixed order and the first failure wins:
//!
//! 1. Emptiness: an empty candidate is a no-op, not an error
//! 2. Originality: the word must not be used already
//! 3. Possibility: the word must be spellable from the root's letters
//! 4. Realness: the spelling oracle must recognise the word
//! 5. Triviality: the word must have at least three letters and differ from the root
//!
//! The validator holds no session state and has no side effects.

use crate::core::{LetterPool, MIN_WORD_LENGTH, Rejection, letter_count};
use crate::dictionary::{DEFAULT_LANGUAGE, SpellingOracle};

/// A single step of the validation pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Originality,
    Possibility,
    Realness,
    Triviality,
}

impl Check {
    /// Checks in the order they run
    pub const PIPELINE: [Self; 4] = [
        Self::Originality,
        Self::Possibility,
        Self::Realness,
        Self::Triviality,
    ];

    /// Run this check against `attempt`
    ///
    /// # Errors
    ///
    /// Returns the rejection this check is responsible for if the candidate fails it.
    pub fn apply<O: SpellingOracle>(
        self,
        attempt: &Attempt<'_>,
        oracle: &O,
        language: &str,
    ) -> Result<(), Rejection> {
        let passed = match self {
            Self::Originality => !attempt.used.iter().any(|used| used == attempt.candidate),
            Self::Possibility => LetterPool::new(attempt.root).can_spell(attempt.candidate),
            Self::Realness => oracle.is_real_word(attempt.candidate, language),
            Self::Triviality => {
                attempt.candidate != attempt.root
                    && letter_count(attempt.candidate) >= MIN_WORD_LENGTH
            }
        };

        if passed {
            Ok(())
        } else {
            Err(self.rejection(attempt.root))
        }
    }

    fn rejection(self, root: &str) -> Rejection {
        match self {
            Self::Originality => Rejection::AlreadyUsed,
            Self::Possibility => Rejection::NotPossible {
                root: root.to_string(),
            },
            Self::Realness => Rejection::NotRecognized,
            Self::Triviality => Rejection::TooShort,
        }
    }
}

/// The inputs a check looks at
#[derive(Debug, Clone, Copy)]
pub struct Attempt<'a> {
    pub candidate: &'a str,
    pub root: &'a str,
    pub used: &'a [String],
}

/// Stateless validator for candidate words
///
/// Owns (or borrows, since `&O` is also an oracle) the spelling oracle and the language
/// tag passed to it.
#[derive(Debug, Clone)]
pub struct WordValidator<O> {
    oracle: O,
    language: String,
}

impl<O: SpellingOracle> WordValidator<O> {
    /// Create a validator that asks `oracle` about English words
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Use a different language tag for dictionary lookups
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Language tag passed to the oracle
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The spelling oracle
    pub const fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Validate a normalized candidate
    ///
    /// Returns `Ok(None)` for an empty candidate, `Ok(Some(word))` for an acceptable
    /// one.
    ///
    /// # Errors
    ///
    /// Returns the `Rejection` of the first check the candidate fails.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Rejection;
    /// use word_scramble::dictionary::WordListOracle;
    /// use word_scramble::validator::WordValidator;
    ///
    /// let validator = WordValidator::new(WordListOracle::from_slice(&["silk", "worm"]));
    /// let used = vec!["worm".to_string()];
    ///
    /// assert_eq!(validator.validate("", "silkworm", &used), Ok(None));
    /// assert_eq!(
    ///     validator.validate("silk", "silkworm", &used),
    ///     Ok(Some("silk".to_string()))
    /// );
    /// assert_eq!(
    ///     validator.validate("worm", "silkworm", &used),
    ///     Err(Rejection::AlreadyUsed)
    /// );
    /// ```
    pub fn validate(
        &self,
        candidate: &str,
        root: &str,
        used: &[String],
    ) -> Result<Option<String>, Rejection> {
        if candidate.is_empty() {
            return Ok(None);
        }

        let attempt = Attempt {
            candidate,
            root,
            used,
        };

        for check in Check::PIPELINE {
            check.apply(&attempt, &self.oracle, &self.language)?;
        }

        Ok(Some(candidate.to_string()))
    }

    /// Whether `candidate` would be accepted
    pub fn accepts(&self, candidate: &str, root: &str, used: &[String]) -> bool {
        matches!(self.validate(candidate, root, used), Ok(Some(_)))
    }
}
