//! Rejection reasons for submitted words
//!
//! Each variant carries the title and message the shell shows to the player.

use std::fmt;

/// Why a candidate word was not accepted
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The word was already accepted this round
    AlreadyUsed,
    /// The word cannot be spelled from the root's letters
    NotPossible { root: String },
    /// The dictionary does not know the word
    NotRecognized,
    /// The word is shorter than three letters or is the root word itself
    TooShort,
}

impl Rejection {
    /// Short heading for the alert
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::AlreadyUsed => "word used already",
            Self::NotPossible { .. } => "thats not possible",
            Self::NotRecognized => "word not recognised",
            Self::TooShort => "word too small",
        }
    }

    /// Body text for the alert
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::AlreadyUsed => "be more original!".to_string(),
            Self::NotPossible { root } => format!("you cant spell that word from '{root}' !"),
            Self::NotRecognized => "you cant just make them up, you know!".to_string(),
            Self::TooShort => "this is not nursery. think of a big word".to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

impl std::error::Error for Rejection {}
