//! Core domain types for the word game
//!
//! Pure helpers with no I/O: input normalization, letter multisets and the rejection
//! reasons shown to the player.

mod rejection;
mod word;

pub use rejection::Rejection;
pub use word::{LetterPool, MIN_WORD_LENGTH, letter_count, normalize};
