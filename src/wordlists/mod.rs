//! Word lists for the game
//!
//! Provides the root words and the dictionary compiled into the binary, plus loaders for
//! word lists on disk.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};
