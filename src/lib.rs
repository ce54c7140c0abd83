//! Word Scramble
//!
//! A word game: make as many words as possible from the letters of a random root word.
//! Each accepted word scores one point per letter.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::Rejection;
//! use word_scramble::dictionary::WordListOracle;
//! use word_scramble::session::{GameSession, WordPool};
//! use word_scramble::validator::WordValidator;
//!
//! // Any `SpellingOracle` works; here a small in-memory dictionary
//! let oracle = WordListOracle::from_slice(&["silk", "worm", "milk"]);
//! let mut session = GameSession::new(WordValidator::new(oracle));
//!
//! session.start_round(&WordPool::from_slice(&["silkworm"]));
//!
//! let accepted = session.submit_word("Silk").unwrap().unwrap();
//! assert_eq!(accepted.points, 4);
//! assert_eq!(session.submit_word("silk"), Err(Rejection::AlreadyUsed));
//! assert_eq!(session.submit_word("   "), Ok(None));
//! ```

// Core domain types
pub mod core;

// Spelling oracles
pub mod dictionary;

// Word validation pipeline
pub mod validator;

// Round lifecycle and scoring
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
