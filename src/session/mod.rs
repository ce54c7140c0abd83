//! Round lifecycle and scoring
//!
//! `GameSession` owns the current round (root word, used words, score) and routes
//! submissions through the `WordValidator`. Root words come from a `RootWordProvider`.

mod game;
mod provider;

pub use game::{AcceptedWord, GameSession, Round, SessionState};
pub use provider::{FALLBACK_ROOT, RootWordProvider, WordPool};
