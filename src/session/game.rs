//! Game session state machine
//!
//! A session starts `Idle` and enters a round on the first `start_round`. Each later
//! `start_round` replaces the round wholesale; there is no partial-round state.

use super::provider::{FALLBACK_ROOT, RootWordProvider};
use crate::core::{Rejection, letter_count, normalize};
use crate::dictionary::SpellingOracle;
use crate::validator::WordValidator;
use tracing::{debug, warn};

/// State of the current round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    root: String,
    used_words: Vec<String>,
    score: usize,
}

impl Round {
    fn new(root: String) -> Self {
        Self {
            root,
            used_words: Vec::new(),
            score: 0,
        }
    }

    /// The root word candidates are spelled from
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Sum of the lengths of all accepted words
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }
}

/// A word the session accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedWord {
    /// The normalized word
    pub word: String,
    /// Points awarded for it
    pub points: usize,
    /// Round score after adding the points
    pub score: usize,
}

/// Session lifecycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No round has started yet
    #[default]
    Idle,
    /// A round is being played
    InRound(Round),
}

/// One player's game: the current round plus the validator used to judge words
///
/// Not designed for concurrent use; callers with several input sources must
/// synchronize access themselves.
#[derive(Debug)]
pub struct GameSession<O> {
    validator: WordValidator<O>,
    state: SessionState,
}

impl<O: SpellingOracle> GameSession<O> {
    /// Create an idle session
    pub const fn new(validator: WordValidator<O>) -> Self {
        Self {
            validator,
            state: SessionState::Idle,
        }
    }

    /// Start a new round with a root word from `provider`
    ///
    /// Falls back to `"silkworm"` if the provider has nothing to offer or offers a
    /// blank word. Any previous round is discarded: used words are cleared and the
    /// score is reset to zero.
    ///
    /// Returns the new root word.
    pub fn start_round<P: RootWordProvider + ?Sized>(&mut self, provider: &P) -> &str {
        let root = match provider.pick_root().map(|picked| normalize(&picked)) {
            Some(root) if !root.is_empty() => root,
            _ => {
                warn!(fallback = FALLBACK_ROOT, "no usable root word, using fallback");
                FALLBACK_ROOT.to_string()
            }
        };
        debug!(root = %root, "starting round");

        self.state = SessionState::InRound(Round::new(root));
        self.root_word().unwrap_or(FALLBACK_ROOT)
    }

    /// Submit raw player input
    ///
    /// The input is lower-cased and trimmed, then validated against the current root
    /// word and used words. On acceptance the word goes to the front of the used words
    /// and its length is added to the score.
    ///
    /// Returns `Ok(None)` if the input is empty after normalization; nothing changes.
    ///
    /// # Errors
    ///
    /// Returns the `Rejection` explaining why the word was refused. The session is left
    /// unchanged.
    ///
    /// # Panics
    ///
    /// Panics if no round has been started.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::WordListOracle;
    /// use word_scramble::session::{GameSession, WordPool};
    /// use word_scramble::validator::WordValidator;
    ///
    /// let oracle = WordListOracle::from_slice(&["silk", "worm"]);
    /// let mut session = GameSession::new(WordValidator::new(oracle));
    /// session.start_round(&WordPool::from_slice(&["silkworm"]));
    ///
    /// let accepted = session.submit_word(" Silk ").unwrap().unwrap();
    /// assert_eq!(accepted.word, "silk");
    /// assert_eq!(session.score(), 4);
    /// assert!(session.submit_word("silk").is_err());
    /// ```
    pub fn submit_word(&mut self, raw: &str) -> Result<Option<AcceptedWord>, Rejection> {
        let SessionState::InRound(round) = &mut self.state else {
            panic!("submit_word called before start_round");
        };

        let candidate = normalize(raw);
        let verdict = self
            .validator
            .validate(&candidate, &round.root, &round.used_words);

        let word = match verdict {
            Ok(Some(word)) => word,
            Ok(None) => return Ok(None),
            Err(rejection) => {
                debug!(word = %candidate, reason = rejection.title(), "word rejected");
                return Err(rejection);
            }
        };

        let points = letter_count(&word);
        round.score += points;
        round.used_words.insert(0, word.clone());
        debug!(word = %word, points, score = round.score, "word accepted");

        Ok(Some(AcceptedWord {
            word,
            points,
            score: round.score,
        }))
    }

    /// Current lifecycle state
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// The current round, if one has started
    pub const fn round(&self) -> Option<&Round> {
        match &self.state {
            SessionState::InRound(round) => Some(round),
            SessionState::Idle => None,
        }
    }

    /// Whether a round has started
    pub const fn is_in_round(&self) -> bool {
        matches!(self.state, SessionState::InRound(_))
    }

    /// Root word of the current round
    pub fn root_word(&self) -> Option<&str> {
        self.round().map(Round::root)
    }

    /// Score of the current round (0 while idle)
    pub fn score(&self) -> usize {
        self.round().map_or(0, Round::score)
    }

    /// Accepted words of the current round, most recent first
    pub fn used_words(&self) -> &[String] {
        self.round().map(Round::used_words).unwrap_or_default()
    }

    /// The validator judging submissions
    pub const fn validator(&self) -> &WordValidator<O> {
        &self.validator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListOracle;
    use crate::session::WordPool;

    /// Provider that always offers the same root
    struct FixedRoot(&'static str);

    impl RootWordProvider for FixedRoot {
        fn pick_root(&self) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    fn session() -> GameSession<WordListOracle> {
        let oracle = WordListOracle::from_slice(&[
            "silk", "worm", "worms", "milk", "mils", "mi", "i", "silkworm", "silks", "owl", "slow",
            "rim", "aabb",
        ]);
        GameSession::new(WordValidator::new(oracle))
    }

    fn in_round(root: &'static str) -> GameSession<WordListOracle> {
        let mut session = session();
        session.start_round(&FixedRoot(root));
        session
    }

    #[test]
    fn new_session_is_idle() {
        let session = session();
        assert_eq!(session.state(), &SessionState::Idle);
        assert!(!session.is_in_round());
        assert_eq!(session.root_word(), None);
        assert_eq!(session.score(), 0);
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn start_round_enters_round() {
        let mut session = session();
        let root = session.start_round(&FixedRoot("silkworm")).to_string();
        assert_eq!(root, "silkworm");
        assert!(session.is_in_round());
        assert_eq!(session.root_word(), Some("silkworm"));
        assert_eq!(session.score(), 0);
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn start_round_normalizes_root() {
        let mut session = session();
        session.start_round(&FixedRoot("  SilkWorm\n"));
        assert_eq!(session.root_word(), Some("silkworm"));
    }

    #[test]
    fn empty_pool_falls_back_to_silkworm() {
        let mut session = session();
        let root = session.start_round(&WordPool::default()).to_string();
        assert_eq!(root, FALLBACK_ROOT);
        assert_eq!(session.root_word(), Some("silkworm"));
    }

    #[test]
    fn blank_root_falls_back_to_silkworm() {
        let mut session = session();
        let root = session.start_round(&FixedRoot("   ")).to_string();
        assert_eq!(root, FALLBACK_ROOT);
        assert_eq!(
            session.submit_word("silk").unwrap().map(|accepted| accepted.points),
            Some(4)
        );
    }

    #[test]
    fn start_round_uses_pool() {
        let mut session = session();
        let pool = WordPool::from_slice(&["elephant", "triangle"]);
        let root = session.start_round(&pool).to_string();
        assert!(root == "elephant" || root == "triangle");
    }

    #[test]
    fn blank_input_is_noop() {
        let mut session = in_round("silkworm");
        session.submit_word("silk").unwrap();

        for raw in ["", "   ", "\n", "\t \r\n"] {
            assert_eq!(session.submit_word(raw), Ok(None));
        }
        assert_eq!(session.score(), 4);
        assert_eq!(session.used_words(), &["silk"]);
    }

    #[test]
    fn accepted_word_scores_its_length() {
        let mut session = in_round("silkworm");

        let accepted = session.submit_word("silk").unwrap().unwrap();
        assert_eq!(
            accepted,
            AcceptedWord {
                word: "silk".to_string(),
                points: 4,
                score: 4,
            }
        );

        let accepted = session.submit_word("worms").unwrap().unwrap();
        assert_eq!(accepted.points, 5);
        assert_eq!(accepted.score, 9);
        assert_eq!(session.score(), 9);
    }

    #[test]
    fn accepted_words_are_most_recent_first() {
        let mut session = in_round("silkworm");
        session.submit_word("silk").unwrap();
        session.submit_word("owl").unwrap();
        session.submit_word("slow").unwrap();
        assert_eq!(session.used_words(), &["slow", "owl", "silk"]);
    }

    #[test]
    fn input_is_normalized_before_validation() {
        let mut session = in_round("silkworm");
        let accepted = session.submit_word("  MILK\n").unwrap().unwrap();
        assert_eq!(accepted.word, "milk");
        assert_eq!(session.used_words(), &["milk"]);
    }

    #[test]
    fn resubmitting_any_variant_is_already_used() {
        let mut session = in_round("silkworm");
        session.submit_word("silk").unwrap();

        for raw in ["silk", "SILK", " Silk ", "silk\n"] {
            assert_eq!(session.submit_word(raw), Err(Rejection::AlreadyUsed));
        }
        assert_eq!(session.score(), 4);
    }

    #[test]
    fn rejection_is_idempotent_and_leaves_state() {
        let mut session = in_round("silkworm");
        session.submit_word("milk").unwrap();
        let before = session.round().cloned();

        for raw in ["silks", "sworm", "mi", "silkworm"] {
            let first = session.submit_word(raw);
            let second = session.submit_word(raw);
            assert!(first.is_err());
            assert_eq!(first, second);
            assert_eq!(session.round().cloned(), before);
        }
    }

    #[test]
    fn silkworm_scenario() {
        let mut session = in_round("silkworm");

        let accepted = session.submit_word("silk").unwrap().unwrap();
        assert_eq!(accepted.word, "silk");
        assert_eq!(session.score(), 4);
        assert_eq!(session.used_words(), &["silk"]);

        assert_eq!(session.submit_word("silk"), Err(Rejection::AlreadyUsed));
        assert_eq!(session.score(), 4);

        assert_eq!(
            session.submit_word("silks"),
            Err(Rejection::NotPossible {
                root: "silkworm".to_string()
            })
        );
        // Every letter of "sworm" is in the root, but it is not a word
        assert_eq!(session.submit_word("sworm"), Err(Rejection::NotRecognized));
        assert_eq!(session.submit_word("mi"), Err(Rejection::TooShort));
        assert_eq!(session.submit_word("I"), Err(Rejection::TooShort));
        assert_eq!(session.submit_word("silkworm"), Err(Rejection::TooShort));

        assert_eq!(session.score(), 4);
        assert_eq!(session.used_words(), &["silk"]);
    }

    #[test]
    fn multiset_law_through_session() {
        let mut session = in_round("ababab");
        assert!(session.submit_word("aabb").unwrap().is_some());
        assert_eq!(
            session.submit_word("aaab"),
            Err(Rejection::NotPossible {
                root: "ababab".to_string()
            })
        );
    }

    #[test]
    fn start_round_resets_score_and_history() {
        let mut session = in_round("silkworm");
        session.submit_word("silk").unwrap();
        session.submit_word("worm").unwrap();
        assert_eq!(session.score(), 8);

        session.start_round(&FixedRoot("silkworm"));
        assert_eq!(session.score(), 0);
        assert!(session.used_words().is_empty());

        // The previous round's words are playable again
        assert!(session.submit_word("silk").unwrap().is_some());

        session.start_round(&FixedRoot("elephant"));
        assert_eq!(session.score(), 0);
        assert!(session.used_words().is_empty());
        assert_eq!(session.root_word(), Some("elephant"));
    }

    #[test]
    #[should_panic(expected = "submit_word called before start_round")]
    fn submit_while_idle_panics() {
        let mut session = session();
        let _ = session.submit_word("silk");
    }
}
