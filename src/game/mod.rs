//! Game engine: secret word sources and the round state machine
//!
//! A round is Active until the secret is guessed or the attempt limit is
//! reached, then Ended until `reset` draws a new secret word.

mod session;
mod source;

pub use session::{
    DEFAULT_ATTEMPT_LIMIT, GameError, GameSession, HistoryEntry, Outcome, RejectReason,
    RoundStatus, SessionState,
};
pub use source::{RandomWordSource, ScriptedWordSource, SourceError, WordSource};

use crate::core::Word;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Settings for building a playable session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub attempt_limit: usize,
    /// Seed for secret word draws; `None` seeds from the operating system
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            attempt_limit: DEFAULT_ATTEMPT_LIMIT,
            seed: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn new(attempt_limit: usize, seed: Option<u64>) -> Self {
        Self {
            attempt_limit,
            seed,
        }
    }
}

/// Session drawing secret words at random from a vocabulary
pub type RandomSession = GameSession<RandomWordSource<StdRng>>;

/// Build a session over `words` using `config`
///
/// # Errors
///
/// Returns an error if the vocabulary is empty or the attempt limit is zero.
pub fn build_session(config: GameConfig, words: Vec<Word>) -> anyhow::Result<RandomSession> {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let source = RandomWordSource::new(words, rng)?;
    log::debug!("Vocabulary holds {} words", source.len());

    Ok(GameSession::with_attempt_limit(source, config.attempt_limit)?)
}
