//! Round state and guess submission rules

use super::source::WordSource;
use crate::core::{GuessResult, Word, evaluate};
use log::{debug, info};
use std::fmt;

/// Number of valid guesses allowed per round unless configured otherwise
pub const DEFAULT_ATTEMPT_LIMIT: usize = 3;

/// Where the current round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Active,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_ended(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// An accepted guess together with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub guess: Word,
    pub result: GuessResult,
}

/// Why a raw guess was not accepted
///
/// Rejections never count as attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Not exactly four characters after trimming
    InvalidLength { length: usize },
}

/// Result of submitting a guess to an active round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Rejected(RejectReason),
    Continuing {
        result: GuessResult,
        attempts_remaining: usize,
    },
    Won {
        result: GuessResult,
        secret: Word,
    },
    Lost {
        result: GuessResult,
        secret: Word,
    },
}

impl Outcome {
    /// Whether this outcome finished the round
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Won { .. } | Self::Lost { .. })
    }
}

/// Errors caused by misusing a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A guess was submitted after the round ended; call `reset` first
    SessionAlreadyEnded,
    /// The attempt limit must allow at least one guess
    InvalidAttemptLimit(usize),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SessionAlreadyEnded => {
                write!(f, "The round has ended; reset before guessing again")
            }
            Self::InvalidAttemptLimit(limit) => {
                write!(f, "Attempt limit must be at least 1, got {limit}")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Read-only view of a session for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState<'a> {
    pub attempts: usize,
    pub attempt_limit: usize,
    pub status: RoundStatus,
    pub ended: bool,
    pub history: &'a [HistoryEntry],
}

impl SessionState<'_> {
    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        self.attempt_limit.saturating_sub(self.attempts)
    }
}

/// State of one round. Replaced as a whole on reset.
#[derive(Debug)]
struct Round {
    secret: Word,
    attempts: usize,
    status: RoundStatus,
    history: Vec<HistoryEntry>,
}

impl Round {
    const fn new(secret: Word) -> Self {
        Self {
            secret,
            attempts: 0,
            status: RoundStatus::Active,
            history: Vec::new(),
        }
    }
}

/// A game session: one secret word at a time, a bounded number of attempts
///
/// The session is owned by a single caller; all mutation goes through `&mut self`.
///
/// # Examples
/// ```
/// use word_guess::core::Word;
/// use word_guess::game::{GameSession, Outcome, ScriptedWordSource};
///
/// let source = ScriptedWordSource::new(vec![Word::new("lamp").unwrap()]).unwrap();
/// let mut session = GameSession::new(source);
///
/// let outcome = session.submit_guess("lump").unwrap();
/// assert!(matches!(outcome, Outcome::Continuing { attempts_remaining: 2, .. }));
///
/// let outcome = session.submit_guess("LAMP").unwrap();
/// assert!(matches!(outcome, Outcome::Won { .. }));
/// assert!(session.state().ended);
/// ```
pub struct GameSession<S: WordSource> {
    source: S,
    attempt_limit: usize,
    round: Round,
}

impl<S: WordSource> GameSession<S> {
    /// Start a session with the default attempt limit
    pub fn new(source: S) -> Self {
        Self::start(source, DEFAULT_ATTEMPT_LIMIT)
    }

    /// Start a session allowing `attempt_limit` valid guesses per round
    ///
    /// # Errors
    /// Returns `GameError::InvalidAttemptLimit` if `attempt_limit` is zero.
    pub fn with_attempt_limit(source: S, attempt_limit: usize) -> Result<Self, GameError> {
        if attempt_limit == 0 {
            return Err(GameError::InvalidAttemptLimit(attempt_limit));
        }
        Ok(Self::start(source, attempt_limit))
    }

    fn start(mut source: S, attempt_limit: usize) -> Self {
        let round = Round::new(source.next_word());
        debug!("Started round with attempt limit {attempt_limit}");
        Self {
            source,
            attempt_limit,
            round,
        }
    }

    /// Submit raw guess text
    ///
    /// The text is trimmed and uppercased. Input that is not four characters
    /// long is rejected without consuming an attempt; any other input counts
    /// as an attempt and is compared position by position.
    ///
    /// # Errors
    /// Returns `GameError::SessionAlreadyEnded` if the round is over.
    pub fn submit_guess(&mut self, raw: &str) -> Result<Outcome, GameError> {
        if self.round.status.is_ended() {
            return Err(GameError::SessionAlreadyEnded);
        }

        let guess = match normalize(raw) {
            Ok(guess) => guess,
            Err(reason) => {
                debug!("Rejected guess {raw:?}: {reason:?}");
                return Ok(Outcome::Rejected(reason));
            }
        };

        let round = &mut self.round;
        round.attempts += 1;
        let result = evaluate(&guess, &round.secret);
        let won = guess == round.secret;
        round.history.push(HistoryEntry { guess, result });

        if won {
            round.status = RoundStatus::Won;
            info!("Round won after {} attempt(s)", round.attempts);
            return Ok(Outcome::Won {
                result,
                secret: round.secret.clone(),
            });
        }

        if round.attempts >= self.attempt_limit {
            round.status = RoundStatus::Lost;
            info!("Round lost; the word was {}", round.secret);
            return Ok(Outcome::Lost {
                result,
                secret: round.secret.clone(),
            });
        }

        Ok(Outcome::Continuing {
            result,
            attempts_remaining: self.attempt_limit - round.attempts,
        })
    }

    /// Discard the current round and start a new one with a fresh secret word
    pub fn reset(&mut self) {
        self.round = Round::new(self.source.next_word());
        debug!("Started new round");
    }

    /// Snapshot of the current round
    #[must_use]
    pub fn state(&self) -> SessionState<'_> {
        SessionState {
            attempts: self.round.attempts,
            attempt_limit: self.attempt_limit,
            status: self.round.status,
            ended: self.round.status.is_ended(),
            history: &self.round.history,
        }
    }

    /// The secret word, once the round has ended
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Word> {
        self.round.status.is_ended().then_some(&self.round.secret)
    }

    #[must_use]
    pub const fn attempt_limit(&self) -> usize {
        self.attempt_limit
    }
}

fn normalize(raw: &str) -> Result<Word, RejectReason> {
    let text = raw.trim();
    Word::from_guess(text).map_err(|_| RejectReason::InvalidLength {
        length: text.chars().count(),
    })
}
