//! Formatting utilities shared by the terminal front ends

use crate::core::{GuessResult, WORD_LENGTH, Word};
use crate::game::{RejectReason, SessionState};

pub const WIN_NOTICE: &str = "Congratulations! You guessed it!";
pub const INVALID_LENGTH_NOTICE: &str = "Please enter a 4-letter word";

/// Attempts counter, e.g. `Attempts: 1/3`
#[must_use]
pub fn attempts_label(state: &SessionState<'_>) -> String {
    format!("Attempts: {}/{}", state.attempts, state.attempt_limit)
}

#[must_use]
pub fn guess_line(guess: &Word) -> String {
    format!("Guess: {guess}")
}

#[must_use]
pub fn result_line(result: &GuessResult) -> String {
    format!("Result: {result}")
}

/// Status line shown once a round is over
#[must_use]
pub fn ended_status(won: bool, secret: &Word) -> String {
    if won {
        format!("You Won! Word was: {secret}")
    } else {
        format!("Game Over! Word was: {secret}")
    }
}

#[must_use]
pub fn loss_notice(secret: &Word) -> String {
    format!("Game Over! The word was: {secret}")
}

#[must_use]
pub fn new_game_notice() -> String {
    format!("New game started! Word: {WORD_LENGTH} letters")
}

#[must_use]
pub const fn reject_notice(reason: RejectReason) -> &'static str {
    match reason {
        RejectReason::InvalidLength { .. } => INVALID_LENGTH_NOTICE,
    }
}
