//! Core domain types for the guessing game
//!
//! Pure types with no I/O: words and the positional feedback computed from them.

mod feedback;
mod word;

pub use feedback::{GuessResult, LetterFeedback, SENTINEL, evaluate};
pub use word::{WORD_LENGTH, Word, WordError};
