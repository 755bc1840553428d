//! Positional guess feedback
//!
//! Feedback only distinguishes an exact positional match from a miss. There is
//! no "present elsewhere" signal, so positions are evaluated independently.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Marker shown for a position whose letter does not match
pub const SENTINEL: char = 'X';

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    /// The guessed letter matches the target at this position
    Match(char),
    /// The guessed letter differs from the target at this position
    Miss,
}

impl LetterFeedback {
    /// Character used when rendering this feedback
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Match(letter) => letter,
            Self::Miss => SENTINEL,
        }
    }

    #[must_use]
    pub const fn is_match(self) -> bool {
        matches!(self, Self::Match(_))
    }
}

/// Feedback for a whole guess, one entry per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessResult([LetterFeedback; WORD_LENGTH]);

impl GuessResult {
    /// Compare `guess` against `target` position by position
    ///
    /// # Examples
    /// ```
    /// use word_guess::core::{GuessResult, Word};
    ///
    /// let guess = Word::new("lump").unwrap();
    /// let target = Word::new("lamp").unwrap();
    /// assert_eq!(GuessResult::calculate(&guess, &target).to_string(), "LXXP");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut result = [LetterFeedback::Miss; WORD_LENGTH];

        for (slot, (&g, &t)) in result
            .iter_mut()
            .zip(guess.chars().iter().zip(target.chars()))
        {
            if g == t {
                *slot = LetterFeedback::Match(g);
            }
        }

        Self(result)
    }

    /// Feedback for each position, in word order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position matched
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|letter| letter.is_match())
    }

    /// Number of positions that matched
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.0.iter().filter(|letter| letter.is_match()).count()
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            write!(f, "{}", letter.symbol())?;
        }
        Ok(())
    }
}

/// Evaluate a guess against the target word
///
/// Shorthand for [`GuessResult::calculate`].
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> GuessResult {
    GuessResult::calculate(guess, target)
}
