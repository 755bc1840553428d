//! Single guess check
//!
//! Evaluates one guess against one target without starting a round.

use crate::core::{GuessResult, Word, WordError};

/// Result of checking a guess
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub result: GuessResult,
}

/// Evaluate `guess` against `target`
///
/// Both words are trimmed and uppercased before comparison. The guess may
/// hold any four characters, as in a round; the target must be four letters.
///
/// # Errors
///
/// Returns an error if the guess is not four characters or the target is
/// not four letters.
pub fn check_guess(guess: &str, target: &str) -> Result<CheckResult, String> {
    let guess = Word::from_guess(guess.trim()).map_err(|e: WordError| format!("Invalid guess: {e}"))?;
    let target =
        Word::new(target.trim()).map_err(|e: WordError| format!("Invalid target word: {e}"))?;
    let result = GuessResult::calculate(&guess, &target);

    Ok(CheckResult {
        guess,
        target,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_reports_positional_feedback() {
        let check = check_guess("lamb", "LAMP").unwrap();
        assert_eq!(check.guess.text(), "LAMB");
        assert_eq!(check.target.text(), "LAMP");
        assert_eq!(check.result.to_string(), "LAMX");
    }

    #[test]
    fn check_rejects_bad_input() {
        let err = check_guess("lambs", "lamp").err().unwrap();
        assert!(err.starts_with("Invalid guess"));

        let err = check_guess("lamb", "l4mp").err().unwrap();
        assert!(err.starts_with("Invalid target word"));
    }

    #[test]
    fn check_compares_non_letter_guess() {
        let check = check_guess("l4mp", "lamp").unwrap();
        assert_eq!(check.result.to_string(), "LXMP");
    }
}
