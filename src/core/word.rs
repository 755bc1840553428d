//! Four-letter word representation
//!
//! A Word stores an uppercase 4-character word as both text and characters.
//! Vocabulary words are letters only; guesses may hold any four characters.

use std::fmt;

/// Number of letters in every word of the game
pub const WORD_LENGTH: usize = 4;

/// A 4-character word, normalized to ASCII uppercase
///
/// Equality is exact on the normalized form, so `Word::new("lamp")` and
/// `Word::new("LAMP")` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [char; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is ASCII-uppercased. Surrounding whitespace is not stripped;
    /// callers handling raw user input trim first.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length in characters is not exactly 4
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_guess::core::Word;
    ///
    /// let word = Word::new("lamp").unwrap();
    /// assert_eq!(word.text(), "LAMP");
    ///
    /// assert!(Word::new("lamps").is_err());
    /// assert!(Word::new("l4mp").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let word = Self::from_guess(text)?;

        if !word.text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !word.chars.iter().all(char::is_ascii_uppercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(word)
    }

    /// Create a guess from any four characters
    ///
    /// Only the length is checked. ASCII letters are uppercased; digits,
    /// spaces and other characters are kept and compared as they are.
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the text is not exactly 4 characters.
    ///
    /// # Examples
    /// ```
    /// use word_guess::core::Word;
    ///
    /// let guess = Word::from_guess("l4mp").unwrap();
    /// assert_eq!(guess.text(), "L4MP");
    /// assert!(Word::from_guess("l4mps").is_err());
    /// ```
    pub fn from_guess(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_ascii_uppercase();
        let chars: [char; WORD_LENGTH] = text
            .chars()
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|chars: Vec<char>| WordError::InvalidLength(chars.len()))?;

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's characters in order
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[char; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("LAMP").unwrap();
        assert_eq!(word.text(), "LAMP");
        assert_eq!(word.chars(), &['L', 'A', 'M', 'P']);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("lamp").unwrap();
        assert_eq!(word.text(), "LAMP");

        let word2 = Word::new("LaMp").unwrap();
        assert_eq!(word2.text(), "LAMP");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("lamps"), Err(WordError::InvalidLength(5)));
        assert_eq!(Word::new("lam"), Err(WordError::InvalidLength(3)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_length_counts_characters_not_bytes() {
        // Four characters, six bytes
        assert_eq!(Word::new("lämp"), Err(WordError::NonAscii));
        assert_eq!(Word::new("äöü"), Err(WordError::InvalidLength(3)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("l4mp"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("la p"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("lam!"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn guess_accepts_any_four_characters() {
        assert_eq!(Word::from_guess("l4mp").unwrap().text(), "L4MP");
        assert_eq!(Word::from_guess("la p").unwrap().chars(), &['L', 'A', ' ', 'P']);
        assert_eq!(Word::from_guess("lämp").unwrap().chars(), &['L', 'ä', 'M', 'P']);
        assert_eq!(Word::from_guess("lamps"), Err(WordError::InvalidLength(5)));
        assert_eq!(Word::from_guess("äöü"), Err(WordError::InvalidLength(3)));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("lamp").unwrap();
        assert_eq!(word.char_at(0), 'L');
        assert_eq!(word.char_at(1), 'A');
        assert_eq!(word.char_at(2), 'M');
        assert_eq!(word.char_at(3), 'P');
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "lamp".parse().unwrap();
        assert_eq!(format!("{word}"), "LAMP");
    }

    #[test]
    fn word_equality_is_case_insensitive() {
        assert_eq!(Word::new("lamp").unwrap(), Word::new("LAMP").unwrap());
        assert_ne!(Word::new("lamp").unwrap(), Word::new("lump").unwrap());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            WordError::InvalidLength(5).to_string(),
            "Word must be exactly 4 letters, got 5"
        );
    }
}
