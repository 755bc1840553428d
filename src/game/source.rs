//! Secret word providers

use crate::core::Word;
use rand::Rng;
use std::fmt;

/// Supplies the secret word for each round
///
/// Implementations must always produce a word; any validation of the
/// underlying vocabulary happens when the source is constructed.
pub trait WordSource {
    /// Draw the secret word for the next round
    fn next_word(&mut self) -> Word;
}

/// Error type for word sources that cannot be built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    EmptyVocabulary,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyVocabulary => write!(f, "Vocabulary contains no usable words"),
        }
    }
}

impl std::error::Error for SourceError {}

/// Picks words uniformly at random from a fixed vocabulary
pub struct RandomWordSource<R: Rng> {
    words: Vec<Word>,
    rng: R,
}

impl<R: Rng> RandomWordSource<R> {
    /// Create a source over `words`
    ///
    /// # Errors
    /// Returns `SourceError::EmptyVocabulary` if `words` is empty.
    pub fn new(words: Vec<Word>, rng: R) -> Result<Self, SourceError> {
        if words.is_empty() {
            return Err(SourceError::EmptyVocabulary);
        }
        Ok(Self { words, rng })
    }

    /// Number of words this source draws from
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; construction rejects empty vocabularies
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<R: Rng> WordSource for RandomWordSource<R> {
    fn next_word(&mut self) -> Word {
        let index = self.rng.random_range(0..self.words.len());
        self.words[index].clone()
    }
}

/// Hands out words from a fixed list in order, wrapping around at the end
///
/// Useful for deterministic rounds.
pub struct ScriptedWordSource {
    words: Vec<Word>,
    next: usize,
}

impl ScriptedWordSource {
    /// # Errors
    /// Returns `SourceError::EmptyVocabulary` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, SourceError> {
        if words.is_empty() {
            return Err(SourceError::EmptyVocabulary);
        }
        Ok(Self { words, next: 0 })
    }
}

impl WordSource for ScriptedWordSource {
    fn next_word(&mut self) -> Word {
        let word = self.words[self.next].clone();
        self.next = (self.next + 1) % self.words.len();
        word
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_source_rejects_empty_vocabulary() {
        let result = RandomWordSource::new(Vec::new(), StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(SourceError::EmptyVocabulary)));
    }

    #[test]
    fn random_source_draws_from_vocabulary() {
        let words = words_from_slice(&["lamp", "lump", "lamb"]);
        let mut source = RandomWordSource::new(words.clone(), StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(source.len(), 3);

        for _ in 0..50 {
            let word = source.next_word();
            assert!(words.contains(&word));
        }
    }

    #[test]
    fn random_source_same_seed_same_sequence() {
        let words = words_from_slice(&["lamp", "lump", "lamb", "bake", "lake"]);
        let mut a = RandomWordSource::new(words.clone(), StdRng::seed_from_u64(42)).unwrap();
        let mut b = RandomWordSource::new(words, StdRng::seed_from_u64(42)).unwrap();

        for _ in 0..10 {
            assert_eq!(a.next_word(), b.next_word());
        }
    }

    #[test]
    fn random_source_single_word_always_returns_it() {
        let words = words_from_slice(&["lamp"]);
        let mut source = RandomWordSource::new(words, StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(source.next_word().text(), "LAMP");
        assert_eq!(source.next_word().text(), "LAMP");
    }

    #[test]
    fn scripted_source_cycles() {
        let mut source = ScriptedWordSource::new(words_from_slice(&["lamp", "bake"])).unwrap();
        assert_eq!(source.next_word().text(), "LAMP");
        assert_eq!(source.next_word().text(), "BAKE");
        assert_eq!(source.next_word().text(), "LAMP");
    }

    #[test]
    fn scripted_source_rejects_empty_list() {
        assert_eq!(
            ScriptedWordSource::new(Vec::new()).err(),
            Some(SourceError::EmptyVocabulary)
        );
    }
}
