//! Word source for picking secret words
//!
//! A `WordSource` is a non-empty list of secret words. Randomness is supplied
//! by the caller, so a seeded RNG makes word selection reproducible.

use crate::core::SecretWord;
use rand::Rng;
use std::fmt;

/// A non-empty, ordered list of candidate secret words
#[derive(Debug, Clone)]
pub struct WordSource {
    words: Vec<SecretWord>,
}

/// Error type for an unusable word source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSourceError {
    Empty,
}

impl fmt::Display for WordSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word list contains no valid words"),
        }
    }
}

impl std::error::Error for WordSourceError {}

impl WordSource {
    /// Create a word source
    ///
    /// # Errors
    /// Returns `WordSourceError::Empty` if `words` is empty.
    pub fn new(words: Vec<SecretWord>) -> Result<Self, WordSourceError> {
        if words.is_empty() {
            return Err(WordSourceError::Empty);
        }
        Ok(Self { words })
    }

    /// Word source backed by the built-in list
    ///
    /// # Errors
    /// Returns `WordSourceError::Empty` if the embedded list has no valid words.
    pub fn builtin() -> Result<Self, WordSourceError> {
        Self::new(super::loader::words_from_slice(super::WORDS))
    }

    /// Pick one word uniformly at random
    ///
    /// # Examples
    /// ```
    /// use hangman::wordlists::WordSource;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let source = WordSource::builtin().unwrap();
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let word = source.pick(&mut rng);
    /// assert!(source.words().contains(word));
    /// ```
    pub fn pick<R: Rng>(&self, rng: &mut R) -> &SecretWord {
        &self.words[rng.random_range(0..self.words.len())]
    }

    /// All words in list order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[SecretWord] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Never true for a constructed source
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_source_is_rejected() {
        assert_eq!(
            WordSource::new(Vec::new()).unwrap_err(),
            WordSourceError::Empty
        );
    }

    #[test]
    fn builtin_source_has_all_words() {
        let source = WordSource::builtin().unwrap();
        assert_eq!(source.len(), crate::wordlists::WORDS_COUNT);
        assert!(!source.is_empty());
    }

    #[test]
    fn single_word_source_always_picks_it() {
        let source = WordSource::new(words_from_slice(&["cat"])).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            assert_eq!(source.pick(&mut rng).text(), "cat");
        }
    }

    #[test]
    fn same_seed_picks_same_words() {
        let source = WordSource::builtin().unwrap();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            assert_eq!(source.pick(&mut a), source.pick(&mut b));
        }
    }

    #[test]
    fn picks_cover_the_whole_list() {
        let source = WordSource::new(words_from_slice(&["cat", "dog", "owl"])).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(source.pick(&mut rng).text().to_string());
        }
        assert_eq!(seen.len(), 3);
    }
}
