//! Word lists for hangman
//!
//! Provides the embedded word list compiled into the binary, file loading,
//! and the `WordSource` that picks secret words.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use source::{WordSource, WordSourceError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        for &word in WORDS {
            assert!(!word.is_empty(), "Embedded list contains an empty word");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn expected_count() {
        assert_eq!(WORDS_COUNT, 10, "Expected 10 built-in words");
        assert!(WORDS.contains(&"hangman"));
    }
}
