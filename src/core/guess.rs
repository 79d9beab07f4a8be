//! Player guess parsing and validation
//!
//! A guess is a single ASCII letter, normalized to lowercase.

use std::fmt;
use std::str::FromStr;

/// A validated, lowercase letter guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Guess(u8);

/// Error type for rejected guess tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    Empty,
    TooLong(usize),
    NotAlphabetic(char),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Please enter a single letter"),
            Self::TooLong(len) => {
                write!(f, "Please enter a single letter, got {len} characters")
            }
            Self::NotAlphabetic(ch) => write!(f, "'{ch}' is not a letter"),
        }
    }
}

impl std::error::Error for GuessError {}

impl Guess {
    /// Parse a raw input token into a guess
    ///
    /// Surrounding whitespace is ignored. The remaining token must be exactly
    /// one ASCII letter; case is normalized.
    ///
    /// # Errors
    /// Returns `GuessError` if the token is empty, longer than one character,
    /// or not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Guess, GuessError};
    ///
    /// assert_eq!(Guess::parse(" T ").unwrap().letter(), b't');
    /// assert_eq!(Guess::parse("ab"), Err(GuessError::TooLong(2)));
    /// assert_eq!(Guess::parse("5"), Err(GuessError::NotAlphabetic('5')));
    /// ```
    pub fn parse(token: &str) -> Result<Self, GuessError> {
        let token = token.trim();
        let mut chars = token.chars();

        let first = chars.next().ok_or(GuessError::Empty)?;
        if chars.next().is_some() {
            return Err(GuessError::TooLong(token.chars().count()));
        }

        Self::from_char(first)
    }

    /// Build a guess from a single character
    ///
    /// # Errors
    /// Returns `GuessError::NotAlphabetic` for anything but `a-z` / `A-Z`.
    pub fn from_char(ch: char) -> Result<Self, GuessError> {
        if ch.is_ascii_alphabetic() {
            Ok(Self(ch.to_ascii_lowercase() as u8))
        } else {
            Err(GuessError::NotAlphabetic(ch))
        }
    }

    /// The guessed letter as a lowercase ASCII byte
    #[inline]
    #[must_use]
    pub const fn letter(self) -> u8 {
        self.0
    }

    /// The guessed letter as a char
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl FromStr for Guess {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
