//! Core domain types for hangman
//!
//! This module contains the fundamental game types with zero external dependencies.
//! Everything here is pure and deterministic; randomness and I/O live elsewhere.

mod game;
mod guess;
mod tally;
mod word;

pub use game::{DEFAULT_MAX_ATTEMPTS, Game, GameStatus, GuessOutcome, Outcome};
pub use guess::{Guess, GuessError};
pub use tally::Tally;
pub use word::{SecretWord, WordError};
