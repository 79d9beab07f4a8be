//! Hangman
//!
//! A console word-guessing game with a terminal UI and automated players.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Game, Guess, GuessOutcome, Outcome, SecretWord};
//!
//! let mut game = Game::new(SecretWord::new("cat").unwrap(), 6);
//!
//! for letter in ["c", "a", "t"] {
//!     let outcome = game.guess(Guess::parse(letter).unwrap());
//!     assert!(matches!(outcome, GuessOutcome::Correct { .. }));
//! }
//!
//! assert_eq!(game.outcome(), Some(Outcome::Won));
//! ```

// Core domain types
pub mod core;

// Automated players
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
