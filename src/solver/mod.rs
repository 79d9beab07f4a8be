//! Automated hangman players
//!
//! This module contains candidate filtering and letter selection strategies.

pub mod candidates;
mod engine;
pub mod strategy;

pub use engine::{Solver, SolverStep};
pub use strategy::{
    AlphabeticalStrategy, FrequencyStrategy, RandomStrategy, Strategy, StrategyType,
};
