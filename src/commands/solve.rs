//! Word solving command
//!
//! Lets an automated player work through a specific secret word.

use crate::core::{Game, Outcome, SecretWord, WordError};
use crate::solver::{Solver, SolverStep, Strategy};
use tracing::info;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_attempts: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String, max_attempts: usize) -> Self {
        Self {
            target,
            max_attempts,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    pub outcome: Outcome,
    pub steps: Vec<SolverStep>,
    pub wrong_guesses: Vec<u8>,
    pub max_attempts: usize,
}

/// Play the target word with the given solver
///
/// The target does not need to be in the solver's dictionary; the strategy
/// falls back to letter frequency once no dictionary word fits.
///
/// # Errors
///
/// Returns `WordError` if the target is not a valid word.
pub fn solve_word<S: Strategy>(
    config: &SolveConfig,
    solver: &Solver<S>,
) -> Result<SolveResult, WordError> {
    let target = SecretWord::new(&config.target)?;
    let mut game = Game::new(target, config.max_attempts);

    let steps = solver.play_out(&mut game);

    // play_out only stops early if every letter was tried, which reveals the word
    let outcome = game.outcome().unwrap_or(Outcome::Won);
    info!(word = %game.secret(), ?outcome, guesses = steps.len(), "solve finished");

    Ok(SolveResult {
        target: game.secret().text().to_string(),
        outcome,
        steps,
        wrong_guesses: game.wrong_guesses().to_vec(),
        max_attempts: game.max_attempts(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DEFAULT_MAX_ATTEMPTS, GuessOutcome};
    use crate::solver::{AlphabeticalStrategy, FrequencyStrategy, StrategyType};
    use crate::wordlists::WordSource;

    #[test]
    fn solve_builtin_word() {
        let source = WordSource::builtin().unwrap();
        let solver = Solver::new(FrequencyStrategy, source.words());

        let result = solve_word(
            &SolveConfig::new("hangman".to_string(), DEFAULT_MAX_ATTEMPTS),
            &solver,
        )
        .unwrap();

        assert_eq!(result.outcome, Outcome::Won);
        assert_eq!(result.target, "hangman");
        assert!(result.wrong_guesses.is_empty());
        assert_eq!(result.steps.last().unwrap().mask, "hangman");
    }

    #[test]
    fn solve_normalizes_case() {
        let source = WordSource::builtin().unwrap();
        let solver = Solver::new(FrequencyStrategy, source.words());

        let result = solve_word(&SolveConfig::new("SCIENCE".to_string(), 6), &solver).unwrap();
        assert_eq!(result.target, "science");
    }

    #[test]
    fn solve_rejects_invalid_target() {
        let source = WordSource::builtin().unwrap();
        let solver = Solver::new(FrequencyStrategy, source.words());

        assert!(solve_word(&SolveConfig::new("h4ngman".to_string(), 6), &solver).is_err());
    }

    #[test]
    fn solve_can_lose() {
        let source = WordSource::builtin().unwrap();
        let solver = Solver::new(AlphabeticalStrategy, source.words());

        let result = solve_word(&SolveConfig::new("zzz".to_string(), 3), &solver).unwrap();

        assert_eq!(result.outcome, Outcome::Lost);
        assert_eq!(result.wrong_guesses, b"abc");
        assert!(
            result
                .steps
                .iter()
                .all(|s| s.outcome == GuessOutcome::Incorrect)
        );
    }

    #[test]
    fn solve_word_outside_dictionary() {
        let source = WordSource::builtin().unwrap();
        let solver = Solver::new(FrequencyStrategy, source.words());

        let result = solve_word(&SolveConfig::new("tea".to_string(), 26), &solver).unwrap();
        assert_eq!(result.outcome, Outcome::Won);
    }

    #[test]
    fn solve_config_can_be_reused() {
        let source = WordSource::builtin().unwrap();
        let solver = Solver::new(FrequencyStrategy, source.words());
        let config = SolveConfig::new("debugging".to_string(), DEFAULT_MAX_ATTEMPTS);

        let first = solve_word(&config, &solver).unwrap();
        let second = solve_word(&config, &solver).unwrap();

        assert_eq!(config.target, "debugging");
        assert_eq!(first.outcome, second.outcome);
        assert_eq!(first.steps.len(), second.steps.len());
    }

    #[test]
    fn seeded_random_strategy_is_reproducible() {
        let source = WordSource::builtin().unwrap();
        let config = SolveConfig::new("software".to_string(), 26);
        let letters = |seed: u64| {
            let solver = Solver::new(StrategyType::from_name("random", seed), source.words());
            let result = solve_word(&config, &solver).unwrap();
            result
                .steps
                .iter()
                .map(|step| step.guess.as_char())
                .collect::<String>()
        };

        assert_eq!(letters(1234), letters(1234));
    }
}
