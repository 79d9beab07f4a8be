//! Automated player interface

use super::candidates::filter_candidates;
use super::strategy::Strategy;
use crate::core::{Game, Guess, GuessOutcome, SecretWord};

/// Automated hangman player
///
/// Coordinates candidate filtering with a letter selection strategy.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    dictionary: &'a [SecretWord],
}

/// A single automated guess and its result
#[derive(Debug, Clone)]
pub struct SolverStep {
    pub guess: Guess,
    pub outcome: GuessOutcome,
    pub candidates_before: usize,
    pub mask: String,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and dictionary
    ///
    /// # Parameters
    /// - `strategy`: The letter selection strategy to use
    /// - `dictionary`: Words the secret is assumed to come from
    pub const fn new(strategy: S, dictionary: &'a [SecretWord]) -> Self {
        Self {
            strategy,
            dictionary,
        }
    }

    /// Get the next letter to guess for a game in progress
    ///
    /// Returns `None` once the game is finished or every letter is used.
    pub fn next_guess(&self, game: &Game) -> Option<Guess> {
        if game.is_finished() {
            return None;
        }

        let candidates = self.get_candidates(game);
        self.strategy.select_letter(game, &candidates)
    }

    /// Dictionary words consistent with the game so far
    pub fn get_candidates(&self, game: &Game) -> Vec<&'a SecretWord> {
        filter_candidates(self.dictionary, game)
    }

    /// Count how many dictionary words remain possible
    pub fn count_candidates(&self, game: &Game) -> usize {
        self.get_candidates(game).len()
    }

    /// Play `game` to completion, recording every step
    pub fn play_out(&self, game: &mut Game) -> Vec<SolverStep> {
        let mut steps = Vec::new();

        while let Some(guess) = self.next_guess(game) {
            let candidates_before = self.count_candidates(game);
            let outcome = game.guess(guess);
            steps.push(SolverStep {
                guess,
                outcome,
                candidates_before,
                mask: game.masked(crate::output::formatters::PLACEHOLDER),
            });
        }

        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DEFAULT_MAX_ATTEMPTS, Outcome};
    use crate::solver::strategy::{AlphabeticalStrategy, FrequencyStrategy};
    use crate::wordlists::loader::words_from_slice;
    use crate::wordlists::{WORDS, WordSource};

    #[test]
    fn next_guess_none_when_finished() {
        let dictionary = words_from_slice(&["a"]);
        let solver = Solver::new(FrequencyStrategy, &dictionary);
        let mut game = Game::new(dictionary[0].clone(), 1);
        game.guess(Guess::parse("a").unwrap());

        assert!(solver.next_guess(&game).is_none());
    }

    #[test]
    fn candidates_shrink_as_letters_are_revealed() {
        let dictionary = words_from_slice(&["cat", "cot", "dog", "owl"]);
        let solver = Solver::new(FrequencyStrategy, &dictionary);
        let mut game = Game::new(dictionary[0].clone(), 6);

        assert_eq!(solver.count_candidates(&game), 4);
        game.guess(Guess::parse("c").unwrap());
        assert_eq!(solver.count_candidates(&game), 2);
    }

    #[test]
    fn play_out_reaches_a_terminal_state() {
        let dictionary = words_from_slice(&["cat"]);
        let solver = Solver::new(AlphabeticalStrategy, &dictionary);
        let mut game = Game::new(SecretWord::new("zzz").unwrap(), DEFAULT_MAX_ATTEMPTS);

        let steps = solver.play_out(&mut game);

        assert_eq!(game.outcome(), Some(Outcome::Lost));
        assert_eq!(steps.len(), DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn frequency_solves_every_builtin_word() {
        let source = WordSource::builtin().unwrap();
        let solver = Solver::new(FrequencyStrategy, source.words());

        for word in source.words() {
            let mut game = Game::new(word.clone(), DEFAULT_MAX_ATTEMPTS);
            let steps = solver.play_out(&mut game);

            assert_eq!(game.outcome(), Some(Outcome::Won), "failed on '{word}'");
            assert_eq!(steps.last().map(|s| s.mask.as_str()), Some(word.text()));
        }
        assert_eq!(source.len(), WORDS.len());
    }

    #[test]
    fn steps_never_repeat_a_letter() {
        let dictionary = words_from_slice(WORDS);
        let solver = Solver::new(FrequencyStrategy, &dictionary);
        let mut game = Game::new(SecretWord::new("programming").unwrap(), DEFAULT_MAX_ATTEMPTS);

        let steps = solver.play_out(&mut game);
        let mut letters: Vec<u8> = steps.iter().map(|s| s.guess.letter()).collect();
        let total = letters.len();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), total);
    }
}
