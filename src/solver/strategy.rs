//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::{Game, Guess, SecretWord};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rustc_hash::{FxHashMap, FxHasher};
use std::hash::{Hash, Hasher};

/// Letters ordered by typical English frequency
pub const ENGLISH_ORDER: &[u8; 26] = b"etaoinshrdlcumwfgypbvkjxqz";

/// A strategy for choosing the next letter to guess
pub trait Strategy {
    /// Select the next letter given the game state and remaining candidates
    ///
    /// Never returns a letter that has already been guessed. Returns `None`
    /// only when every letter has been tried.
    fn select_letter(&self, game: &Game, candidates: &[&SecretWord]) -> Option<Guess>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Most common letter among remaining candidates (default)
    Frequency(FrequencyStrategy),
    /// First unguessed letter of the alphabet
    Alphabetical(AlphabeticalStrategy),
    /// Random unguessed letter
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_letter(&self, game: &Game, candidates: &[&SecretWord]) -> Option<Guess> {
        match self {
            Self::Frequency(s) => s.select_letter(game, candidates),
            Self::Alphabetical(s) => s.select_letter(game, candidates),
            Self::Random(s) => s.select_letter(game, candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "alphabetical", "random".
    /// Defaults to frequency if name is unrecognized. The seed is only used
    /// by the random strategy.
    #[must_use]
    pub fn from_name(name: &str, seed: u64) -> Self {
        match name {
            "alphabetical" | "alpha" => Self::Alphabetical(AlphabeticalStrategy),
            "random" => Self::Random(RandomStrategy::new(seed)),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }

    /// Canonical name of the strategy
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Alphabetical(_) => "alphabetical",
            Self::Random(_) => "random",
        }
    }
}

fn unguessed(game: &Game, order: &[u8]) -> Vec<u8> {
    order
        .iter()
        .copied()
        .filter(|&letter| !game.has_guessed(letter))
        .collect()
}

fn to_guess(letter: u8) -> Option<Guess> {
    Guess::from_char(letter as char).ok()
}

/// Frequency strategy
///
/// Counts, for each unguessed letter, how many candidates contain it at a
/// hidden position and picks the highest count. Ties go to the earlier
/// letter of the alphabet. Without usable candidates it falls back to
/// English letter frequency.
pub struct FrequencyStrategy;

impl FrequencyStrategy {
    /// Per-letter count of candidates containing that letter
    #[must_use]
    pub fn letter_counts(game: &Game, candidates: &[&SecretWord]) -> FxHashMap<u8, usize> {
        let mut counts: FxHashMap<u8, usize> = FxHashMap::default();

        for candidate in candidates {
            let mut seen = [false; 26];
            for (&ch, &revealed) in candidate.letters().iter().zip(game.revealed()) {
                if revealed || game.has_guessed(ch) {
                    continue;
                }
                let idx = usize::from(ch - b'a');
                if !seen[idx] {
                    seen[idx] = true;
                    *counts.entry(ch).or_insert(0) += 1;
                }
            }
        }

        counts
    }
}

impl Strategy for FrequencyStrategy {
    fn select_letter(&self, game: &Game, candidates: &[&SecretWord]) -> Option<Guess> {
        let counts = Self::letter_counts(game, candidates);

        let best = counts
            .iter()
            .max_by(|(a_letter, a_count), (b_letter, b_count)| {
                a_count.cmp(b_count).then_with(|| b_letter.cmp(a_letter))
            })
            .map(|(&letter, _)| letter);

        best.or_else(|| unguessed(game, ENGLISH_ORDER).first().copied())
            .and_then(to_guess)
    }
}

/// Alphabetical strategy
///
/// Guesses a, b, c, ... skipping letters already tried. Useful as a baseline.
pub struct AlphabeticalStrategy;

impl Strategy for AlphabeticalStrategy {
    fn select_letter(&self, game: &Game, _candidates: &[&SecretWord]) -> Option<Guess> {
        (b'a'..=b'z')
            .find(|&letter| !game.has_guessed(letter))
            .and_then(to_guess)
    }
}

/// Random strategy
///
/// Picks uniformly among letters not yet guessed. Each pick draws from an RNG
/// seeded by the strategy seed and the visible game state, so the same seed
/// plays the same game every time, including across benchmark threads.
pub struct RandomStrategy {
    seed: u64,
}

impl RandomStrategy {
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    fn rng_for(&self, game: &Game) -> StdRng {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        game.masked('_').hash(&mut hasher);
        game.wrong_guesses().hash(&mut hasher);
        StdRng::seed_from_u64(hasher.finish())
    }
}

impl Strategy for RandomStrategy {
    fn select_letter(&self, game: &Game, _candidates: &[&SecretWord]) -> Option<Guess> {
        let remaining = unguessed(game, ENGLISH_ORDER);
        remaining
            .choose(&mut self.rng_for(game))
            .copied()
            .and_then(to_guess)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn game(word: &str, letters: &str) -> Game {
        let mut game = Game::new(SecretWord::new(word).unwrap(), 6);
        for ch in letters.chars() {
            game.guess(Guess::from_char(ch).unwrap());
        }
        game
    }

    #[test]
    fn from_name_parses_known_strategies() {
        assert_eq!(StrategyType::from_name("frequency", 0).name(), "frequency");
        assert_eq!(StrategyType::from_name("alphabetical", 0).name(), "alphabetical");
        assert_eq!(StrategyType::from_name("alpha", 0).name(), "alphabetical");
        assert_eq!(StrategyType::from_name("random", 0).name(), "random");
    }

    #[test]
    fn from_name_defaults_to_frequency() {
        assert_eq!(StrategyType::from_name("nonsense", 0).name(), "frequency");
    }

    #[test]
    fn frequency_picks_most_common_letter() {
        let words = words_from_slice(&["cat", "car", "cab"]);
        let refs: Vec<&SecretWord> = words.iter().collect();
        let game = game("cat", "");

        // "c" and "a" appear in all three; "a" wins the alphabetical tie
        let guess = FrequencyStrategy.select_letter(&game, &refs).unwrap();
        assert_eq!(guess.as_char(), 'a');
    }

    #[test]
    fn frequency_counts_each_word_once() {
        let words = words_from_slice(&["eee", "abc", "abd"]);
        let refs: Vec<&SecretWord> = words.iter().collect();
        let game = game("abc", "");

        let counts = FrequencyStrategy::letter_counts(&game, &refs);
        assert_eq!(counts.get(&b'e'), Some(&1));
        assert_eq!(counts.get(&b'a'), Some(&2));
    }

    #[test]
    fn frequency_ignores_guessed_letters() {
        let words = words_from_slice(&["cat"]);
        let refs: Vec<&SecretWord> = words.iter().collect();
        let game = game("cat", "a");

        let guess = FrequencyStrategy.select_letter(&game, &refs).unwrap();
        assert_eq!(guess.as_char(), 'c');
    }

    #[test]
    fn frequency_falls_back_to_english_order() {
        let game = game("cat", "e");
        let guess = FrequencyStrategy.select_letter(&game, &[]).unwrap();
        assert_eq!(guess.as_char(), 't');
    }

    #[test]
    fn alphabetical_skips_guessed_letters() {
        let game = game("cat", "ab");
        let guess = AlphabeticalStrategy.select_letter(&game, &[]).unwrap();
        assert_eq!(guess.as_char(), 'c');
    }

    #[test]
    fn random_never_repeats_a_letter() {
        let game = game("cat", "xyzq");
        for seed in 0..50 {
            let guess = RandomStrategy::new(seed).select_letter(&game, &[]).unwrap();
            assert!(!game.has_guessed(guess.letter()));
        }
    }

    fn random_sequence(seed: u64) -> Vec<char> {
        let strategy = RandomStrategy::new(seed);
        let mut game = Game::new(SecretWord::new("programming").unwrap(), 26);
        let mut letters = Vec::new();
        while !game.is_finished() {
            let guess = strategy.select_letter(&game, &[]).unwrap();
            letters.push(guess.as_char());
            game.guess(guess);
        }
        letters
    }

    #[test]
    fn random_same_seed_plays_same_game() {
        assert_eq!(random_sequence(42), random_sequence(42));
        assert_eq!(random_sequence(7), random_sequence(7));
    }

    #[test]
    fn random_seeds_vary_the_game() {
        let first = random_sequence(0);
        assert!((1..20).any(|seed| random_sequence(seed) != first));
    }
}
