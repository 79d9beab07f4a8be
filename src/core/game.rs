//! Game state for a single hangman session
//!
//! Tracks which positions of the secret word are revealed, which letters were
//! guessed wrong, and how many attempts remain.

use super::{Guess, SecretWord};

/// Default number of wrong guesses allowed before the game is lost
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Terminal result of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Won,
    Lost,
}

/// Current position in the session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Finished(Outcome),
}

/// Classification of a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess revealed at least one hidden position
    Correct { revealed: usize },
    /// The guess revealed nothing and was added to the wrong guesses
    Incorrect,
    /// The guess revealed nothing and was already a wrong guess
    AlreadyGuessed,
    /// The game had already finished; nothing changed
    GameOver,
}

/// State of one hangman round
///
/// The reveal mask always has one entry per letter of the secret word, and
/// the wrong-guess list never holds the same letter twice.
#[derive(Debug, Clone)]
pub struct Game {
    secret: SecretWord,
    revealed: Vec<bool>,
    wrong_guesses: Vec<u8>,
    max_attempts: usize,
}

impl Game {
    /// Start a new round for `secret` with `max_attempts` wrong guesses allowed
    ///
    /// A budget of zero is raised to one so every game has a guessing phase.
    #[must_use]
    pub fn new(secret: SecretWord, max_attempts: usize) -> Self {
        let revealed = vec![false; secret.letter_count()];
        Self {
            secret,
            revealed,
            wrong_guesses: Vec::new(),
            max_attempts: max_attempts.max(1),
        }
    }

    /// Apply a guess to the game
    ///
    /// Every still-hidden position holding the guessed letter is revealed.
    /// A guess only counts as correct when it reveals something new, so
    /// repeating a letter whose occurrences are all shown is a wrong guess.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Game, Guess, GuessOutcome, SecretWord};
    ///
    /// let mut game = Game::new(SecretWord::new("book").unwrap(), 6);
    /// let o = Guess::parse("o").unwrap();
    ///
    /// assert_eq!(game.guess(o), GuessOutcome::Correct { revealed: 2 });
    /// assert_eq!(game.guess(o), GuessOutcome::Incorrect);
    /// assert_eq!(game.attempts_left(), 5);
    /// ```
    pub fn guess(&mut self, guess: Guess) -> GuessOutcome {
        if self.is_finished() {
            return GuessOutcome::GameOver;
        }

        let letter = guess.letter();
        let mut newly_revealed = 0;
        for (shown, &ch) in self.revealed.iter_mut().zip(self.secret.letters()) {
            if ch == letter && !*shown {
                *shown = true;
                newly_revealed += 1;
            }
        }

        if newly_revealed > 0 {
            return GuessOutcome::Correct {
                revealed: newly_revealed,
            };
        }

        if self.wrong_guesses.contains(&letter) {
            GuessOutcome::AlreadyGuessed
        } else {
            self.wrong_guesses.push(letter);
            GuessOutcome::Incorrect
        }
    }

    /// Current state machine position
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.is_solved() {
            GameStatus::Finished(Outcome::Won)
        } else if self.attempts_left() == 0 {
            GameStatus::Finished(Outcome::Lost)
        } else {
            GameStatus::InProgress
        }
    }

    /// The terminal outcome, if the game has one
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status() {
            GameStatus::Finished(outcome) => Some(outcome),
            GameStatus::InProgress => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status() != GameStatus::InProgress
    }

    /// Check whether every position is revealed
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.revealed.iter().all(|&shown| shown)
    }

    /// Wrong guesses still allowed
    #[inline]
    #[must_use]
    pub fn attempts_left(&self) -> usize {
        self.max_attempts.saturating_sub(self.wrong_guesses.len())
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }

    /// Per-position reveal mask
    #[inline]
    #[must_use]
    pub fn revealed(&self) -> &[bool] {
        &self.revealed
    }

    /// Wrong guesses in the order they were made
    #[inline]
    #[must_use]
    pub fn wrong_guesses(&self) -> &[u8] {
        &self.wrong_guesses
    }

    /// Letters currently shown in the word, in order of first appearance
    #[must_use]
    pub fn revealed_letters(&self) -> Vec<u8> {
        let mut letters = Vec::new();
        for (&ch, &shown) in self.secret.letters().iter().zip(&self.revealed) {
            if shown && !letters.contains(&ch) {
                letters.push(ch);
            }
        }
        letters
    }

    /// Check whether a letter has been guessed in any way
    #[must_use]
    pub fn has_guessed(&self, letter: u8) -> bool {
        self.wrong_guesses.contains(&letter)
            || self
                .secret
                .letters()
                .iter()
                .zip(&self.revealed)
                .any(|(&ch, &shown)| shown && ch == letter)
    }

    /// The word with hidden positions replaced by `placeholder`
    ///
    /// Each position yields exactly one char.
    #[must_use]
    pub fn masked(&self, placeholder: char) -> String {
        self.secret
            .letters()
            .iter()
            .zip(&self.revealed)
            .map(|(&ch, &shown)| if shown { ch as char } else { placeholder })
            .collect()
    }
}
