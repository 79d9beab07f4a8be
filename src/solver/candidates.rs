//! Candidate filtering
//!
//! Narrows a dictionary down to the words still consistent with a game's
//! visible state.

use crate::core::{Game, SecretWord};

/// Check whether `word` could be the secret behind `game`
///
/// A candidate has the secret's length, shows the same letter at every
/// revealed position, and holds no guessed letter at a hidden position.
/// Revealing a letter always uncovers all of its occurrences, so a hidden
/// position can never hold a letter that is already shown.
#[must_use]
pub fn is_candidate(word: &SecretWord, game: &Game) -> bool {
    let secret = game.secret().letters();
    if word.letter_count() != secret.len() {
        return false;
    }

    let shown = game.revealed_letters();
    let wrong = game.wrong_guesses();

    word.letters()
        .iter()
        .zip(secret)
        .zip(game.revealed())
        .all(|((&ch, &actual), &revealed)| {
            if revealed {
                ch == actual
            } else {
                !shown.contains(&ch) && !wrong.contains(&ch)
            }
        })
}

/// Filter a dictionary to the words consistent with `game`
#[must_use]
pub fn filter_candidates<'a>(dictionary: &'a [SecretWord], game: &Game) -> Vec<&'a SecretWord> {
    dictionary
        .iter()
        .filter(|word| is_candidate(word, game))
        .collect()
}
