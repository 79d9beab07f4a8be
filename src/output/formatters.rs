//! Formatting utilities for terminal output

use crate::core::Game;

/// Placeholder shown for hidden letters
pub const PLACEHOLDER: char = '_';

/// Number of drawing stages in the gallows figure
pub const GALLOWS_STAGES: usize = 6;

/// Format the masked word with spaces between positions
///
/// # Examples
/// ```
/// use hangman::core::{Game, Guess, SecretWord};
/// use hangman::output::formatters::spaced_mask;
///
/// let mut game = Game::new(SecretWord::new("cat").unwrap(), 6);
/// game.guess(Guess::parse("a").unwrap());
/// assert_eq!(spaced_mask(&game), "_ a _");
/// ```
#[must_use]
pub fn spaced_mask(game: &Game) -> String {
    let masked = game.masked(PLACEHOLDER);
    let mut result = String::with_capacity(masked.len() * 2);

    for (i, ch) in masked.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(ch);
    }

    result
}

/// Format wrong guesses in the order they were made
#[must_use]
pub fn format_wrong_guesses(letters: &[u8]) -> String {
    if letters.is_empty() {
        return "(none)".to_string();
    }

    letters
        .iter()
        .map(|&b| (b as char).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Map wrong guesses onto a gallows stage (0 = empty, 6 = full figure)
///
/// Budgets other than six are scaled so the figure completes exactly when
/// the attempts run out.
#[must_use]
pub fn gallows_stage(wrong: usize, max_attempts: usize) -> usize {
    if max_attempts == 0 || wrong >= max_attempts {
        return GALLOWS_STAGES;
    }
    wrong * GALLOWS_STAGES / max_attempts
}

/// Draw the gallows figure for a stage
#[must_use]
pub fn gallows(stage: usize) -> Vec<&'static str> {
    let head = if stage >= 1 { "  O   |" } else { "      |" };
    let body = match stage {
        0 | 1 => "      |",
        2 => "  |   |",
        3 => " /|   |",
        _ => " /|\\  |",
    };
    let legs = match stage {
        0..=4 => "      |",
        5 => " /    |",
        _ => " / \\  |",
    };

    vec!["  +---+", "  |   |", head, body, legs, "      |", "========="]
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Guess, SecretWord};

    #[test]
    fn spaced_mask_hidden_word() {
        let game = Game::new(SecretWord::new("book").unwrap(), 6);
        assert_eq!(spaced_mask(&game), "_ _ _ _");
    }

    #[test]
    fn spaced_mask_after_guess() {
        let mut game = Game::new(SecretWord::new("book").unwrap(), 6);
        game.guess(Guess::parse("o").unwrap());
        assert_eq!(spaced_mask(&game), "_ o o _");
    }

    #[test]
    fn wrong_guesses_keep_insertion_order() {
        assert_eq!(format_wrong_guesses(b"zxe"), "z x e");
        assert_eq!(format_wrong_guesses(b""), "(none)");
    }

    #[test]
    fn gallows_stage_default_budget_is_identity() {
        for wrong in 0..=6 {
            assert_eq!(gallows_stage(wrong, 6), wrong);
        }
    }

    #[test]
    fn gallows_stage_scales_other_budgets() {
        assert_eq!(gallows_stage(0, 3), 0);
        assert_eq!(gallows_stage(1, 3), 2);
        assert_eq!(gallows_stage(3, 3), 6);
        assert_eq!(gallows_stage(1, 12), 0);
        assert_eq!(gallows_stage(11, 12), 5);
        assert_eq!(gallows_stage(12, 12), 6);
    }

    #[test]
    fn gallows_completes_only_on_last_attempt() {
        for max in 1..=26 {
            assert!(
                gallows_stage(max - 1, max) < GALLOWS_STAGES,
                "budget {max} draws the full figure with one attempt left"
            );
            assert_eq!(gallows_stage(max, max), GALLOWS_STAGES);
        }
    }

    #[test]
    fn gallows_stage_never_shrinks() {
        for max in 1..=26 {
            for wrong in 1..=max {
                assert!(gallows_stage(wrong, max) >= gallows_stage(wrong - 1, max));
            }
        }
    }

    #[test]
    fn gallows_full_figure() {
        let lines = gallows(6);
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[2], "  O   |");
        assert_eq!(lines[3], " /|\\  |");
        assert_eq!(lines[4], " / \\  |");
    }

    #[test]
    fn gallows_empty_figure_has_no_body() {
        let lines = gallows(0);
        assert!(lines.iter().all(|line| !line.contains('O')));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
