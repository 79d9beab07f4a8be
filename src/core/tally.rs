//! Running win/loss tally across sessions

use super::Outcome;

/// Games played and won since the program started
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub games_played: usize,
    pub games_won: usize,
}

impl Tally {
    /// Record the outcome of a finished session
    pub fn record(&mut self, outcome: Outcome) {
        self.games_played += 1;
        if outcome == Outcome::Won {
            self.games_won += 1;
        }
    }

    #[must_use]
    pub const fn games_lost(&self) -> usize {
        self.games_played - self.games_won
    }

    /// Win percentage, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}
