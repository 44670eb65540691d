//! Aggregate results over many games.

use serde::{Deserialize, Serialize};

use super::{GameReport, Outcome};

/// Statistics collected by `simulate`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayStats {
    /// Games played.
    pub games: u32,

    pub wins: u32,

    pub losses: u32,

    /// Games that ended without a win or loss (no moves left, or move limit).
    pub unfinished: u32,

    /// Moves taken from deduced safe cells.
    pub safe_moves: u64,

    /// Moves that were guesses.
    pub random_moves: u64,
}

impl PlayStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finished game into the totals.
    pub fn record(&mut self, report: &GameReport) {
        self.games += 1;
        match report.outcome {
            Outcome::Won => self.wins += 1,
            Outcome::Lost { .. } => self.losses += 1,
            Outcome::Exhausted | Outcome::MoveLimit => self.unfinished += 1,
        }
        self.safe_moves += report.safe_moves as u64;
        self.random_moves += report.random_moves as u64;
    }

    /// Fraction of games won.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }

    /// Fraction of moves that were deduced rather than guessed.
    #[must_use]
    pub fn deduction_rate(&self) -> f64 {
        let total = self.safe_moves + self.random_moves;
        if total == 0 {
            0.0
        } else {
            self.safe_moves as f64 / total as f64
        }
    }
}
