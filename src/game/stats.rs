//! Win/loss statistics across games

use super::Outcome;

/// Running record of finished games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub games_played: usize,
    pub wins: usize,
    /// Attempts used across every game, won or lost
    pub total_attempts: usize,
    /// Fewest attempts in any won game
    pub best_score: Option<usize>,
}

impl Stats {
    /// Fold a finished game into the record
    pub fn record(&mut self, outcome: Outcome) {
        self.games_played += 1;
        self.total_attempts += outcome.attempts_used;

        if outcome.won {
            self.wins += 1;
            self.best_score = Some(
                self.best_score
                    .map_or(outcome.attempts_used, |best| best.min(outcome.attempts_used)),
            );
        }
    }

    /// Attempts per win, the figure shown on the stats panel
    ///
    /// Lost games still add their attempts to the numerator.
    #[must_use]
    pub fn average_attempts(&self) -> Option<f64> {
        (self.wins > 0).then(|| self.total_attempts as f64 / self.wins as f64)
    }

    /// Fraction of games won (0.0 with no games)
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.wins as f64 / self.games_played as f64
        }
    }

    /// Combine two records, e.g. from parallel benchmark workers
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            games_played: self.games_played + other.games_played,
            wins: self.wins + other.wins,
            total_attempts: self.total_attempts + other.total_attempts,
            best_score: match (self.best_score, other.best_score) {
                (Some(a), Some(b)) => Some(a.min(b)),
                (a, b) => a.or(b),
            },
        }
    }
}
