//! Candidate filtering and guess selection

use crate::core::{Code, score};
use crate::game::{Attempt, GameConfig};

/// Every code of `config.code_length` pegs over the palette
///
/// Codes come out in lexicographic palette order. Codes with repeated
/// colors are skipped when the config disallows repeats.
#[must_use]
pub fn all_codes(config: &GameConfig) -> Vec<Code> {
    let base = config.palette.len();
    let length = config.code_length;
    if base == 0 || length == 0 {
        return Vec::new();
    }

    let mut codes = Vec::new();
    let mut digits = vec![0usize; length];

    loop {
        let code = Code::new(digits.iter().map(|&d| config.palette[d]).collect());
        if config.allow_repeats || !code.has_repeats() {
            codes.push(code);
        }

        // Odometer increment, last position fastest
        let Some(pos) = digits.iter().rposition(|&d| d + 1 < base) else {
            break;
        };
        digits[pos] += 1;
        digits[pos + 1..].iter_mut().for_each(|d| *d = 0);
    }

    codes
}

/// Solver that always plays the first code consistent with the history
pub struct Solver {
    codes: Vec<Code>,
}

impl Solver {
    /// Create a solver over every code the config allows
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            codes: all_codes(config),
        }
    }

    /// Get the next guess given previous attempts
    ///
    /// Returns `None` if no code is consistent with the history.
    #[must_use]
    pub fn next_guess(&self, history: &[Attempt]) -> Option<&Code> {
        self.codes.iter().find(|&code| is_consistent(code, history))
    }

    /// Codes that would have produced every observed feedback
    #[must_use]
    pub fn candidates(&self, history: &[Attempt]) -> Vec<&Code> {
        self.codes
            .iter()
            .filter(|&code| is_consistent(code, history))
            .collect()
    }

    /// Count how many candidates remain given the history
    #[must_use]
    pub fn count_candidates(&self, history: &[Attempt]) -> usize {
        self.codes
            .iter()
            .filter(|&code| is_consistent(code, history))
            .count()
    }
}

/// Scoring is symmetric, so the candidate can stand in as the secret
fn is_consistent(candidate: &Code, history: &[Attempt]) -> bool {
    history
        .iter()
        .all(|attempt| score(candidate, &attempt.guess).is_ok_and(|f| f == attempt.feedback))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, Feedback};
    use crate::game::GameState;

    #[test]
    fn all_codes_counts() {
        assert_eq!(all_codes(&GameConfig::default()).len(), 1296);

        let distinct = GameConfig {
            allow_repeats: false,
            ..GameConfig::default()
        };
        assert_eq!(all_codes(&distinct).len(), 360);
    }

    #[test]
    fn all_codes_lexicographic() {
        let config = GameConfig {
            palette: vec![Color::Red, Color::Blue],
            code_length: 2,
            ..GameConfig::default()
        };
        let codes: Vec<String> = all_codes(&config).iter().map(Code::compact).collect();
        assert_eq!(codes, vec!["RR", "RB", "BR", "BB"]);
    }

    #[test]
    fn empty_history_keeps_everything() {
        let solver = Solver::new(&GameConfig::default());
        assert_eq!(solver.count_candidates(&[]), 1296);
        assert_eq!(solver.next_guess(&[]).map(Code::compact), Some("RRRR".to_string()));
    }

    #[test]
    fn secret_is_always_a_candidate() {
        let secret: Code = "ybgr".parse().unwrap();
        let solver = Solver::new(&GameConfig::default());
        let history: Vec<Attempt> = ["rrbb", "gyop", "bgry"]
            .iter()
            .map(|s| {
                let guess: Code = s.parse().unwrap();
                let feedback = score(&secret, &guess).unwrap();
                Attempt::new(guess, feedback)
            })
            .collect();

        let candidates = solver.candidates(&history);
        assert!(candidates.contains(&&secret));
        assert!(candidates.len() < 1296);
        assert_eq!(candidates.len(), solver.count_candidates(&history));
    }

    #[test]
    fn contradictory_history_leaves_nothing() {
        let solver = Solver::new(&GameConfig::default());
        let history = [
            Attempt::new("rrrr".parse().unwrap(), Feedback::new(4, 0)),
            Attempt::new("bbbb".parse().unwrap(), Feedback::new(4, 0)),
        ];
        assert_eq!(solver.next_guess(&history), None);
    }

    #[test]
    fn auto_player_always_wins_eventually() {
        let config = GameConfig {
            max_attempts: 1296,
            ..GameConfig::default()
        };
        let solver = Solver::new(&config);

        for secret in all_codes(&config).into_iter().step_by(37) {
            let mut game = GameState::with_secret(config.clone(), secret).unwrap();
            while game.is_active() {
                let guess = solver.next_guess(game.history()).unwrap().clone();
                game.submit(guess).unwrap();
            }
            assert!(game.outcome().unwrap().won);
        }
    }
}
