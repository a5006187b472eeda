//! Position confidence
//!
//! For each (position, color) pair guessed at least twice, compare the mean
//! black count of those attempts with the black count of the first one.
//! This is a correlation signal, not a proof.

use super::Hint;
use crate::core::Color;
use crate::game::Attempt;
use rustc_hash::FxHashMap;

/// Black-peg tally for one color at one position
#[derive(Debug, Clone, Copy)]
struct Tally {
    count: usize,
    black_sum: usize,
    first_black: usize,
}

pub(super) fn analyze(history: &[Attempt]) -> Vec<Hint> {
    let code_length = history.iter().map(|a| a.guess.len()).max().unwrap_or(0);
    let mut hints = Vec::new();

    for position in 0..code_length {
        let mut order: Vec<Color> = Vec::new();
        let mut tallies: FxHashMap<Color, Tally> = FxHashMap::default();

        for attempt in history {
            let Some(&color) = attempt.guess.colors().get(position) else {
                continue;
            };
            let black = attempt.feedback.black;
            tallies
                .entry(color)
                .and_modify(|t| {
                    t.count += 1;
                    t.black_sum += black;
                })
                .or_insert_with(|| {
                    order.push(color);
                    Tally {
                        count: 1,
                        black_sum: black,
                        first_black: black,
                    }
                });
        }

        // mean > first  <=>  sum > first * count
        hints.extend(
            order
                .into_iter()
                .filter(|color| {
                    let t = tallies[color];
                    t.count >= 2 && t.black_sum > t.first_black * t.count
                })
                .map(|color| Hint::LikelyPosition { position, color }),
        );
    }

    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, Feedback};

    fn attempt(guess: &str, black: usize) -> Attempt {
        Attempt::new(guess.parse::<Code>().unwrap(), Feedback::new(black, 0))
    }

    #[test]
    fn single_use_gives_no_signal() {
        let history = [attempt("rbgy", 1), attempt("yrbg", 3)];
        assert!(analyze(&history).is_empty());
    }

    #[test]
    fn rising_mean_flags_position() {
        let history = [attempt("rbgy", 0), attempt("rgyb", 2)];
        assert_eq!(
            analyze(&history),
            vec![Hint::LikelyPosition {
                position: 0,
                color: Color::Red
            }]
        );
    }

    #[test]
    fn flat_or_falling_mean_is_ignored() {
        let flat = [attempt("rbgy", 1), attempt("rgyb", 1)];
        assert!(analyze(&flat).is_empty());

        let falling = [attempt("rbgy", 2), attempt("rgyb", 1)];
        assert!(analyze(&falling).is_empty());
    }

    #[test]
    fn baseline_is_the_first_attempt_only() {
        // Blacks 1, 0, 3: mean 4/3 beats the first attempt's 1 even though
        // the second attempt did worse
        let history = [attempt("rbgy", 1), attempt("rgyb", 0), attempt("rybg", 3)];
        assert_eq!(
            analyze(&history),
            vec![Hint::LikelyPosition {
                position: 0,
                color: Color::Red
            }]
        );
    }

    #[test]
    fn exact_mean_comparison() {
        // Blacks 1, 1, 2: mean 4/3 > 1
        let history = [attempt("rbgy", 1), attempt("rgyb", 1), attempt("rybg", 2)];
        assert_eq!(analyze(&history).len(), 1);
    }

    #[test]
    fn positions_then_first_appearance_order() {
        let history = [
            attempt("gbpp", 0),
            attempt("rbpp", 0),
            attempt("rbpy", 1),
            attempt("gbpy", 2),
        ];
        // pos 0: green (0, 2) rises, red (0, 1) rises; pos 1: blue rises;
        // pos 2: purple rises; pos 3: purple (0, 0) flat, yellow (1, 2) rises
        assert_eq!(
            analyze(&history),
            vec![
                Hint::LikelyPosition {
                    position: 0,
                    color: Color::Green
                },
                Hint::LikelyPosition {
                    position: 0,
                    color: Color::Red
                },
                Hint::LikelyPosition {
                    position: 1,
                    color: Color::Blue
                },
                Hint::LikelyPosition {
                    position: 2,
                    color: Color::Purple
                },
                Hint::LikelyPosition {
                    position: 3,
                    color: Color::Yellow
                },
            ]
        );
    }
}
