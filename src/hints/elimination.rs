//! Color elimination
//!
//! A color guessed more than twice whose attempts never earned a single peg
//! is probably not in the secret.

use super::Hint;
use crate::core::Color;
use crate::game::Attempt;
use rustc_hash::FxHashMap;

/// Appearances must exceed this before a color can be ruled out
const MIN_APPEARANCES: usize = 2;

#[derive(Debug, Clone, Copy, Default)]
struct ColorTally {
    appearances: usize,
    /// black + white of every attempt containing the color, once per attempt
    feedback: usize,
}

pub(super) fn analyze(history: &[Attempt]) -> Vec<Hint> {
    let mut tallies: FxHashMap<Color, ColorTally> = FxHashMap::default();

    for attempt in history {
        for (color, count) in attempt.guess.color_counts() {
            let tally = tallies.entry(color).or_default();
            tally.appearances += count;
            tally.feedback += attempt.feedback.total();
        }
    }

    Color::ALL
        .into_iter()
        .filter(|color| {
            tallies
                .get(color)
                .is_some_and(|t| t.appearances > MIN_APPEARANCES && t.feedback == 0)
        })
        .map(|color| Hint::LikelyAbsent { color })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, Feedback};

    fn attempt(guess: &str, black: usize, white: usize) -> Attempt {
        Attempt::new(guess.parse::<Code>().unwrap(), Feedback::new(black, white))
    }

    #[test]
    fn two_appearances_are_not_enough() {
        let history = [attempt("rrbb", 0, 0)];
        assert!(analyze(&history).is_empty());
    }

    #[test]
    fn three_silent_appearances_eliminate() {
        let history = [attempt("rrbb", 0, 0), attempt("rgyy", 0, 0)];
        assert_eq!(
            analyze(&history),
            vec![Hint::LikelyAbsent { color: Color::Red }]
        );
    }

    #[test]
    fn any_feedback_in_a_containing_attempt_clears_the_color() {
        let history = [attempt("rrrr", 0, 0), attempt("rggg", 1, 0)];
        // Red was in an attempt that scored, green appeared three times in it
        assert!(analyze(&history).is_empty());
    }

    #[test]
    fn results_follow_palette_order() {
        let history = [attempt("oooy", 0, 0), attempt("yyyo", 0, 0)];
        assert_eq!(
            analyze(&history),
            vec![
                Hint::LikelyAbsent {
                    color: Color::Yellow
                },
                Hint::LikelyAbsent {
                    color: Color::Orange
                },
            ]
        );
    }
}
