//! Pairwise attempt comparison
//!
//! Two attempts that differ in one peg, or in one swapped pair of pegs,
//! isolate the effect of that change on the feedback.

use super::Hint;
use crate::core::Color;
use crate::game::Attempt;

/// A position where two guesses disagree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Change {
    position: usize,
    from: Color,
    to: Color,
}

/// Compare every earlier attempt with every later one
pub(super) fn compare_all(history: &[Attempt]) -> Vec<Hint> {
    history
        .iter()
        .enumerate()
        .flat_map(|(i, earlier)| {
            history[i + 1..]
                .iter()
                .filter_map(move |later| compare(earlier, later))
        })
        .collect()
}

/// Deduction from going `earlier` -> `later`, if the change is isolated
fn compare(earlier: &Attempt, later: &Attempt) -> Option<Hint> {
    let changes = changes(earlier, later);
    let (before, after) = (earlier.feedback, later.feedback);

    match changes.as_slice() {
        &[Change { position, from, to }] => {
            if after.black == before.black + 1 {
                Some(Hint::NewColorCorrect { position, from, to })
            } else if before.black == after.black + 1 {
                Some(Hint::OldColorCorrect { position, from, to })
            } else if after.black == before.black && after.white == before.white + 1 {
                Some(Hint::ColorMisplaced {
                    position,
                    color: to,
                })
            } else {
                None
            }
        }
        &[a, b] if a.from == b.to && a.to == b.from => {
            let (first, second) = (a.position, b.position);
            if after.black == before.black + 2 {
                Some(Hint::SwapNowCorrect { first, second })
            } else if before.black == after.black + 2 {
                Some(Hint::SwapWasCorrect { first, second })
            } else {
                None
            }
        }
        _ => None,
    }
}

fn changes(earlier: &Attempt, later: &Attempt) -> Vec<Change> {
    earlier
        .guess
        .colors()
        .iter()
        .zip(later.guess.colors())
        .enumerate()
        .filter(|(_, (from, to))| from != to)
        .map(|(position, (&from, &to))| Change { position, from, to })
        .collect()
}
