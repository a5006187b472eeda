//! Hint inference
//!
//! Turns the attempt history into short deductions for the player. Three
//! analyses run in priority order:
//! 1. Pairwise comparison of attempts that differ by one change or one swap
//! 2. Position confidence from repeated (position, color) choices
//! 3. Elimination of colors that never earned a peg
//!
//! Only the first [`MAX_HINTS`] deductions are returned.

mod elimination;
mod pairwise;
mod positions;

use crate::core::{Color, EngineError};
use crate::game::Attempt;
use std::fmt;

/// Maximum number of hints returned per request
pub const MAX_HINTS: usize = 3;

/// A single deduction
///
/// Positions are zero-based; the text form numbers them from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// Changing one peg gained a black peg: the new color belongs there
    NewColorCorrect {
        position: usize,
        from: Color,
        to: Color,
    },
    /// Changing one peg lost a black peg: the old color belonged there
    OldColorCorrect {
        position: usize,
        from: Color,
        to: Color,
    },
    /// Changing one peg gained a white peg: the new color belongs elsewhere
    ColorMisplaced { position: usize, color: Color },
    /// Swapping two pegs gained two black pegs
    SwapNowCorrect { first: usize, second: usize },
    /// Swapping two pegs lost two black pegs
    SwapWasCorrect { first: usize, second: usize },
    /// Guesses with this color here have done better than the first one did
    LikelyPosition { position: usize, color: Color },
    /// Guessed repeatedly without ever earning a peg
    LikelyAbsent { color: Color },
    /// Nothing could be deduced yet
    VaryGuesses,
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NewColorCorrect { position, from, to } => write!(
                f,
                "Changing position {} from {from} to {to} earned an extra black peg. {to} is correct at position {}!",
                position + 1,
                position + 1
            ),
            Self::OldColorCorrect { position, from, to } => write!(
                f,
                "Changing position {} from {from} to {to} cost a black peg. {from} was correct at position {}!",
                position + 1,
                position + 1
            ),
            Self::ColorMisplaced { position, color } => write!(
                f,
                "{color} is in the code, but not at position {}.",
                position + 1
            ),
            Self::SwapNowCorrect { first, second } => write!(
                f,
                "Swapping positions {} and {} earned 2 black pegs. Both colors are now in place!",
                first + 1,
                second + 1
            ),
            Self::SwapWasCorrect { first, second } => write!(
                f,
                "Swapping positions {} and {} cost 2 black pegs. Both colors were in place before!",
                first + 1,
                second + 1
            ),
            Self::LikelyPosition { position, color } => write!(
                f,
                "Position {} seems more likely to be {color} based on your attempts.",
                position + 1
            ),
            Self::LikelyAbsent { color } => write!(
                f,
                "{color} doesn't appear to be in the secret code based on your attempts."
            ),
            Self::VaryGuesses => write!(
                f,
                "Try varying your guesses more to learn about different colors and positions."
            ),
        }
    }
}

/// Derive up to [`MAX_HINTS`] hints from the attempt history
///
/// Pairwise hints come first, then position hints, then elimination hints,
/// each in discovery order. If none apply, a single [`Hint::VaryGuesses`]
/// is returned.
///
/// # Errors
/// Returns [`EngineError::InsufficientHistory`] for an empty history.
///
/// # Examples
/// ```
/// use mastermind::core::{Code, score};
/// use mastermind::game::Attempt;
/// use mastermind::hints::{Hint, hint};
///
/// let secret: Code = "rbgy".parse().unwrap();
/// let history: Vec<Attempt> = ["rbpp", "rbgp"]
///     .iter()
///     .map(|s| {
///         let guess: Code = s.parse().unwrap();
///         let feedback = score(&secret, &guess).unwrap();
///         Attempt::new(guess, feedback)
///     })
///     .collect();
///
/// let hints = hint(&history).unwrap();
/// assert!(matches!(hints[0], Hint::NewColorCorrect { position: 2, .. }));
/// ```
pub fn hint(history: &[Attempt]) -> Result<Vec<Hint>, EngineError> {
    if history.is_empty() {
        return Err(EngineError::InsufficientHistory);
    }

    let mut hints: Vec<Hint> = pairwise::compare_all(history)
        .into_iter()
        .chain(positions::analyze(history))
        .chain(elimination::analyze(history))
        .take(MAX_HINTS)
        .collect();

    if hints.is_empty() {
        hints.push(Hint::VaryGuesses);
    }

    Ok(hints)
}
