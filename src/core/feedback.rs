//! Mastermind feedback calculation
//!
//! Feedback is a pair of peg counts:
//! - black = right color in the right position
//! - white = right color in the wrong position, counted only against the
//!   pegs left over after black matches

use super::{Code, EngineError};
use std::fmt;

/// Black/white peg counts for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    pub black: usize,
    pub white: usize,
}

impl Feedback {
    #[must_use]
    pub const fn new(black: usize, white: usize) -> Self {
        Self { black, white }
    }

    /// Total pegs awarded (black + white)
    #[inline]
    #[must_use]
    pub const fn total(self) -> usize {
        self.black + self.white
    }

    /// Check if every one of `code_length` positions matched exactly
    #[inline]
    #[must_use]
    pub const fn is_solved(self, code_length: usize) -> bool {
        self.black == code_length
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} black, {} white", self.black, self.white)
    }
}

/// Score `guess` against `secret`
///
/// # Algorithm
/// 1. First pass: every exact match is a black peg; both slots are consumed
/// 2. Second pass: each unconsumed guess peg takes the lowest-index
///    unconsumed secret peg of the same color, for a white peg
///
/// A secret peg is never counted twice and a guess peg never matches more
/// than one secret peg.
///
/// # Errors
/// Returns [`EngineError::InvalidLength`] if the codes differ in length.
///
/// # Examples
/// ```
/// use mastermind::core::{Code, Feedback, score};
///
/// let secret: Code = "rrbg".parse().unwrap();
/// let guess: Code = "rbrg".parse().unwrap();
/// assert_eq!(score(&secret, &guess).unwrap(), Feedback::new(2, 2));
/// ```
pub fn score(secret: &Code, guess: &Code) -> Result<Feedback, EngineError> {
    if secret.len() != guess.len() {
        return Err(EngineError::InvalidLength {
            expected: secret.len(),
            actual: guess.len(),
        });
    }

    let mut secret_left: Vec<_> = secret.colors().iter().copied().map(Some).collect();
    let mut guess_left: Vec<_> = guess.colors().iter().copied().map(Some).collect();
    let mut feedback = Feedback::default();

    // First pass: exact matches
    for (s, g) in secret_left.iter_mut().zip(guess_left.iter_mut()) {
        if s == g {
            feedback.black += 1;
            *s = None;
            *g = None;
        }
    }

    // Second pass: first remaining secret slot of the same color
    for color in guess_left.into_iter().flatten() {
        if let Some(slot) = secret_left.iter_mut().find(|s| **s == Some(color)) {
            feedback.white += 1;
            *slot = None;
        }
    }

    Ok(feedback)
}
