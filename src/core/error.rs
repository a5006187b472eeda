//! Engine error type

use super::Color;
use std::fmt;

/// Errors raised by scoring, generation, hinting and the game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Guess and secret (or config) lengths disagree
    InvalidLength { expected: usize, actual: usize },
    /// Hint requested before any attempt was made
    InsufficientHistory,
    /// Distinct-color code longer than the palette
    Configuration {
        code_length: usize,
        palette_size: usize,
    },
    /// Any other unusable game configuration
    InvalidConfig(&'static str),
    /// Guess submitted after the game ended
    GameOver,
    /// Guess uses a color outside the game's palette
    ColorNotInPalette(Color),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "Code must be exactly {expected} colors, got {actual}")
            }
            Self::InsufficientHistory => {
                write!(f, "Make at least one guess before requesting a hint")
            }
            Self::Configuration {
                code_length,
                palette_size,
            } => write!(
                f,
                "Cannot build a {code_length}-peg code without repeats from {palette_size} colors"
            ),
            Self::InvalidConfig(reason) => write!(f, "Invalid game configuration: {reason}"),
            Self::GameOver => write!(f, "The game is over; start a new one"),
            Self::ColorNotInPalette(color) => {
                write!(f, "Color {color} is not part of this game's palette")
            }
        }
    }
}

impl std::error::Error for EngineError {}
