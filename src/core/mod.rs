//! Core domain types for Mastermind
//!
//! Colors, codes and feedback, plus the scoring rule that ties them together.
//! Everything here is pure and free of game-session state.

mod code;
mod color;
mod error;
mod feedback;

pub use code::{Code, CodeError};
pub use color::Color;
pub use error::EngineError;
pub use feedback::{Feedback, score};
