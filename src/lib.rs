//! Mastermind
//!
//! A Mastermind code-breaking game: secret generation, black/white peg
//! scoring, and hints deduced from the history of guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, Feedback, score};
//! use mastermind::game::{GameConfig, GameState};
//!
//! let secret: Code = "rbgy".parse().unwrap();
//! let mut game = GameState::with_secret(GameConfig::default(), secret).unwrap();
//!
//! let attempt = game.submit("brgy".parse().unwrap()).unwrap();
//! assert_eq!(attempt.feedback, Feedback::new(2, 2));
//!
//! for hint in game.hints().unwrap() {
//!     println!("{hint}");
//! }
//! ```

// Core domain types
pub mod core;

// Game session and statistics
pub mod game;

// Hint inference
pub mod hints;

// Consistent-guess solver
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing subscriber setup
pub mod logging;
