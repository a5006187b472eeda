//! Game session
//!
//! Configuration, secret generation, the per-game state machine and the
//! cross-game statistics record.

mod config;
pub mod secret;
mod state;
mod stats;

pub use config::{GameConfig, MAX_CODE_LENGTH};
pub use secret::generate;
pub use state::{Attempt, GameState, Outcome};
pub use stats::Stats;
