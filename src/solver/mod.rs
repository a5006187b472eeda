//! Consistent-guess solver
//!
//! Enumerates every code a game allows and narrows it down with the
//! attempt history. Drives the benchmark auto-player.

mod engine;

pub use engine::{Solver, all_codes};
