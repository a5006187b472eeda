//! Command implementations

pub mod benchmark;
pub mod hint;
pub mod play;
pub mod score;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use hint::{HintReport, analyze_guesses};
pub use play::run_play;
pub use score::{ScoreResult, score_codes};
