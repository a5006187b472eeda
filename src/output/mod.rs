//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_attempt, print_benchmark_result, print_game_end, print_hint_report, print_hints,
    print_history, print_rules, print_score_result, print_stats,
};
