//! Benchmark command
//!
//! Plays many seeded games with the consistent-guess solver and collects
//! the same statistics a human player accumulates.

use crate::core::EngineError;
use crate::game::{GameConfig, GameState, Outcome, Stats};
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub stats: Stats,
    /// Number of won games per attempt count
    pub distribution: BTreeMap<usize, usize>,
    pub max_attempts: usize,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play `games` games, game `i` seeded with `seed + i`
///
/// # Errors
///
/// Returns an error if the configuration is unplayable.
pub fn run_benchmark(
    config: &GameConfig,
    games: usize,
    seed: u64,
    show_progress: bool,
) -> Result<BenchmarkResult, String> {
    config.validate().map_err(|e| e.to_string())?;

    let solver = Solver::new(config);
    let pb = if show_progress {
        ProgressBar::new(games as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {eta}")
            .map_err(|e| e.to_string())?
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let outcomes: Vec<Outcome> = (0..games as u64)
        .into_par_iter()
        .map(|i| {
            let outcome = play_game(config, &solver, seed.wrapping_add(i));
            pb.inc(1);
            outcome
        })
        .collect::<Result<Vec<_>, EngineError>>()
        .map_err(|e| e.to_string())?;
    pb.finish_and_clear();
    let duration = start.elapsed();

    let stats = outcomes
        .par_iter()
        .fold(Stats::default, |mut stats, &outcome| {
            stats.record(outcome);
            stats
        })
        .reduce(Stats::default, Stats::merge);

    let mut distribution = BTreeMap::new();
    for outcome in outcomes.iter().filter(|o| o.won) {
        *distribution.entry(outcome.attempts_used).or_insert(0) += 1;
    }

    info!(
        games,
        wins = stats.wins,
        elapsed_ms = duration.as_millis() as u64,
        "benchmark finished"
    );

    Ok(BenchmarkResult {
        stats,
        distribution,
        max_attempts: config.max_attempts,
        duration,
        games_per_second: games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

/// One full game driven by the solver
fn play_game(config: &GameConfig, solver: &Solver, seed: u64) -> Result<Outcome, EngineError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = GameState::new(config.clone(), &mut rng)?;

    while game.is_active() {
        let Some(guess) = solver.next_guess(game.history()) else {
            break;
        };
        game.submit(guess.clone())?;
    }

    Ok(game.outcome().unwrap_or(Outcome {
        won: false,
        attempts_used: game.history().len(),
    }))
}
