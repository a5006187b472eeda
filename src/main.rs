//! Mastermind - CLI
//!
//! Play Mastermind in the terminal, score codes, replay guesses for hints,
//! or benchmark the consistent-guess solver.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{analyze_guesses, run_benchmark, run_play, score_codes},
    game::GameConfig,
    logging::init_tracing,
    output::{print_benchmark_result, print_hint_report, print_score_result},
};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code-breaking game with deduction hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of colors in play, taken from: red blue green yellow purple orange
    #[arg(short, long, global = true, default_value_t = 6)]
    colors: usize,

    /// Pegs per code
    #[arg(short, long, global = true, default_value_t = 4)]
    length: usize,

    /// Guesses allowed per game
    #[arg(short, long, global = true, default_value_t = 10)]
    max_attempts: usize,

    /// Secret codes never repeat a color
    #[arg(long, global = true)]
    no_repeats: bool,

    /// Seed for reproducible secrets
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play,

    /// Score one guess against a secret
    Score {
        /// The secret code, e.g. rbgy or "red,blue,green,yellow"
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Replay guesses against a secret and show the hints they support
    Hint {
        /// The secret code
        secret: String,

        /// Guesses in the order they were made
        #[arg(required = true)]
        guesses: Vec<String>,
    },

    /// Play many games with the solver and report statistics
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            code_length: self.length,
            max_attempts: self.max_attempts,
            allow_repeats: !self.no_repeats,
            ..GameConfig::with_palette_size(self.colors)
        }
    }
}

fn main() -> Result<()> {
    init_tracing("warn").context("failed to initialise logging")?;
    run(&Cli::parse())
}

/// Dispatch a parsed command line
///
/// Only commands that set up a game check the game config, so `score`
/// works whatever the global options say.
fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Score { secret, guess }) => {
            let result = score_codes(secret, guess).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result);
            Ok(())
        }
        Some(Commands::Hint { secret, guesses }) => {
            let config = cli.game_config();
            let code_length = config.code_length;
            let report =
                analyze_guesses(config, secret, guesses).map_err(|e| anyhow::anyhow!(e))?;
            print_hint_report(&report, code_length);
            Ok(())
        }
        Some(Commands::Benchmark { count }) => {
            let config = cli.game_config();
            config.validate()?;
            println!("Running benchmark on {count} games...");
            let result = run_benchmark(&config, *count, cli.seed.unwrap_or(0), true)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_benchmark_result(&result);
            Ok(())
        }
        Some(Commands::Play) | None => {
            run_play(&cli.game_config(), cli.seed).map_err(|e| anyhow::anyhow!(e))?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("mastermind").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn score_ignores_game_options() {
        let cli = parse(&["-c", "1", "score", "rbgy", "rbgy"]);
        assert!(run(&cli).is_ok());

        let cli = parse(&["-l", "9", "--no-repeats", "score", "rbgyp", "prbgy"]);
        assert!(run(&cli).is_ok());
    }

    #[test]
    fn game_commands_still_check_the_config() {
        let cli = parse(&["-c", "1", "benchmark", "-n", "1"]);
        assert!(run(&cli).is_err());

        let cli = parse(&["-c", "1", "hint", "rbgy", "rbgy"]);
        assert!(run(&cli).is_err());
    }

    #[test]
    fn hint_uses_the_global_options() {
        let cli = parse(&["-l", "3", "hint", "rbg", "rbp"]);
        assert!(run(&cli).is_ok());

        let cli = parse(&["-l", "3", "hint", "rbgy", "rbpp"]);
        assert!(run(&cli).is_err());
    }
}
