//! Interactive play mode
//!
//! Line-based game session: the player types codes, asks for hints, and
//! keeps a running stats record until they quit.

use crate::core::{Code, EngineError};
use crate::game::{GameConfig, GameState, Stats};
use crate::output::{
    print_attempt, print_game_end, print_hints, print_history, print_rules, print_stats,
};
use crate::solver::Solver;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};

/// Run the interactive play mode
///
/// With `seed`, the sequence of secrets is reproducible.
///
/// # Errors
///
/// Returns an error if the configuration is unplayable or there's an I/O
/// error reading user input.
pub fn run_play(config: &GameConfig, seed: Option<u64>) -> Result<Stats, String> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut game = GameState::new(config.clone(), &mut rng).map_err(|e| e.to_string())?;
    let mut stats = Stats::default();
    let solver = Solver::new(config);

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Mastermind - Break the Code                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_rules(config);

    loop {
        let prompt = format!(
            "Guess {}, {} left (or 'hint', 'history', 'stats', 'new', 'quit')",
            game.history().len() + 1,
            game.attempts_remaining()
        );
        let Some(input) = get_user_input(&prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(stats);
        };

        match input.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(stats);
            }
            "hint" | "h" => match game.hints() {
                Ok(hints) => print_hints(&hints),
                Err(EngineError::InsufficientHistory) => {
                    println!("Make at least one guess before requesting a hint!\n");
                }
                Err(e) => println!("❌ {e}\n"),
            },
            "history" => {
                print_history(game.history(), config.code_length);
                if !game.history().is_empty() {
                    let remaining = solver.count_candidates(game.history());
                    println!("{remaining} possible codes still fit your feedback.\n");
                }
            }
            "stats" => print_stats(&stats),
            "rules" | "help" | "?" => print_rules(config),
            "new" | "n" => {
                game = GameState::new(config.clone(), &mut rng).map_err(|e| e.to_string())?;
                println!("\n🔄 New game started!\n");
            }
            _ => {
                let guess: Code = match input.parse() {
                    Ok(code) => code,
                    Err(e) => {
                        println!("❌ {e}\n");
                        continue;
                    }
                };

                let number = game.history().len() + 1;
                match game.submit(guess) {
                    Ok(attempt) => print_attempt(number, attempt, config.code_length),
                    Err(e) => {
                        println!("❌ {e}\n");
                        continue;
                    }
                }

                if let Some(outcome) = game.outcome() {
                    stats.record(outcome);
                    print_game_end(&game, &stats);

                    match get_user_input("Play again? (yes/no)")?
                        .unwrap_or_default()
                        .to_lowercase()
                        .as_str()
                    {
                        "yes" | "y" => {
                            game = GameState::new(config.clone(), &mut rng)
                                .map_err(|e| e.to_string())?;
                            println!("\n🔄 New game started!\n");
                        }
                        _ => {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(stats);
                        }
                    }
                }
            }
        }
    }
}

/// Get user input with a prompt
///
/// Returns `None` once stdin is closed.
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| input.trim().to_string()))
}
