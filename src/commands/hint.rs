//! Hint command
//!
//! Replays a list of guesses against a known secret and reports the hints
//! the history supports.

use crate::core::Code;
use crate::game::{Attempt, GameConfig, GameState, Outcome};
use crate::hints::Hint;
use crate::solver::Solver;

/// Candidate codes listed in a report at most
const MAX_LISTED_CANDIDATES: usize = 10;

/// Replayed history with its hints
#[derive(Debug)]
pub struct HintReport {
    pub history: Vec<Attempt>,
    pub hints: Vec<Hint>,
    /// Set when the replay ended the game
    pub outcome: Option<Outcome>,
    /// Codes still consistent with the history
    pub remaining: usize,
    /// The first few of those codes, in palette order
    pub candidates: Vec<Code>,
}

/// Replay `guesses` in order against `secret` and derive hints
///
/// # Errors
///
/// Returns an error if:
/// - The secret or a guess fails to parse or does not fit the config
/// - No guesses are given
/// - The game ends before every guess was played
pub fn analyze_guesses(
    config: GameConfig,
    secret: &str,
    guesses: &[String],
) -> Result<HintReport, String> {
    let secret: Code = secret
        .parse()
        .map_err(|e| format!("Invalid secret: {e}"))?;
    let mut game = GameState::with_secret(config, secret).map_err(|e| e.to_string())?;

    for (i, text) in guesses.iter().enumerate() {
        let guess: Code = text
            .parse()
            .map_err(|e| format!("Invalid guess {}: {e}", i + 1))?;
        game.submit(guess)
            .map_err(|e| format!("Guess {}: {e}", i + 1))?;
    }

    let hints = game.hints().map_err(|e| e.to_string())?;
    let solver = Solver::new(game.config());
    let candidates = solver.candidates(game.history());

    Ok(HintReport {
        history: game.history().to_vec(),
        hints,
        outcome: game.outcome(),
        remaining: candidates.len(),
        candidates: candidates
            .into_iter()
            .take(MAX_LISTED_CANDIDATES)
            .cloned()
            .collect(),
    })
}
