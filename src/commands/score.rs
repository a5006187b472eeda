//! Score command
//!
//! Scores a single guess against a given secret.

use crate::core::{Code, Feedback, score};

/// Result of scoring one guess
#[derive(Debug)]
pub struct ScoreResult {
    pub secret: Code,
    pub guess: Code,
    pub feedback: Feedback,
}

/// Parse both codes and score the guess against the secret
///
/// # Errors
///
/// Returns an error if either code fails to parse or their lengths differ.
pub fn score_codes(secret: &str, guess: &str) -> Result<ScoreResult, String> {
    let secret: Code = secret
        .parse()
        .map_err(|e| format!("Invalid secret: {e}"))?;
    let guess: Code = guess.parse().map_err(|e| format!("Invalid guess: {e}"))?;
    let feedback = score(&secret, &guess).map_err(|e| e.to_string())?;

    Ok(ScoreResult {
        secret,
        guess,
        feedback,
    })
}
