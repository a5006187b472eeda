//! Per-game state
//!
//! Owns the secret and the attempt history, and decides when the game ends.

use super::{GameConfig, generate};
use crate::core::{Code, EngineError, Feedback, score};
use crate::hints::{Hint, hint};
use rand::Rng;
use tracing::{debug, info};

/// One submitted guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Code,
    pub feedback: Feedback,
}

impl Attempt {
    #[must_use]
    pub const fn new(guess: Code, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }
}

/// End-of-game result reported to the stats record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub won: bool,
    pub attempts_used: usize,
}

/// State of a single game
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    secret: Code,
    history: Vec<Attempt>,
    active: bool,
}

impl GameState {
    /// Start a game with a freshly generated secret
    ///
    /// # Errors
    /// Returns an error if the configuration is unplayable.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, EngineError> {
        config.validate()?;
        let secret = generate(
            &config.palette,
            config.code_length,
            config.allow_repeats,
            rng,
        )?;
        debug!(secret = %secret.compact(), "generated secret");
        Ok(Self::start(config, secret))
    }

    /// Start a game with a known secret
    ///
    /// # Errors
    /// Returns an error if the configuration is unplayable, or the secret
    /// has the wrong length or uses colors outside the palette.
    pub fn with_secret(config: GameConfig, secret: Code) -> Result<Self, EngineError> {
        config.validate()?;
        check_code(&config, &secret)?;
        Ok(Self::start(config, secret))
    }

    fn start(config: GameConfig, secret: Code) -> Self {
        Self {
            config,
            secret,
            history: Vec::new(),
            active: true,
        }
    }

    /// Score a guess and record it
    ///
    /// The game ends on an exact match or once `max_attempts` guesses
    /// have been made.
    ///
    /// # Errors
    /// - [`EngineError::GameOver`] if the game already ended
    /// - [`EngineError::InvalidLength`] if the guess has the wrong length
    /// - [`EngineError::ColorNotInPalette`] if the guess uses an unknown color
    pub fn submit(&mut self, guess: Code) -> Result<&Attempt, EngineError> {
        if !self.active {
            return Err(EngineError::GameOver);
        }
        check_code(&self.config, &guess)?;

        let feedback = score(&self.secret, &guess)?;
        debug!(
            attempt = self.history.len() + 1,
            guess = %guess.compact(),
            black = feedback.black,
            white = feedback.white,
            "scored guess"
        );
        self.history.push(Attempt::new(guess, feedback));

        let won = feedback.is_solved(self.config.code_length);
        if won || self.history.len() >= self.config.max_attempts {
            self.active = false;
            info!(won, attempts = self.history.len(), "game over");
        }

        Ok(&self.history[self.history.len() - 1])
    }

    /// Hints for the current history
    ///
    /// # Errors
    /// Returns [`EngineError::InsufficientHistory`] before the first guess.
    pub fn hints(&self) -> Result<Vec<Hint>, EngineError> {
        hint(&self.history)
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Guesses left before the game is lost
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.history.len())
    }

    /// The result, once the game is over
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if self.active {
            return None;
        }
        Some(Outcome {
            won: self
                .history
                .last()
                .is_some_and(|a| a.feedback.is_solved(self.config.code_length)),
            attempts_used: self.history.len(),
        })
    }

    /// The secret, hidden until the game is over
    #[must_use]
    pub const fn revealed_secret(&self) -> Option<&Code> {
        if self.active { None } else { Some(&self.secret) }
    }
}

fn check_code(config: &GameConfig, code: &Code) -> Result<(), EngineError> {
    if code.len() != config.code_length {
        return Err(EngineError::InvalidLength {
            expected: config.code_length,
            actual: code.len(),
        });
    }
    if let Some(&color) = code.colors().iter().find(|c| !config.palette.contains(c)) {
        return Err(EngineError::ColorNotInPalette(color));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn parse(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn win_on_second_guess() {
        let mut game = GameState::with_secret(GameConfig::default(), parse("rbgy")).unwrap();

        let first = game.submit(parse("brgy")).unwrap();
        assert_eq!(first.feedback, Feedback::new(2, 2));
        assert!(game.is_active());
        assert!(game.outcome().is_none());
        assert!(game.revealed_secret().is_none());

        let second = game.submit(parse("rbgy")).unwrap();
        assert_eq!(second.feedback, Feedback::new(4, 0));
        assert!(!game.is_active());
        assert_eq!(
            game.outcome(),
            Some(Outcome {
                won: true,
                attempts_used: 2
            })
        );
        assert_eq!(game.revealed_secret(), Some(&parse("rbgy")));
    }

    #[test]
    fn loss_after_max_attempts() {
        let config = GameConfig {
            max_attempts: 3,
            ..GameConfig::default()
        };
        let mut game = GameState::with_secret(config, parse("rrrr")).unwrap();

        for _ in 0..3 {
            game.submit(parse("bbbb")).unwrap();
        }

        assert_eq!(
            game.outcome(),
            Some(Outcome {
                won: false,
                attempts_used: 3
            })
        );
        assert_eq!(game.attempts_remaining(), 0);
        assert_eq!(game.submit(parse("rrrr")), Err(EngineError::GameOver));
    }

    #[test]
    fn winning_on_last_attempt_counts_as_win() {
        let config = GameConfig {
            max_attempts: 2,
            ..GameConfig::default()
        };
        let mut game = GameState::with_secret(config, parse("rbgy")).unwrap();
        game.submit(parse("oooo")).unwrap();
        game.submit(parse("rbgy")).unwrap();
        assert_eq!(game.outcome().map(|o| o.won), Some(true));
    }

    #[test]
    fn wrong_length_guess_is_rejected_without_using_an_attempt() {
        let mut game = GameState::with_secret(GameConfig::default(), parse("rbgy")).unwrap();
        assert_eq!(
            game.submit(parse("rbg")),
            Err(EngineError::InvalidLength {
                expected: 4,
                actual: 3
            })
        );
        assert!(game.history().is_empty());
        assert_eq!(game.attempts_remaining(), 10);
    }

    #[test]
    fn guess_outside_palette_is_rejected() {
        let config = GameConfig::with_palette_size(4);
        let mut game = GameState::with_secret(config, parse("rbgy")).unwrap();
        assert_eq!(
            game.submit(parse("rbgo")),
            Err(EngineError::ColorNotInPalette(Color::Orange))
        );
    }

    #[test]
    fn secret_must_fit_config() {
        assert!(GameState::with_secret(GameConfig::default(), parse("rbg")).is_err());
        assert!(GameState::with_secret(GameConfig::with_palette_size(2), parse("rbgy")).is_err());
    }

    #[test]
    fn generated_game_respects_repeat_policy() {
        let config = GameConfig {
            allow_repeats: false,
            ..GameConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let mut game = GameState::new(config.clone(), &mut rng).unwrap();
            // Reveal by exhausting attempts
            while game.is_active() {
                game.submit(parse("rrrr")).unwrap();
            }
            let secret = game.revealed_secret().unwrap();
            assert!(secret.len() == 4 && !secret.has_repeats());
        }
    }

    #[test]
    fn unplayable_config_fails_to_start() {
        let config = GameConfig {
            palette: Color::ALL[..3].to_vec(),
            allow_repeats: false,
            ..GameConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(12);
        assert!(matches!(
            GameState::new(config, &mut rng),
            Err(EngineError::Configuration { .. })
        ));
    }

    #[test]
    fn hints_require_a_guess() {
        let mut game = GameState::with_secret(GameConfig::default(), parse("rbgy")).unwrap();
        assert_eq!(game.hints(), Err(EngineError::InsufficientHistory));
        game.submit(parse("oopp")).unwrap();
        assert!(!game.hints().unwrap().is_empty());
    }
}
