//! Game configuration

use crate::core::{Color, EngineError};

/// Longest code a game may use; the solver enumerates palette^length codes
pub const MAX_CODE_LENGTH: usize = 6;

/// Rules for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Colors available to secret and guesses
    pub palette: Vec<Color>,
    pub code_length: usize,
    pub max_attempts: usize,
    /// Whether the secret may repeat colors
    pub allow_repeats: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            palette: Color::ALL.to_vec(),
            code_length: 4,
            max_attempts: 10,
            allow_repeats: true,
        }
    }
}

impl GameConfig {
    /// Default rules with the palette cut to its first `size` colors
    ///
    /// Sizes beyond the full palette are kept as-is so that `validate`
    /// can report them.
    #[must_use]
    pub fn with_palette_size(size: usize) -> Self {
        Self {
            palette: Color::ALL.iter().copied().cycle().take(size).collect(),
            ..Self::default()
        }
    }

    /// Check that a game can be played under these rules
    ///
    /// # Errors
    /// - [`EngineError::InvalidConfig`] for a palette outside 2..=6 colors,
    ///   a palette with duplicates, a code length outside
    ///   1..=[`MAX_CODE_LENGTH`], or zero attempts
    /// - [`EngineError::Configuration`] when repeats are disallowed and the
    ///   code is longer than the palette
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.palette.len() < 2 {
            return Err(EngineError::InvalidConfig("palette needs at least 2 colors"));
        }
        if self.palette.len() > Color::ALL.len() {
            return Err(EngineError::InvalidConfig("palette has at most 6 colors"));
        }
        if self
            .palette
            .iter()
            .enumerate()
            .any(|(i, c)| self.palette[i + 1..].contains(c))
        {
            return Err(EngineError::InvalidConfig("palette colors must be distinct"));
        }
        if self.code_length == 0 {
            return Err(EngineError::InvalidConfig("code length must be positive"));
        }
        if self.code_length > MAX_CODE_LENGTH {
            return Err(EngineError::InvalidConfig("code length must be at most 6"));
        }
        if self.max_attempts == 0 {
            return Err(EngineError::InvalidConfig("at least one attempt is required"));
        }
        if !self.allow_repeats && self.code_length > self.palette.len() {
            return Err(EngineError::Configuration {
                code_length: self.code_length,
                palette_size: self.palette.len(),
            });
        }
        Ok(())
    }
}
