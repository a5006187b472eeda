//! Code representation
//!
//! A Code is an ordered, fully populated sequence of colors. Secrets and
//! guesses share the type; the game session decides which is which.

use super::Color;
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// An ordered sequence of peg colors
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code(Vec<Color>);

/// Error type for unparseable codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    Empty,
    UnknownColor(String),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Code must contain at least one color"),
            Self::UnknownColor(token) => write!(
                f,
                "Unknown color '{token}' (use names, initials r/b/g/y/p/o, or digits 1-6)"
            ),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    #[must_use]
    pub const fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    /// Number of pegs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The pegs in order
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    /// True when at least one color occurs more than once
    #[must_use]
    pub fn has_repeats(&self) -> bool {
        self.0
            .iter()
            .enumerate()
            .any(|(i, color)| self.0[i + 1..].contains(color))
    }

    /// Occurrences of each color in the code
    pub(crate) fn color_counts(&self) -> FxHashMap<Color, usize> {
        let mut counts = FxHashMap::default();
        for &color in &self.0 {
            *counts.entry(color).or_insert(0) += 1;
        }
        counts
    }

    /// Compact uppercase form, one initial per peg (e.g. "RBGY")
    #[must_use]
    pub fn compact(&self) -> String {
        self.0
            .iter()
            .map(|c| c.initial().to_ascii_uppercase())
            .collect()
    }
}

impl From<Vec<Color>> for Code {
    fn from(colors: Vec<Color>) -> Self {
        Self(colors)
    }
}

impl<const N: usize> From<[Color; N]> for Code {
    fn from(colors: [Color; N]) -> Self {
        Self(colors.to_vec())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = CodeError;

    /// Parse a code
    ///
    /// Accepts either a compact string with one initial or digit per peg
    /// ("rbgy", "1234") or color tokens separated by commas or whitespace
    /// ("red, blue, green, yellow").
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Color};
    ///
    /// let compact: Code = "rbgy".parse().unwrap();
    /// let named: Code = "red blue green yellow".parse().unwrap();
    /// assert_eq!(compact, named);
    /// assert_eq!(compact.colors()[3], Color::Yellow);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CodeError::Empty);
        }

        let is_list = trimmed.contains(|c: char| c == ',' || c.is_whitespace())
            || Color::ALL.iter().any(|c| c.name().eq_ignore_ascii_case(trimmed));
        let colors = if is_list {
            trimmed
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .map(|token| {
                    token
                        .parse::<Color>()
                        .map_err(|_| CodeError::UnknownColor(token.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?
        } else {
            trimmed
                .chars()
                .map(|ch| {
                    Color::from_char(ch).ok_or_else(|| CodeError::UnknownColor(ch.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        if colors.is_empty() {
            return Err(CodeError::Empty);
        }
        Ok(Self(colors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color::{Blue, Green, Red, Yellow};

    #[test]
    fn parse_compact_initials() {
        let code: Code = "rbgy".parse().unwrap();
        assert_eq!(code.colors(), &[Red, Blue, Green, Yellow]);
    }

    #[test]
    fn parse_compact_digits_and_case() {
        let code: Code = "12G4".parse().unwrap();
        assert_eq!(code.colors(), &[Red, Blue, Green, Yellow]);
    }

    #[test]
    fn parse_named_list() {
        let code: Code = "red,blue , green yellow".parse().unwrap();
        assert_eq!(code.colors(), &[Red, Blue, Green, Yellow]);
    }

    #[test]
    fn parse_single_full_name() {
        let code: Code = "Orange".parse().unwrap();
        assert_eq!(code.colors(), &[Color::Orange]);
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Code>(), Err(CodeError::Empty));
        assert_eq!("  ,  ".parse::<Code>(), Err(CodeError::Empty));
        assert_eq!(
            "rbgx".parse::<Code>(),
            Err(CodeError::UnknownColor("x".to_string()))
        );
        assert_eq!(
            "red pink".parse::<Code>(),
            Err(CodeError::UnknownColor("pink".to_string()))
        );
    }

    #[test]
    fn repeats_detection() {
        assert!(!Code::from([Red, Blue, Green, Yellow]).has_repeats());
        assert!(Code::from([Red, Blue, Red, Yellow]).has_repeats());
        assert!(Code::from([Green, Green]).has_repeats());
    }

    #[test]
    fn color_counts_with_duplicates() {
        let counts = Code::from([Red, Red, Blue, Red]).color_counts();
        assert_eq!(counts.get(&Red), Some(&3));
        assert_eq!(counts.get(&Blue), Some(&1));
        assert_eq!(counts.get(&Green), None);
    }

    #[test]
    fn display_and_compact() {
        let code = Code::from([Red, Blue, Green, Yellow]);
        assert_eq!(code.to_string(), "red blue green yellow");
        assert_eq!(code.compact(), "RBGY");
    }
}
