//! Peg colors
//!
//! The full palette has six colors. A game may play with a prefix of it.

use std::fmt;
use std::str::FromStr;

/// A single peg color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
}

impl Color {
    /// The full palette, in display order
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Yellow,
        Self::Purple,
        Self::Orange,
    ];

    /// Lowercase color name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Orange => "orange",
        }
    }

    /// Single-letter shorthand used in compact code strings
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Self::Red => 'r',
            Self::Blue => 'b',
            Self::Green => 'g',
            Self::Yellow => 'y',
            Self::Purple => 'p',
            Self::Orange => 'o',
        }
    }

    /// Zero-based position in [`Color::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parse a single shorthand character: an initial or a 1-based palette digit
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Color;
    ///
    /// assert_eq!(Color::from_char('G'), Some(Color::Green));
    /// assert_eq!(Color::from_char('6'), Some(Color::Orange));
    /// assert_eq!(Color::from_char('x'), None);
    /// ```
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        let ch = ch.to_ascii_lowercase();
        if let Some(digit) = ch.to_digit(10) {
            return (digit as usize)
                .checked_sub(1)
                .and_then(|i| Self::ALL.get(i).copied());
        }
        Self::ALL.into_iter().find(|c| c.initial() == ch)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = String;

    /// Accepts a full name, an initial, or a palette digit (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        if let Some(color) = Self::ALL.into_iter().find(|c| c.name() == token) {
            return Ok(color);
        }

        let mut chars = token.chars();
        let shorthand = match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::from_char(ch),
            _ => None,
        };
        shorthand.ok_or_else(|| format!("Unknown color: {s}"))
    }
}
