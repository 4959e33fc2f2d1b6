//! Peg colors
//!
//! The arbiter knows eight colors. Each one occupies a 3-bit field on the wire,
//! so the discriminant of every variant is also its wire value.

use std::fmt;
use thiserror::Error;

/// One of the eight peg colors, in wire order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Color {
    Beige = 0,
    Darkblue = 1,
    Green = 2,
    Orange = 3,
    Red = 4,
    Black = 5,
    Violet = 6,
    White = 7,
}

/// Error for input that does not name a color
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("unknown color '{0}' (expected one of b, d, g, o, r, s, v, w)")]
    UnknownSymbol(char),
}

impl Color {
    /// Number of distinct colors
    pub const COUNT: usize = 8;

    /// All colors in wire order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Beige,
        Self::Darkblue,
        Self::Green,
        Self::Orange,
        Self::Red,
        Self::Black,
        Self::Violet,
        Self::White,
    ];

    /// Build a color from the low 3 bits of `bits`
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & 0b111) as usize]
    }

    /// The 3-bit wire value
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Single-letter symbol used on the command line
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Beige => 'b',
            Self::Darkblue => 'd',
            Self::Green => 'g',
            Self::Orange => 'o',
            Self::Red => 'r',
            Self::Black => 's',
            Self::Violet => 'v',
            Self::White => 'w',
        }
    }

    /// Parse a color from its symbol (case-insensitive)
    ///
    /// # Errors
    /// Returns `ColorError::UnknownSymbol` for any other character.
    pub fn from_symbol(symbol: char) -> Result<Self, ColorError> {
        Self::ALL
            .into_iter()
            .find(|c| c.symbol() == symbol.to_ascii_lowercase())
            .ok_or(ColorError::UnknownSymbol(symbol))
    }

    /// Full lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Beige => "beige",
            Self::Darkblue => "darkblue",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Black => "black",
            Self::Violet => "violet",
            Self::White => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
