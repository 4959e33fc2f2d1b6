//! Encoded combinations
//!
//! A combination of five colors travels as a single 16-bit word:
//!
//! ```text
//!  15 | 14..12 | 11..9 | 8..6 | 5..3 | 2..0
//!   P |   c4   |  c3   |  c2  |  c1  |  c0
//! ```
//!
//! Bit 15 is the parity of bits 0-14. The low 15 bits double as the candidate
//! index, so every index in `0..32768` names exactly one combination.

use super::color::{Color, ColorError};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of pegs in a combination
pub const SLOTS: usize = 5;

/// Size of the candidate space (every 15-bit pattern)
pub const CANDIDATE_COUNT: usize = 1 << 15;

const PAYLOAD_MASK: u16 = 0x7fff;
const PARITY_BIT: u16 = 15;

/// Errors raised while building or inspecting a `Code`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("candidate index {0} is outside 0..32768")]
    IndexOutOfRange(usize),

    #[error("peg position {0} is outside 0..5")]
    PositionOutOfRange(usize),

    #[error("combination must have exactly 5 colors, got {0}")]
    InvalidLength(usize),

    #[error(transparent)]
    Color(#[from] ColorError),
}

/// A combination encoded as its 16-bit wire word (parity included)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(u16);

impl Code {
    /// Encode five colors, packing color `i` at bit `3 * i` and appending parity
    ///
    /// # Examples
    /// ```
    /// use mastermind_client::core::{Code, Color};
    ///
    /// let code = Code::encode([Color::Beige, Color::Darkblue, Color::Green, Color::Orange, Color::Red]);
    /// assert_eq!(code.color_at(1).unwrap(), Color::Darkblue);
    /// assert!(code.has_valid_parity());
    /// ```
    #[must_use]
    pub fn encode(colors: [Color; SLOTS]) -> Self {
        let payload = colors
            .iter()
            .enumerate()
            .fold(0u16, |acc, (i, color)| acc | (u16::from(color.bits()) << (3 * i)));
        Self::with_parity(payload)
    }

    /// Map a candidate index to its word, deriving the parity bit
    ///
    /// # Errors
    /// Returns `CodecError::IndexOutOfRange` if `index >= 32768`.
    pub fn from_index(index: usize) -> Result<Self, CodecError> {
        if index >= CANDIDATE_COUNT {
            return Err(CodecError::IndexOutOfRange(index));
        }
        Ok(Self::with_parity(index as u16))
    }

    /// Rebuild a word from the two bytes sent on the wire
    ///
    /// The parity bit is kept as received; check it with [`Code::has_valid_parity`].
    #[must_use]
    pub const fn from_wire(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }

    /// The two bytes to send to the arbiter
    #[must_use]
    pub const fn to_wire(self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    /// Raw 16-bit word
    #[inline]
    #[must_use]
    pub const fn word(self) -> u16 {
        self.0
    }

    /// Candidate index (the low 15 bits)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 & PAYLOAD_MASK) as usize
    }

    /// Color at `position` (0-4)
    ///
    /// # Errors
    /// Returns `CodecError::PositionOutOfRange` if `position >= 5`.
    pub fn color_at(self, position: usize) -> Result<Color, CodecError> {
        if position >= SLOTS {
            return Err(CodecError::PositionOutOfRange(position));
        }
        Ok(Color::from_bits(self.field(position)))
    }

    /// All five colors, position 0 first
    #[must_use]
    pub fn colors(self) -> [Color; SLOTS] {
        std::array::from_fn(|i| Color::from_bits(self.field(i)))
    }

    /// Whether bit 15 equals the parity of bits 0-14
    #[must_use]
    pub const fn has_valid_parity(self) -> bool {
        (self.0 >> PARITY_BIT) == parity(self.0 & PAYLOAD_MASK)
    }

    /// Raw 3-bit field; callers guarantee `position < SLOTS`
    #[inline]
    pub(crate) const fn field(self, position: usize) -> u8 {
        ((self.0 >> (3 * position)) & 0b111) as u8
    }

    /// Candidate word for a payload already known to fit in 15 bits
    #[inline]
    pub(crate) const fn with_parity(payload: u16) -> Self {
        let payload = payload & PAYLOAD_MASK;
        Self(payload | (parity(payload) << PARITY_BIT))
    }
}

/// XOR of all bits of `value`
const fn parity(value: u16) -> u16 {
    (value.count_ones() & 1) as u16
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in self.colors() {
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = CodecError;

    /// Parse five color symbols, e.g. `"bdgor"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.trim().chars().collect();
        if symbols.len() != SLOTS {
            return Err(CodecError::InvalidLength(symbols.len()));
        }

        let mut colors = [Color::Beige; SLOTS];
        for (slot, &symbol) in colors.iter_mut().zip(&symbols) {
            *slot = Color::from_symbol(symbol)?;
        }
        Ok(Self::encode(colors))
    }
}
