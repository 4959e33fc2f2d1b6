//! Arbiter responses
//!
//! The arbiter answers every guess with a single byte:
//!
//! ```text
//!    7    |     6      | 5..3  | 2..0
//!   lost  | parity err | white |  red
//! ```

use super::score::Score;

const PARITY_ERROR_BIT: u8 = 1 << 6;
const GAME_LOST_BIT: u8 = 1 << 7;

/// A decoded response byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Response {
    pub score: Score,
    /// The arbiter received a word with bad parity
    pub parity_error: bool,
    /// The arbiter declared the game lost
    pub game_lost: bool,
}

impl Response {
    /// Decode a response byte
    ///
    /// # Examples
    /// ```
    /// use mastermind_client::core::Response;
    ///
    /// let response = Response::decode(0b0100_0011);
    /// assert_eq!(response.score.red, 3);
    /// assert_eq!(response.score.white, 0);
    /// assert!(response.parity_error);
    /// assert!(!response.game_lost);
    /// ```
    #[must_use]
    pub const fn decode(byte: u8) -> Self {
        Self {
            score: Score::new(byte & 0b111, (byte >> 3) & 0b111),
            parity_error: byte & PARITY_ERROR_BIT != 0,
            game_lost: byte & GAME_LOST_BIT != 0,
        }
    }

    /// Encode back into the wire byte
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        let mut byte = (self.score.red & 0b111) | ((self.score.white & 0b111) << 3);
        if self.parity_error {
            byte |= PARITY_ERROR_BIT;
        }
        if self.game_lost {
            byte |= GAME_LOST_BIT;
        }
        byte
    }

    /// Whether either error flag is set
    #[must_use]
    pub const fn has_error(self) -> bool {
        self.parity_error || self.game_lost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_parity_error_with_reds() {
        let r = Response::decode(0b0100_0011);
        assert_eq!(r.score, Score::new(3, 0));
        assert!(r.parity_error);
        assert!(!r.game_lost);
        assert!(r.has_error());
    }

    #[test]
    fn decode_lost_with_five_reds() {
        let r = Response::decode(0b1000_0101);
        assert_eq!(r.score, Score::new(5, 0));
        assert!(!r.parity_error);
        assert!(r.game_lost);
    }

    #[test]
    fn decode_white_field() {
        let r = Response::decode(0b0010_1001);
        assert_eq!(r.score, Score::new(1, 5));
        assert!(!r.has_error());
    }

    #[test]
    fn decode_both_flags() {
        let r = Response::decode(0xc0);
        assert_eq!(r.score, Score::default());
        assert!(r.parity_error && r.game_lost);
    }

    #[test]
    fn every_byte_encodes_back() {
        for byte in 0..=u8::MAX {
            assert_eq!(Response::decode(byte).to_byte(), byte);
        }
    }
}
