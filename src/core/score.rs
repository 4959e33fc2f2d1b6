//! Pin scoring
//!
//! A score is the pair of pin counts the arbiter awards for a guess:
//! - red: right color in the right position
//! - white: right color in the wrong position, counted after reds are removed
//!   and never using the same secret peg twice

use super::code::{Code, SLOTS};
use super::color::Color;
use std::fmt;

/// Red/white pin counts for one evaluated guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    pub red: u8,
    pub white: u8,
}

impl Score {
    /// Every peg in place
    pub const PERFECT: Self = Self::new(5, 0);

    #[inline]
    #[must_use]
    pub const fn new(red: u8, white: u8) -> Self {
        Self { red, white }
    }

    /// Whether all five positions matched
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.red as usize >= SLOTS
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: count reds and tally, per color, the secret pegs left unmatched
    /// 2. Second pass: for each unmatched guess peg whose color still has a
    ///    tally above zero, count a white and take one from the tally
    ///
    /// The result is symmetric: swapping `secret` and `guess` gives the same score.
    ///
    /// # Examples
    /// ```
    /// use mastermind_client::core::{Code, Score};
    ///
    /// let guess: Code = "bbddg".parse().unwrap();
    /// let secret: Code = "gddbb".parse().unwrap();
    /// assert_eq!(Score::calculate(secret, guess), Score::new(1, 4));
    /// ```
    #[must_use]
    pub fn calculate(secret: Code, guess: Code) -> Self {
        let mut available = [0u8; Color::COUNT];
        let mut matched = [false; SLOTS];
        let mut red = 0;

        // First pass: reds, and the leftover secret colors
        for (i, is_match) in matched.iter_mut().enumerate() {
            let wanted = secret.field(i);
            if guess.field(i) == wanted {
                red += 1;
                *is_match = true;
            } else {
                available[usize::from(wanted)] += 1;
            }
        }

        // Second pass: whites from what is left
        let mut white = 0;
        for (i, _) in matched.iter().enumerate().filter(|&(_, &m)| !m) {
            let slot = &mut available[usize::from(guess.field(i))];
            if *slot > 0 {
                white += 1;
                *slot -= 1;
            }
        }

        Self { red, white }
    }

    /// Whether scoring `b` against secret `a` yields exactly (`red`, `white`)
    ///
    /// This is the consistency test used to prune candidates: a candidate `b`
    /// survives a round only if the last guess `a` would have earned the
    /// observed pins had `b` been the secret.
    #[must_use]
    pub fn would_match(a: Code, b: Code, red: u8, white: u8) -> bool {
        Self::calculate(a, b) == Self::new(red, white)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} red, {} white", self.red, self.white)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CANDIDATE_COUNT;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn perfect_constant() {
        assert!(Score::PERFECT.is_perfect());
        assert_eq!(Score::PERFECT, Score::new(5, 0));
        assert!(!Score::new(4, 1).is_perfect());
    }

    #[test]
    fn identical_codes_score_perfect() {
        assert_eq!(Score::calculate(code("bdgor"), code("bdgor")), Score::PERFECT);
        assert!(Score::would_match(code("bdgor"), code("bdgor"), 5, 0));
    }

    #[test]
    fn every_candidate_matches_itself() {
        for index in 0..CANDIDATE_COUNT {
            let c = Code::from_index(index).unwrap();
            assert!(Score::would_match(c, c, 5, 0));
        }
    }

    #[test]
    fn duplicates_are_counted_once() {
        // guess [0,0,1,1,2] vs secret [2,1,1,0,0]: only position 2 matches
        let guess = code("bbddg");
        let secret = code("gddbb");
        assert_eq!(Score::calculate(secret, guess), Score::new(1, 4));
    }

    #[test]
    fn no_common_colors() {
        assert_eq!(
            Score::calculate(code("bdgor"), code("svwww")),
            Score::new(0, 0)
        );
    }

    #[test]
    fn white_limited_by_secret_multiplicity() {
        // Secret has one beige; the guess offers four off-position beiges
        assert_eq!(
            Score::calculate(code("bdddd"), code("dbbbb")),
            Score::new(0, 2)
        );
        // Red beige consumes the only beige, the rest cannot be white
        assert_eq!(
            Score::calculate(code("bdddd"), code("bbbbb")),
            Score::new(1, 0)
        );
    }

    #[test]
    fn full_permutation_is_all_white() {
        assert_eq!(
            Score::calculate(code("bdgor"), code("dgorb")),
            Score::new(0, 5)
        );
    }

    #[test]
    fn scoring_is_symmetric() {
        let codes: Vec<Code> = (0..CANDIDATE_COUNT)
            .step_by(97)
            .map(|i| Code::from_index(i).unwrap())
            .collect();

        for &a in &codes {
            for &b in codes.iter().take(60) {
                assert_eq!(Score::calculate(a, b), Score::calculate(b, a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn would_match_rejects_other_counts() {
        let guess = code("bbddg");
        let secret = code("gddbb");
        assert!(Score::would_match(guess, secret, 1, 4));
        assert!(!Score::would_match(guess, secret, 1, 3));
        assert!(!Score::would_match(guess, secret, 0, 4));
        assert!(!Score::would_match(guess, secret, 5, 0));
    }

    #[test]
    fn display() {
        assert_eq!(Score::new(2, 1).to_string(), "2 red, 1 white");
    }
}
