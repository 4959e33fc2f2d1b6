//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations. Every strategy
//! picks from the surviving candidates, so a guess is never one already
//! proven inconsistent.

use crate::core::Code;

/// A strategy for selecting the next guess among the surviving candidates
pub trait Strategy {
    /// Select the next guess from `survivors` (in ascending index order)
    ///
    /// Returns `None` only if `survivors` is empty.
    fn select_guess(&self, survivors: &[Code]) -> Option<Code>;
}

impl<S: Strategy + ?Sized> Strategy for &S {
    fn select_guess(&self, survivors: &[Code]) -> Option<Code> {
        (**self).select_guess(survivors)
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Last survivor in index order (default)
    Last(LastSurvivor),
    /// First survivor in index order
    First(FirstSurvivor),
    /// Smallest worst-case partition
    Minimax(MinimaxStrategy),
    /// Uniformly random survivor
    Random(RandomSurvivor),
}

impl Strategy for StrategyType {
    fn select_guess(&self, survivors: &[Code]) -> Option<Code> {
        match self {
            Self::Last(s) => s.select_guess(survivors),
            Self::First(s) => s.select_guess(survivors),
            Self::Minimax(s) => s.select_guess(survivors),
            Self::Random(s) => s.select_guess(survivors),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "last", "first", "minimax", "random".
    /// Defaults to last-survivor if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "first" => Self::First(FirstSurvivor),
            "minimax" => Self::Minimax(MinimaxStrategy::default()),
            "random" => Self::Random(RandomSurvivor),
            _ => Self::Last(LastSurvivor),
        }
    }

    /// Canonical name, accepted by [`StrategyType::from_name`]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Last(_) => "last",
            Self::First(_) => "first",
            Self::Minimax(_) => "minimax",
            Self::Random(_) => "random",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Last(LastSurvivor)
    }
}

/// Last survivor found while scanning in index order
#[derive(Debug, Clone, Copy, Default)]
pub struct LastSurvivor;

impl Strategy for LastSurvivor {
    fn select_guess(&self, survivors: &[Code]) -> Option<Code> {
        survivors.last().copied()
    }
}

/// First survivor in index order
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstSurvivor;

impl Strategy for FirstSurvivor {
    fn select_guess(&self, survivors: &[Code]) -> Option<Code> {
        survivors.first().copied()
    }
}

/// Minimax strategy
///
/// Selects the survivor that minimizes the worst-case number of remaining
/// candidates. Scoring is quadratic in the survivor count, so above
/// `max_survivors` it falls back to the last survivor.
#[derive(Debug, Clone)]
pub struct MinimaxStrategy {
    /// Fall back to the last survivor when more than this many remain
    pub max_survivors: usize,
}

impl MinimaxStrategy {
    /// Create a new minimax strategy
    ///
    /// # Parameters
    /// - `max_survivors`: Largest survivor set scored exhaustively (default: 2048)
    #[must_use]
    pub const fn new(max_survivors: usize) -> Self {
        Self { max_survivors }
    }
}

impl Default for MinimaxStrategy {
    fn default() -> Self {
        Self::new(2048)
    }
}

impl Strategy for MinimaxStrategy {
    fn select_guess(&self, survivors: &[Code]) -> Option<Code> {
        if survivors.len() > self.max_survivors {
            return LastSurvivor.select_guess(survivors);
        }
        super::minimax::select_best_guess(survivors).map(|(best, _)| best)
    }
}

/// Random strategy
///
/// Picks any survivor with equal probability.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSurvivor;

impl Strategy for RandomSurvivor {
    fn select_guess(&self, survivors: &[Code]) -> Option<Code> {
        use rand::prelude::IndexedRandom;

        survivors.choose(&mut rand::rng()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_survivors() -> Vec<Code> {
        ["bbbbb", "bdgor", "sssss", "wwwww"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect()
    }

    #[test]
    fn last_and_first_pick_the_ends() {
        let survivors = setup_survivors();

        assert_eq!(LastSurvivor.select_guess(&survivors), survivors.last().copied());
        assert_eq!(FirstSurvivor.select_guess(&survivors), survivors.first().copied());
    }

    #[test]
    fn empty_survivors_yield_none() {
        assert!(LastSurvivor.select_guess(&[]).is_none());
        assert!(FirstSurvivor.select_guess(&[]).is_none());
        assert!(MinimaxStrategy::default().select_guess(&[]).is_none());
        assert!(RandomSurvivor.select_guess(&[]).is_none());
    }

    #[test]
    fn random_selects_from_survivors() {
        let survivors = setup_survivors();
        for _ in 0..20 {
            let guess = RandomSurvivor.select_guess(&survivors).unwrap();
            assert!(survivors.contains(&guess));
        }
    }

    #[test]
    fn minimax_selects_a_survivor() {
        let survivors = setup_survivors();
        let guess = MinimaxStrategy::default().select_guess(&survivors).unwrap();
        assert!(survivors.contains(&guess));
    }

    #[test]
    fn minimax_falls_back_above_threshold() {
        let survivors = setup_survivors();
        let strategy = MinimaxStrategy::new(2);
        assert_eq!(strategy.select_guess(&survivors), survivors.last().copied());
    }

    #[test]
    fn from_name_round_trips() {
        for name in ["last", "first", "minimax", "random"] {
            assert_eq!(StrategyType::from_name(name).name(), name);
        }
        assert_eq!(StrategyType::from_name("bogus").name(), "last");
        assert_eq!(StrategyType::default().name(), "last");
    }
}
