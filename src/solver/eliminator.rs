//! Candidate elimination
//!
//! Tracks, for each of the 32768 candidates, whether it has been proven
//! inconsistent with an answer. Flags only ever go from eligible to ruled out.

use super::strategy::Strategy;
use crate::core::{CANDIDATE_COUNT, Code, Score};
use tracing::debug;

/// Elimination state for one game
pub struct Eliminator {
    ruled_out: Box<[bool]>,
}

impl Default for Eliminator {
    fn default() -> Self {
        Self::new()
    }
}

impl Eliminator {
    /// Start with every candidate eligible
    #[must_use]
    pub fn new() -> Self {
        Self {
            ruled_out: vec![false; CANDIDATE_COUNT].into_boxed_slice(),
        }
    }

    /// Rule out every candidate inconsistent with `last_guess` scoring
    /// (`red`, `white`), then return the last survivor in index order
    ///
    /// # Panics
    /// Panics if no candidate survives. The true secret always survives, so
    /// this only happens when the scoring rule disagrees with the arbiter.
    pub fn update_and_select(&mut self, last_guess: Code, red: u8, white: u8) -> Code {
        let mut last_survivor = None;

        for (index, ruled_out) in self.ruled_out.iter_mut().enumerate() {
            if *ruled_out {
                continue;
            }
            let candidate = candidate(index);
            if Score::would_match(last_guess, candidate, red, white) {
                last_survivor = Some(candidate);
            } else {
                *ruled_out = true;
            }
        }

        let next = last_survivor.unwrap_or_else(|| no_survivors(last_guess, red, white));
        debug!(remaining = self.remaining(), next = %next, "candidates eliminated");
        next
    }

    /// Like [`Eliminator::update_and_select`], but let `strategy` pick among the survivors
    ///
    /// # Panics
    /// Panics if no candidate survives.
    pub fn update_and_select_with<S: Strategy>(
        &mut self,
        strategy: &S,
        last_guess: Code,
        red: u8,
        white: u8,
    ) -> Code {
        let mut survivors = Vec::new();

        for (index, ruled_out) in self.ruled_out.iter_mut().enumerate() {
            if *ruled_out {
                continue;
            }
            let candidate = candidate(index);
            if Score::would_match(last_guess, candidate, red, white) {
                survivors.push(candidate);
            } else {
                *ruled_out = true;
            }
        }

        let next = strategy
            .select_guess(&survivors)
            .unwrap_or_else(|| no_survivors(last_guess, red, white));
        debug!(remaining = survivors.len(), next = %next, "candidates eliminated");
        next
    }

    /// Number of candidates still eligible
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.ruled_out.iter().filter(|&&r| !r).count()
    }

    /// Number of candidates ruled out so far
    #[must_use]
    pub fn ruled_out(&self) -> usize {
        CANDIDATE_COUNT - self.remaining()
    }

    /// Whether candidate `index` has been ruled out
    ///
    /// Indices outside the candidate space count as ruled out.
    #[must_use]
    pub fn is_ruled_out(&self, index: usize) -> bool {
        self.ruled_out.get(index).copied().unwrap_or(true)
    }

    /// All eligible candidates in index order
    #[must_use]
    pub fn survivors(&self) -> Vec<Code> {
        self.ruled_out
            .iter()
            .enumerate()
            .filter(|&(_, &r)| !r)
            .map(|(index, _)| candidate(index))
            .collect()
    }
}

// The flag table has exactly CANDIDATE_COUNT entries, so every index fits in 15 bits
#[inline]
fn candidate(index: usize) -> Code {
    Code::with_parity(index as u16)
}

#[cold]
fn no_survivors(last_guess: Code, red: u8, white: u8) -> ! {
    panic!(
        "no candidate is consistent with {last_guess} scoring {red} red / {white} white; \
         scoring rule and arbiter disagree"
    )
}
