//! Minimax-based guess selection
//!
//! Selects the guess that minimizes the worst-case remaining candidates.

use super::calculator::calculate_max_remaining;
use crate::core::Code;
use rayon::prelude::*;

/// Select best guess among `candidates` by minimizing worst-case remaining candidates
///
/// Returns the code with the lowest maximum remaining candidates and that value,
/// or `None` if there are no candidates. Ties go to the earliest candidate.
///
/// # Examples
/// ```
/// use mastermind_client::core::Code;
/// use mastermind_client::solver::minimax::select_best_guess;
///
/// let candidates: Vec<Code> = ["bbbbb", "bdgor", "ddddd"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
///
/// let (_, max_remaining) = select_best_guess(&candidates).unwrap();
/// assert_eq!(max_remaining, 1);
/// ```
#[must_use]
pub fn select_best_guess(candidates: &[Code]) -> Option<(Code, usize)> {
    candidates
        .par_iter()
        .map(|&guess| (guess, calculate_max_remaining(guess, candidates)))
        .min_by_key(|&(_, max)| max)
}
