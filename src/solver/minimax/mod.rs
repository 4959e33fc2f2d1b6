//! Minimax guess selection
//!
//! Implements worst-case minimization over the surviving candidates.

mod calculator;
mod selector;

pub use calculator::calculate_max_remaining;
pub use selector::select_best_guess;
