//! Stable process exit codes.

use crate::session::Outcome;

/// Game won.
pub const SUCCESS: i32 = 0;
/// Usage, resolution, connection or I/O failure.
pub const FAILURE: i32 = 1;
/// The arbiter reported a parity error.
pub const PARITY_ERROR: i32 = 2;
/// The arbiter declared the game lost.
pub const GAME_LOST: i32 = 3;
/// Parity error and game lost together.
pub const MULTIPLE_ERRORS: i32 = 4;

/// Exit code for a finished game.
#[must_use]
pub const fn for_outcome(outcome: Outcome) -> i32 {
    match outcome {
        Outcome::Won => SUCCESS,
        Outcome::ParityError => PARITY_ERROR,
        Outcome::Lost => GAME_LOST,
        Outcome::MultipleErrors => MULTIPLE_ERRORS,
    }
}
