//! Core domain types for the game
//!
//! Colors, encoded combinations, pin scores and arbiter responses.
//! Everything here is pure bit manipulation with no I/O.

mod code;
mod color;
mod response;
mod score;

pub use code::{CANDIDATE_COUNT, Code, CodecError, SLOTS};
pub use color::{Color, ColorError};
pub use response::Response;
pub use score::Score;
