//! Command implementations

pub mod benchmark;
pub mod play;
pub mod solve;

pub use benchmark::{BenchmarkResult, random_secrets, run_benchmark};
pub use play::{PlayConfig, play_remote};
pub use solve::{SolveConfig, solve_secret};
