//! Mastermind Client
//!
//! Plays Mastermind against a remote arbiter by candidate elimination: every
//! guess is consistent with all answers received so far.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_client::arbiter::LocalArbiter;
//! use mastermind_client::session::{Outcome, Session};
//!
//! let secret = "gddbb".parse().unwrap();
//! let report = Session::new(LocalArbiter::new(secret)).run().unwrap();
//!
//! assert_eq!(report.outcome, Outcome::Won);
//! assert_eq!(report.solution(), Some(secret));
//! ```

// Core domain types
pub mod core;

// Candidate elimination and guess selection
pub mod solver;

// Byte transport and TCP connection
pub mod transport;

// Game loop
pub mod session;

// In-process arbiter
pub mod arbiter;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Process exit codes
pub mod exit_codes;

// Tracing setup
pub mod logging;
