//! Offline solve command
//!
//! Plays a full game against the in-process arbiter for a known secret.

use crate::arbiter::{DEFAULT_MAX_ROUNDS, LocalArbiter};
use crate::core::Code;
use crate::session::{Session, SessionReport};
use crate::solver::Strategy;
use anyhow::{Context, Result};

/// Configuration for solving a secret
pub struct SolveConfig {
    pub secret: Code,
    pub max_rounds: u32,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: Code) -> Self {
        Self {
            secret,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

/// Solve `config.secret` with the given strategy
///
/// # Errors
///
/// Returns an error only if the local arbiter refuses a round, which the
/// session never provokes.
pub fn solve_secret<S: Strategy>(config: &SolveConfig, strategy: S) -> Result<SessionReport> {
    let arbiter = LocalArbiter::with_max_rounds(config.secret, config.max_rounds);
    Session::with_strategy(arbiter, strategy)
        .run()
        .with_context(|| format!("solving {}", config.secret))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Outcome;
    use crate::solver::{LastSurvivor, StrategyType};

    #[test]
    fn solve_secret_succeeds() {
        let config = SolveConfig::new("wvsob".parse().unwrap());

        let report = solve_secret(&config, LastSurvivor).unwrap();

        assert_eq!(report.outcome, Outcome::Won);
        assert_eq!(report.solution(), Some(config.secret));
    }

    #[test]
    fn solve_records_history() {
        let config = SolveConfig::new("ggbbr".parse().unwrap());

        let report = solve_secret(&config, StrategyType::from_name("minimax")).unwrap();

        assert!(!report.rounds.is_empty());
        assert_eq!(report.rounds[0].guess.to_string(), "bdgor");
        assert!(report.rounds[..report.round_count() - 1]
            .iter()
            .all(|r| !r.response.score.is_perfect()));
    }

    #[test]
    fn solve_with_round_limit() {
        let mut config = SolveConfig::new("ggbbr".parse().unwrap());
        config.max_rounds = 2;

        let report = solve_secret(&config, LastSurvivor).unwrap();

        assert_eq!(report.outcome, Outcome::Lost);
        assert_eq!(report.round_count(), 2);
    }

    #[test]
    fn solve_first_guess() {
        let config = SolveConfig::new("bdgor".parse().unwrap());

        let report = solve_secret(&config, LastSurvivor).unwrap();

        assert_eq!(report.round_count(), 1);
        assert!(report.outcome.is_win());
    }
}
