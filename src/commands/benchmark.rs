//! Benchmark command
//!
//! Tests solver performance across many secrets against the local arbiter.

use crate::arbiter::LocalArbiter;
use crate::core::{CANDIDATE_COUNT, Code};
use crate::session::Session;
use crate::solver::Strategy;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Result of a benchmark run
///
/// Round statistics cover won games only; lost and aborted games are counted
/// but contribute no rounds.
pub struct BenchmarkResult {
    pub total_games: usize,
    pub won: usize,
    /// Games that ended with a parity error or a loss
    pub failed: usize,
    /// Games cut short by a transport error
    pub aborted: usize,
    pub total_rounds: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// How one benchmark game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameResult {
    Won(usize),
    Failed,
    Aborted,
}

impl BenchmarkResult {
    fn from_games(games: &[GameResult], duration: Duration) -> Self {
        let mut distribution = BTreeMap::new();
        let mut failed = 0;
        let mut aborted = 0;
        for game in games {
            match *game {
                GameResult::Won(rounds) => *distribution.entry(rounds).or_insert(0) += 1,
                GameResult::Failed => failed += 1,
                GameResult::Aborted => aborted += 1,
            }
        }

        let won: usize = distribution.values().sum();
        let total_rounds: usize = distribution.iter().map(|(rounds, n)| rounds * n).sum();
        let total_games = games.len();

        Self {
            total_games,
            won,
            failed,
            aborted,
            total_rounds,
            average_rounds: if won == 0 {
                0.0
            } else {
                total_rounds as f64 / won as f64
            },
            min_rounds: distribution.keys().next().copied().unwrap_or(0),
            max_rounds: distribution.keys().next_back().copied().unwrap_or(0),
            distribution,
            duration,
            games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
        }
    }
}

/// Draw `count` secrets uniformly from the candidate space
///
/// The same seed always yields the same secrets.
#[must_use]
pub fn random_secrets(count: usize, seed: u64) -> Vec<Code> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .filter_map(|_| Code::from_index(rng.random_range(0..CANDIDATE_COUNT)).ok())
        .collect()
}

/// Play one game per secret, in parallel
///
/// Pass `show_progress = false` to run without a progress bar (tests, piping).
///
/// # Panics
///
/// Panics if the progress bar template is invalid, or if a game aborts
/// because no candidate survives.
pub fn run_benchmark<S: Strategy + Sync>(
    strategy: &S,
    secrets: &[Code],
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        let pb = ProgressBar::new(secrets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let games: Vec<GameResult> = secrets
        .par_iter()
        .map(|&secret| {
            let game = match Session::with_strategy(LocalArbiter::new(secret), strategy).run() {
                Ok(report) if report.outcome.is_win() => GameResult::Won(report.round_count()),
                Ok(report) => {
                    debug!(%secret, outcome = %report.outcome, "benchmark game not won");
                    GameResult::Failed
                }
                Err(e) => {
                    warn!(%secret, error = %e, "benchmark game aborted");
                    GameResult::Aborted
                }
            };
            pb.inc(1);
            game
        })
        .collect();

    pb.finish_with_message("done");
    BenchmarkResult::from_games(&games, start.elapsed())
}
