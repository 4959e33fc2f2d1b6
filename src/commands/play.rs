//! Remote play
//!
//! Connects to an arbiter over TCP and plays one game.

use crate::session::{Session, SessionReport};
use crate::solver::Strategy;
use crate::transport;
use anyhow::{Context, Result};
use tracing::info;

/// Where the arbiter listens
#[derive(Debug, Clone)]
pub struct PlayConfig {
    pub host: String,
    /// Port number or TCP service name
    pub service: String,
}

impl PlayConfig {
    #[must_use]
    pub fn new(host: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            service: service.into(),
        }
    }
}

/// Connect to the arbiter and play until it ends the game
///
/// The connection is closed when this returns, whatever the result.
///
/// # Errors
///
/// Returns an error if the host cannot be resolved or connected to, or if a
/// send or receive fails mid-game.
pub fn play_remote<S: Strategy>(config: &PlayConfig, strategy: S) -> Result<SessionReport> {
    let transport = transport::connect(&config.host, &config.service)?;
    info!(host = %config.host, service = %config.service, "starting game");

    Session::with_strategy(transport, strategy)
        .run()
        .with_context(|| format!("game with {}:{} aborted", config.host, config.service))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arbiter::LocalArbiter;
    use crate::core::{Code, Response};
    use crate::session::Outcome;
    use crate::solver::LastSurvivor;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve one game over TCP with a local arbiter
    fn spawn_arbiter(secret: Code) -> (u16, thread::JoinHandle<u32>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut arbiter = LocalArbiter::new(secret);
            loop {
                let mut word = [0u8; 2];
                if stream.read_exact(&mut word).is_err() {
                    break;
                }
                let response = arbiter.evaluate(Code::from_wire(word));
                stream.write_all(&[response.to_byte()]).unwrap();
                if response.has_error() || response.score.is_perfect() {
                    break;
                }
            }
            arbiter.rounds()
        });

        (port, handle)
    }

    #[test]
    fn plays_a_full_game_over_tcp() {
        let secret: Code = "orvsd".parse().unwrap();
        let (port, handle) = spawn_arbiter(secret);

        let report = play_remote(&PlayConfig::new("127.0.0.1", port.to_string()), LastSurvivor).unwrap();
        let rounds_served = handle.join().unwrap();

        assert_eq!(report.outcome, Outcome::Won);
        assert_eq!(report.solution(), Some(secret));
        assert_eq!(report.round_count(), rounds_served as usize);
    }

    #[test]
    fn closed_connection_is_an_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut word = [0u8; 2];
            stream.read_exact(&mut word).unwrap();
            // Hang up without answering
        });

        let err = play_remote(&PlayConfig::new("127.0.0.1", port.to_string()), LastSurvivor).unwrap_err();
        handle.join().unwrap();

        assert!(format!("{err:#}").contains("connection closed"), "{err:#}");
    }

    #[test]
    fn lost_response_over_tcp() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut word = [0u8; 2];
            stream.read_exact(&mut word).unwrap();
            let lost = Response {
                game_lost: true,
                ..Response::default()
            };
            stream.write_all(&[lost.to_byte()]).unwrap();
        });

        let report = play_remote(&PlayConfig::new("127.0.0.1", port.to_string()), LastSurvivor).unwrap();
        handle.join().unwrap();

        assert_eq!(report.outcome, Outcome::Lost);
    }

    #[test]
    fn unknown_service_fails_before_playing() {
        let config = PlayConfig::new("127.0.0.1", "no-such-mastermind-service");

        let err = play_remote(&config, LastSurvivor).unwrap_err();

        assert!(format!("{err:#}").contains("unknown service"), "{err:#}");
    }
}
