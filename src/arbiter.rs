//! In-process arbiter
//!
//! Plays the server side of the protocol against a fixed secret, so a full
//! session can run offline. It speaks the same bytes as the remote arbiter:
//! it reads one 2-byte word per round and answers with one response byte.

use crate::core::{Code, Response, Score};
use crate::transport::{Transport, TransportError};
use std::collections::VecDeque;
use tracing::{trace, warn};

/// Rounds allowed before the game is declared lost
pub const DEFAULT_MAX_ROUNDS: u32 = 35;

/// An arbiter holding a secret, usable as a [`Transport`]
#[derive(Debug, Clone)]
pub struct LocalArbiter {
    secret: Code,
    max_rounds: u32,
    round: u32,
    pending_word: Vec<u8>,
    answers: VecDeque<u8>,
    finished: bool,
}

impl LocalArbiter {
    /// Create an arbiter for `secret` with the default round limit
    #[must_use]
    pub fn new(secret: Code) -> Self {
        Self::with_max_rounds(secret, DEFAULT_MAX_ROUNDS)
    }

    #[must_use]
    pub fn with_max_rounds(secret: Code, max_rounds: u32) -> Self {
        Self {
            secret,
            max_rounds,
            round: 0,
            pending_word: Vec::with_capacity(2),
            answers: VecDeque::new(),
            finished: false,
        }
    }

    #[must_use]
    pub const fn secret(&self) -> Code {
        self.secret
    }

    /// Rounds answered so far
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.round
    }

    /// Evaluate one received word
    ///
    /// A word with bad parity is answered with the parity flag and ends the
    /// game; reaching the round limit without a win sets the lost flag.
    #[must_use]
    pub fn evaluate(&mut self, word: Code) -> Response {
        self.round += 1;

        let parity_error = !word.has_valid_parity();
        let score = Score::calculate(self.secret, word);
        let game_lost = !score.is_perfect() && self.round >= self.max_rounds;

        if parity_error {
            warn!(word = word.word(), "received word with bad parity");
        }

        let response = Response {
            score,
            parity_error,
            game_lost,
        };
        self.finished = parity_error || game_lost || score.is_perfect();
        trace!(round = self.round, guess = %word, %score, "arbiter answered");
        response
    }
}

impl Transport for LocalArbiter {
    fn send(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        for &byte in bytes {
            if self.finished {
                // The remote arbiter closes the connection after the last answer
                return Err(TransportError::Send(std::io::ErrorKind::BrokenPipe.into()));
            }
            self.pending_word.push(byte);
            if self.pending_word.len() == 2 {
                let word = Code::from_wire([self.pending_word[0], self.pending_word[1]]);
                self.pending_word.clear();
                let response = self.evaluate(word);
                self.answers.push_back(response.to_byte());
            }
        }
        Ok(())
    }

    fn receive_exact(&mut self, buf: &mut [u8]) -> Result<(), TransportError> {
        if self.answers.len() < buf.len() {
            let received = self.answers.len();
            self.answers.clear();
            return Err(TransportError::ShortRead {
                expected: buf.len(),
                received,
            });
        }
        for slot in buf.iter_mut() {
            if let Some(byte) = self.answers.pop_front() {
                *slot = byte;
            }
        }
        Ok(())
    }
}
