//! Game session
//!
//! Drives one game against an arbiter: send a guess, wait for the response
//! byte, decide whether the game is over, otherwise eliminate candidates and
//! pick the next guess.
//!
//! ```text
//! FirstGuess -> AwaitResponse -> Evaluate -> AwaitResponse | Won | ParityError | Lost | MultipleErrors
//! ```

use crate::core::{Code, Color, Response};
use crate::solver::{Eliminator, LastSurvivor, Strategy};
use crate::transport::{Transport, TransportError};
use std::fmt;
use tracing::{debug, info, warn};

/// Opening guess: five distinct colors, `bdgor`
pub const FIRST_GUESS: [Color; 5] = [
    Color::Beige,
    Color::Darkblue,
    Color::Green,
    Color::Orange,
    Color::Red,
];

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// All five pegs matched
    Won,
    /// The arbiter reported a parity error
    ParityError,
    /// The arbiter declared the game lost
    Lost,
    /// Parity error and game lost in the same response
    MultipleErrors,
}

impl Outcome {
    /// Decide whether `response` ends the game
    ///
    /// Error flags take precedence over the pin count, so a lost flag wins
    /// over a coincidental five-red score.
    #[must_use]
    pub const fn from_response(response: Response) -> Option<Self> {
        match (response.parity_error, response.game_lost) {
            (true, true) => Some(Self::MultipleErrors),
            (true, false) => Some(Self::ParityError),
            (false, true) => Some(Self::Lost),
            (false, false) if response.score.is_perfect() => Some(Self::Won),
            (false, false) => None,
        }
    }

    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Won => "won",
            Self::ParityError => "parity error",
            Self::Lost => "game lost",
            Self::MultipleErrors => "parity error and game lost",
        })
    }
}

/// One played round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRecord {
    /// 1-based round number
    pub round: u32,
    pub guess: Code,
    pub response: Response,
}

/// Result of a finished session
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub outcome: Outcome,
    pub rounds: Vec<RoundRecord>,
}

impl SessionReport {
    /// Number of guesses sent
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// The winning guess, if the game was won
    #[must_use]
    pub fn solution(&self) -> Option<Code> {
        if self.outcome.is_win() {
            self.rounds.last().map(|r| r.guess)
        } else {
            None
        }
    }
}

/// One game against an arbiter
///
/// The session owns the transport and the elimination table; both are
/// dropped when [`Session::run`] returns, on success and on error alike.
pub struct Session<T, S = LastSurvivor> {
    transport: T,
    strategy: S,
    eliminator: Eliminator,
}

impl<T: Transport> Session<T> {
    /// Session using the last-survivor rule
    pub fn new(transport: T) -> Self {
        Self::with_strategy(transport, LastSurvivor)
    }
}

impl<T: Transport, S: Strategy> Session<T, S> {
    pub fn with_strategy(transport: T, strategy: S) -> Self {
        Self {
            transport,
            strategy,
            eliminator: Eliminator::new(),
        }
    }

    /// Play rounds until the arbiter ends the game
    ///
    /// # Errors
    /// Returns the first `TransportError`; a failed send or a short receive
    /// ends the session without retrying.
    ///
    /// # Panics
    /// Panics if no candidate is consistent with the answers received, which
    /// means the scoring rule and the arbiter disagree.
    pub fn run(mut self) -> Result<SessionReport, TransportError> {
        let mut rounds = Vec::new();
        let mut guess = Code::encode(FIRST_GUESS);
        let mut round = 1;

        loop {
            let response = self.play_round(guess)?;
            debug!(round, %guess, score = %response.score, "round finished");
            rounds.push(RoundRecord {
                round,
                guess,
                response,
            });

            if let Some(outcome) = Outcome::from_response(response) {
                if outcome.is_win() {
                    info!(rounds = round, solution = %guess, "game won");
                } else {
                    warn!(rounds = round, %outcome, "game ended by arbiter");
                }
                return Ok(SessionReport { outcome, rounds });
            }

            guess = self.eliminator.update_and_select_with(
                &self.strategy,
                guess,
                response.score.red,
                response.score.white,
            );
            round += 1;
        }
    }

    fn play_round(&mut self, guess: Code) -> Result<Response, TransportError> {
        self.transport.send(&guess.to_wire())?;

        let mut answer = [0u8; 1];
        self.transport.receive_exact(&mut answer)?;
        Ok(Response::decode(answer[0]))
    }
}
