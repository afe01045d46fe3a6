//! Paced driver for the computer's turn.
//!
//! The engine never sleeps. A [`ComputerTurnDriver`] is polled with the
//! current time from whatever clock the caller has (a browser timer, a
//! terminal loop, a test) and performs at most one
//! [`Game::computer_step`] per poll once the step interval has elapsed.

use core::time::Duration;

use log::debug;

use crate::error::ActionError;
use crate::game::{ComputerStep, Game, Phase};

/// What a call to [`ComputerTurnDriver::poll`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The next card is not due yet.
    Waiting,
    /// One card was dealt.
    Dealt(ComputerStep),
    /// The driver is finished, cancelled, or belongs to a replaced round.
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DriverState {
    Running,
    Finished,
    Cancelled,
}

/// Cancellable handle that deals the computer's cards one interval apart.
///
/// The driver is bound to the round it was created in. Once
/// [`Game::start_round`] or [`Game::abandon_round`] replaces that round,
/// every later poll returns [`Tick::Stopped`] without touching the game.
#[derive(Debug, Clone)]
pub struct ComputerTurnDriver {
    round_id: u32,
    interval: Duration,
    next_due: Duration,
    state: DriverState,
}

impl ComputerTurnDriver {
    /// Returns when the next card is due, or `None` once the driver has
    /// stopped.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        (self.state == DriverState::Running).then_some(self.next_due)
    }

    /// Time left until the next card is due, measured from `now`.
    #[must_use]
    pub fn wait_time(&self, now: Duration) -> Option<Duration> {
        self.next_due().map(|due| due.saturating_sub(now))
    }

    /// Whether the driver may still deal.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == DriverState::Running
    }

    /// Stops the driver. Later polls return [`Tick::Stopped`].
    pub fn cancel(&mut self) {
        if self.state == DriverState::Running {
            debug!("computer turn driver for round {} cancelled", self.round_id);
            self.state = DriverState::Cancelled;
        }
    }

    /// Deals the next computer card if it is due at `now`.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Game::computer_step`]. The driver stops
    /// after an error. A replaced round is not an error: the driver stops
    /// and returns [`Tick::Stopped`] without dealing.
    pub fn poll(&mut self, game: &Game, now: Duration) -> Result<Tick, ActionError> {
        if self.state != DriverState::Running {
            return Ok(Tick::Stopped);
        }

        if now < self.next_due && game.round_id() == self.round_id {
            return Ok(Tick::Waiting);
        }

        let step = match game.computer_step_in(self.round_id) {
            Ok(step) => step,
            Err(ActionError::StaleRound { round, current }) => {
                debug!("computer turn driver for round {round} is stale, round {current} in play");
                self.state = DriverState::Cancelled;
                return Ok(Tick::Stopped);
            }
            Err(err) => {
                self.state = DriverState::Finished;
                return Err(err);
            }
        };

        if step.done {
            self.state = DriverState::Finished;
        } else {
            self.next_due += self.interval;
        }

        Ok(Tick::Dealt(step))
    }
}

impl Game {
    /// Creates a driver for the computer's turn. The first card is due one
    /// step interval after `now`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidPhase`] outside the computer's turn.
    pub fn computer_turn(&self, now: Duration) -> Result<ComputerTurnDriver, ActionError> {
        self.ensure_phase(Phase::ComputerTurn)?;

        let interval = self.options.step_interval;
        Ok(ComputerTurnDriver {
            round_id: self.round_id(),
            interval,
            next_due: now + interval,
            state: DriverState::Running,
        })
    }
}
