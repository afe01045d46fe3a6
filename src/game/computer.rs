use alloc::vec::Vec;

use log::info;

use crate::card::BUST_LIMIT;
use crate::error::ActionError;
use crate::presenter::Banner;
use crate::result::RoundResult;
use crate::round::Side;

use super::{ComputerStep, Game, Phase};

impl Game {
    /// Deals exactly one card to the computer.
    ///
    /// The computer's turn ends once its score reaches the player's final
    /// score or 21, whichever comes first. The step that ends it carries the
    /// round result and moves the game to [`Phase::RoundOver`].
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidPhase`] outside the computer's turn and
    /// [`ActionError::EmptyDeck`] if the deck is exhausted.
    pub fn computer_step(&self) -> Result<ComputerStep, ActionError> {
        self.ensure_phase(Phase::ComputerTurn)?;

        let threshold = self.threshold().unwrap_or_else(|| self.player_score());
        let (card, score) = self.round.with(|round| {
            round
                .deal_to(Side::Computer)
                .map(|card| (card, round.computer_score()))
        })?;

        self.notify(|presenter| {
            presenter.card_dealt(Side::Computer, card);
            presenter.score_changed(Side::Computer, score);
        });

        let done = score >= threshold || score >= BUST_LIMIT;
        let result = done.then(|| self.finish_round(threshold, score));

        Ok(ComputerStep {
            card,
            score,
            done,
            result,
        })
    }

    /// Deals one card to the computer, but only while round `round_id` is
    /// still in play.
    ///
    /// Timers that outlive their round call this instead of
    /// [`computer_step`](Self::computer_step), so a step scheduled for a
    /// replaced round never deals into the new one.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::StaleRound`] if [`start_round`](Self::start_round)
    /// or [`abandon_round`](Self::abandon_round) has run since `round_id` was
    /// read, and otherwise the errors of [`computer_step`](Self::computer_step).
    pub fn computer_step_in(&self, round_id: u32) -> Result<ComputerStep, ActionError> {
        let current = self.round_id();
        if current != round_id {
            return Err(ActionError::StaleRound {
                round: round_id,
                current,
            });
        }

        self.computer_step()
    }

    /// Plays the computer's whole turn without pausing between cards.
    ///
    /// Returns every step in order; the last one carries the result.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as
    /// [`computer_step`](Self::computer_step). Cards dealt before the failing
    /// step stay dealt and scored; read them back with
    /// [`cards`](Self::cards)`(Side::Computer)`.
    pub fn run_computer_turn(&self) -> Result<Vec<ComputerStep>, ActionError> {
        let mut steps = Vec::new();

        loop {
            let step = self.computer_step()?;
            steps.push(step);
            if step.done {
                return Ok(steps);
            }
        }
    }

    fn finish_round(&self, threshold: u16, computer_score: u16) -> RoundResult {
        let result = RoundResult::new(threshold, computer_score);

        *self.result.lock() = Some(result);
        *self.phase.lock() = Phase::RoundOver;

        info!(
            "round over: {:?} ({:?}), player {threshold}, computer {computer_score}",
            result.outcome, result.reason
        );

        let duration = self.options.banner_duration;
        self.notify(|presenter| presenter.banner(Banner::Result(result), duration));

        result
    }
}
