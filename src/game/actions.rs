use log::{info, warn};

use crate::card::BUST_LIMIT;
use crate::error::ActionError;
use crate::presenter::Banner;
use crate::round::Side;

use super::{Game, Phase, PlayerHit};

impl Game {
    /// Hands the turn to the computer with the player's final score as the
    /// threshold it has to reach.
    fn hand_off(&self, threshold: u16) {
        *self.threshold.lock() = Some(threshold);
        *self.phase.lock() = Phase::ComputerTurn;

        info!("computer's turn, threshold {threshold}");
        self.notify(|presenter| presenter.controls_changed(false));
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 or landing on exactly 21 ends the player's turn.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidPhase`] outside the player's turn and
    /// [`ActionError::EmptyDeck`] if the deck is exhausted. The round is
    /// left untouched on error.
    pub fn player_hit(&self) -> Result<PlayerHit, ActionError> {
        self.ensure_phase(Phase::PlayerTurn)?;

        let (card, score) = self.round.with(|round| {
            round
                .deal_to(Side::Player)
                .map(|card| (card, round.player_score()))
        })?;

        self.notify(|presenter| {
            presenter.card_dealt(Side::Player, card);
            presenter.score_changed(Side::Player, score);
        });

        if score > BUST_LIMIT {
            warn!("player busted with {score}");
            self.hand_off(score);
        } else if score == BUST_LIMIT {
            info!("player reached exactly {BUST_LIMIT}");
            let duration = self.options.perfect_banner_duration;
            self.notify(|presenter| presenter.banner(Banner::PerfectScore, duration));
            self.hand_off(score);
        }

        Ok(PlayerHit {
            card,
            score,
            phase: self.phase(),
        })
    }

    /// Player action: Stand (end the turn with the current score).
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidPhase`] outside the player's turn.
    pub fn player_stand(&self) -> Result<(), ActionError> {
        self.ensure_phase(Phase::PlayerTurn)?;

        let score = self.player_score();
        info!("player stands on {score}");
        self.hand_off(score);

        Ok(())
    }
}
