//! Error types for game operations.

use thiserror::Error;

use crate::game::Phase;

/// Errors that can occur while dealing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur during player and computer actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not allowed in the current phase.
    #[error("action requires {expected:?} but the round is in {found:?}")]
    InvalidPhase {
        /// Phase the action needs.
        expected: Phase,
        /// Phase the round was in.
        found: Phase,
    },
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
    /// The action was issued for a round that has since been replaced.
    #[error("action for round {round} but round {current} is in play")]
    StaleRound {
        /// Round the action was issued for.
        round: u32,
        /// Round currently in play.
        current: u32,
    },
}

impl From<DealError> for ActionError {
    fn from(err: DealError) -> Self {
        match err {
            DealError::EmptyDeck => Self::EmptyDeck,
        }
    }
}
