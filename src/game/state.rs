//! Turn phases and per-action reports.

use crate::card::Card;
use crate::result::RoundResult;

/// Turn phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The player may hit or stand.
    PlayerTurn,
    /// The computer draws one card per step.
    ComputerTurn,
    /// The round is over; start a new one to keep playing.
    RoundOver,
}

/// Report of a successful [`Game::player_hit`](crate::Game::player_hit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerHit {
    /// The card dealt to the player.
    pub card: Card,
    /// The player's score after the card.
    pub score: u16,
    /// Phase after the hit. `ComputerTurn` when the player busted or hit 21.
    pub phase: Phase,
}

/// Report of a single [`Game::computer_step`](crate::Game::computer_step).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerStep {
    /// The card dealt to the computer.
    pub card: Card,
    /// The computer's score after the card.
    pub score: u16,
    /// Whether the computer's turn is over.
    pub done: bool,
    /// The round result, present once `done` is set.
    pub result: Option<RoundResult>,
}
