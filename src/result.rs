//! Round outcomes.

use core::fmt;

use crate::card::BUST_LIMIT;

/// Who won the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Both sides finished on the same score.
    Tie,
    /// The player wins.
    PlayerWins,
    /// The computer wins.
    ComputerWins,
}

/// Why the round went the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    /// Both scores are equal.
    EqualScore,
    /// The player went over 21.
    PlayerBust,
    /// The computer went over 21.
    ComputerBust,
    /// The winner has the higher score.
    HigherScore,
}

/// Final result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundResult {
    /// The winner.
    pub outcome: Outcome,
    /// What decided it.
    pub reason: Reason,
    /// The player's final score.
    pub threshold: u16,
    /// The computer's final score.
    pub computer_score: u16,
}

/// Decides the round from the player's final score (`threshold`) and the
/// computer's final score.
///
/// Branches are checked in order, so a busted player loses even when the
/// computer busts too.
#[must_use]
pub const fn resolve(threshold: u16, computer_score: u16) -> Outcome {
    resolve_with_reason(threshold, computer_score).0
}

const fn resolve_with_reason(threshold: u16, computer_score: u16) -> (Outcome, Reason) {
    if computer_score == threshold {
        (Outcome::Tie, Reason::EqualScore)
    } else if threshold > BUST_LIMIT {
        (Outcome::ComputerWins, Reason::PlayerBust)
    } else if computer_score > BUST_LIMIT {
        (Outcome::PlayerWins, Reason::ComputerBust)
    } else if computer_score > threshold {
        (Outcome::ComputerWins, Reason::HigherScore)
    } else {
        (Outcome::PlayerWins, Reason::HigherScore)
    }
}

impl RoundResult {
    /// Resolves the round and records the scores it was decided on.
    #[must_use]
    pub const fn new(threshold: u16, computer_score: u16) -> Self {
        let (outcome, reason) = resolve_with_reason(threshold, computer_score);
        Self {
            outcome,
            reason,
            threshold,
            computer_score,
        }
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match (self.outcome, self.reason) {
            (Outcome::Tie, _) => "Tie! Nobody wins",
            (Outcome::ComputerWins, Reason::PlayerBust) => "The computer wins! You went over 21",
            (Outcome::ComputerWins, _) => "The computer wins! It has the higher score",
            (Outcome::PlayerWins, Reason::ComputerBust) => "You win! The computer went over 21",
            (Outcome::PlayerWins, _) => "You win! You have the higher score",
        };
        f.write_str(text)
    }
}
