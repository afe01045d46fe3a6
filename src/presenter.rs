//! Notification interface between the engine and a display layer.

use core::time::Duration;

use crate::card::Card;
use crate::result::RoundResult;
use crate::round::Side;

/// A transient message for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    /// The player reached exactly 21.
    PerfectScore,
    /// The round is decided.
    Result(RoundResult),
}

impl core::fmt::Display for Banner {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::PerfectScore => f.write_str("21! Perfect!"),
            Self::Result(result) => write!(f, "{result}"),
        }
    }
}

/// Receives table updates from a [`Game`](crate::Game).
///
/// Every method has an empty default, so an implementation only overrides
/// what it displays.
pub trait Presenter {
    /// A new round began: clear both sides of the table.
    fn round_started(&mut self) {}

    /// A card was dealt to `side`.
    fn card_dealt(&mut self, side: Side, card: Card) {
        let _ = (side, card);
    }

    /// The score of `side` changed.
    fn score_changed(&mut self, side: Side, score: u16) {
        let _ = (side, score);
    }

    /// Hit and stand became available (`true`) or unavailable (`false`).
    fn controls_changed(&mut self, enabled: bool) {
        let _ = enabled;
    }

    /// Show `banner` for `duration`.
    fn banner(&mut self, banner: Banner, duration: Duration) {
        let _ = (banner, duration);
    }
}

/// A presenter that ignores every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {}
