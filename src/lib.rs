//! A single-round twenty-one card game engine with optional `no_std`
//! support.
//!
//! A human player draws cards until they stand, reach 21, or bust; a
//! scripted computer opponent then draws one card at a time until it
//! matches the player's score or reaches 21. The crate provides a [`Game`]
//! type that owns the deck, scores and turn phase, and reports every change
//! to a [`Presenter`].
//!
//! # Example
//!
//! ```
//! use twentyone::{Game, GameOptions, Phase};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.player_stand().unwrap();
//! let steps = game.run_computer_turn().unwrap();
//! assert!(steps.last().is_some_and(|step| step.done));
//! assert_eq!(game.phase(), Phase::RoundOver);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod presenter;
pub mod result;
pub mod round;
pub mod scheduler;
mod sync;

// Re-export main types
pub use card::{BUST_LIMIT, Card, DECK_SIZE, Rank, Suit, value_of};
pub use deck::{Deck, build_deck};
pub use error::{ActionError, DealError};
pub use game::{ComputerStep, Game, Phase, PlayerHit};
pub use options::GameOptions;
pub use presenter::{Banner, NullPresenter, Presenter};
pub use result::{Outcome, Reason, RoundResult, resolve};
pub use round::{Round, Side};
pub use scheduler::{ComputerTurnDriver, Tick};
