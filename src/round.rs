//! Per-round scores and the remaining deck.

use alloc::vec::Vec;

use log::debug;

use crate::card::{Card, value_of};
use crate::deck::Deck;
use crate::error::DealError;

/// Which side of the table a card goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The human player.
    Player,
    /// The scripted computer opponent.
    Computer,
}

/// Scores and deck for a single round.
///
/// Each score always equals the sum of the values of the cards dealt to
/// that side.
#[derive(Debug, Clone)]
pub struct Round {
    deck: Deck,
    player_score: u16,
    computer_score: u16,
    player_cards: Vec<Card>,
    computer_cards: Vec<Card>,
}

impl Round {
    /// Starts a round with the given deck and both scores at zero.
    #[must_use]
    pub const fn new(deck: Deck) -> Self {
        Self {
            deck,
            player_score: 0,
            computer_score: 0,
            player_cards: Vec::new(),
            computer_cards: Vec::new(),
        }
    }

    /// Deals the top card to `side` and adds its value to that side's score.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no cards remain. Nothing is
    /// changed in that case.
    pub fn deal_to(&mut self, side: Side) -> Result<Card, DealError> {
        let card = self.deck.pop().ok_or(DealError::EmptyDeck)?;
        let value = u16::from(value_of(card));

        let score = match side {
            Side::Player => {
                self.player_cards.push(card);
                &mut self.player_score
            }
            Side::Computer => {
                self.computer_cards.push(card);
                &mut self.computer_score
            }
        };
        *score += value;

        debug!(
            "dealt {card} to {side:?}, score {}, {} left",
            *score,
            self.deck.len()
        );

        Ok(card)
    }

    /// Score of the given side.
    #[must_use]
    pub const fn score(&self, side: Side) -> u16 {
        match side {
            Side::Player => self.player_score,
            Side::Computer => self.computer_score,
        }
    }

    /// The player's score.
    #[must_use]
    pub const fn player_score(&self) -> u16 {
        self.player_score
    }

    /// The computer's score.
    #[must_use]
    pub const fn computer_score(&self) -> u16 {
        self.computer_score
    }

    /// Cards dealt to the given side, in deal order.
    #[must_use]
    pub fn cards(&self, side: Side) -> &[Card] {
        match side {
            Side::Player => &self.player_cards,
            Side::Computer => &self.computer_cards,
        }
    }

    /// Number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// The remaining deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }
}
