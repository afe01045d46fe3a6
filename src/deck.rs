//! Deck construction and shuffling.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered stack of cards. Cards are dealt from the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Returns the 52 cards in catalog order: numeric ranks across every
    /// suit, then aces and face cards across every suit.
    #[must_use]
    pub fn ordered() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for rank in Rank::NUMERIC {
            for suit in Suit::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        for suit in Suit::ALL {
            for rank in Rank::SPECIAL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Builds a deck from cards listed in the order they will be dealt.
    ///
    /// Useful for scripting a round; the slice does not have to be a full deck.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Shuffles the deck in place.
    ///
    /// Uses `SliceRandom::shuffle`, an unbiased Fisher-Yates (Durstenfeld)
    /// shuffle: every ordering of the deck is equally likely.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has been dealt out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom first. The last element is dealt next.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Creates a complete 52-card deck in uniformly random order.
pub fn build_deck<R: Rng + ?Sized>(rng: &mut R) -> Deck {
    let mut deck = Deck::ordered();
    deck.shuffle(rng);
    deck
}
