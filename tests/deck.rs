//! Card, valuation, deck and round state tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use twentyone::{
    Card, DECK_SIZE, DealError, Deck, Rank, Round, Side, Suit, build_deck, value_of,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

#[test]
fn deck_is_full_cross_product() {
    let deck = build_deck(&mut ChaCha8Rng::seed_from_u64(3));
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::NUMERIC.into_iter().chain(Rank::SPECIAL) {
            assert!(unique.contains(&card(suit, rank)), "missing {rank:?} of {suit:?}");
        }
    }
}

#[test]
fn ordered_deck_lists_numbers_then_specials() {
    let deck = Deck::ordered();
    let cards = deck.cards();

    assert_eq!(cards[0], card(Suit::Spades, Rank::Two));
    assert_eq!(cards[3], card(Suit::Clubs, Rank::Two));
    assert_eq!(cards[35], card(Suit::Clubs, Rank::Ten));
    assert_eq!(cards[36], card(Suit::Spades, Rank::Ace));
    assert_eq!(cards[51], card(Suit::Clubs, Rank::King));
}

#[test]
fn shuffle_spreads_every_card_over_every_position() {
    const TRIALS: usize = 5200;
    let ordered = Deck::ordered();
    let index_of = |c: &Card| {
        ordered
            .cards()
            .iter()
            .position(|o| o == c)
            .unwrap()
    };

    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut counts = vec![[0_u32; DECK_SIZE]; DECK_SIZE];
    for _ in 0..TRIALS {
        let deck = build_deck(&mut rng);
        for (position, c) in deck.cards().iter().enumerate() {
            counts[position][index_of(c)] += 1;
        }
    }

    // Expected 100 per cell, standard deviation just under 10.
    for (position, row) in counts.iter().enumerate() {
        for (index, &count) in row.iter().enumerate() {
            assert!(
                (40..=160).contains(&count),
                "card {index} landed at position {position} {count} times"
            );
        }
    }
}

#[test]
fn shuffle_depends_on_seed() {
    let a = build_deck(&mut ChaCha8Rng::seed_from_u64(1));
    let b = build_deck(&mut ChaCha8Rng::seed_from_u64(1));
    let c = build_deck(&mut ChaCha8Rng::seed_from_u64(2));

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, Deck::ordered());
}

#[test]
fn card_values() {
    for suit in Suit::ALL {
        for (rank, expected) in Rank::NUMERIC.into_iter().zip(2..=10) {
            assert_eq!(value_of(card(suit, rank)), expected);
        }
        assert_eq!(value_of(card(suit, Rank::Jack)), 10);
        assert_eq!(value_of(card(suit, Rank::Queen)), 10);
        assert_eq!(value_of(card(suit, Rank::King)), 10);
        assert_eq!(value_of(card(suit, Rank::Ace)), 11);
    }
}

#[test]
fn card_text() {
    assert_eq!(card(Suit::Spades, Rank::Ten).to_string(), "10♠");
    assert_eq!(card(Suit::Hearts, Rank::Ace).code().to_string(), "AH");
    assert_eq!(card(Suit::Diamonds, Rank::Queen).code().to_string(), "QD");
    assert_eq!(card(Suit::Clubs, Rank::Seven).code().to_string(), "7C");
}

#[test]
fn deal_moves_one_card_and_scores_it() {
    let mut round = Round::new(build_deck(&mut ChaCha8Rng::seed_from_u64(9)));

    let mut player = 0_u16;
    let mut computer = 0_u16;
    for i in 0..DECK_SIZE {
        let before = round.cards_remaining();
        let side = if i % 3 == 0 { Side::Computer } else { Side::Player };
        let dealt = round.deal_to(side).unwrap();

        assert_eq!(round.cards_remaining(), before - 1);
        match side {
            Side::Player => player += u16::from(value_of(dealt)),
            Side::Computer => computer += u16::from(value_of(dealt)),
        }
        assert_eq!(round.player_score(), player);
        assert_eq!(round.computer_score(), computer);
    }

    assert!(round.deck().is_empty());
    assert_eq!(round.deal_to(Side::Player).unwrap_err(), DealError::EmptyDeck);
    assert_eq!(round.player_score(), player);
    assert_eq!(
        round.cards(Side::Player).len() + round.cards(Side::Computer).len(),
        DECK_SIZE
    );
}

#[test]
fn deals_from_the_top_in_draw_order() {
    let draws = [
        card(Suit::Hearts, Rank::Five),
        card(Suit::Clubs, Rank::King),
        card(Suit::Spades, Rank::Ace),
    ];
    let mut round = Round::new(Deck::from_draws(&draws));

    assert_eq!(round.deal_to(Side::Player).unwrap(), draws[0]);
    assert_eq!(round.deal_to(Side::Computer).unwrap(), draws[1]);
    assert_eq!(round.deal_to(Side::Player).unwrap(), draws[2]);

    assert_eq!(round.score(Side::Player), 16);
    assert_eq!(round.score(Side::Computer), 10);
    assert_eq!(round.cards(Side::Player), &[draws[0], draws[2]]);
}
