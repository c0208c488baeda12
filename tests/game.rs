//! Game deck integration tests.

use memoria::{
    Card, GameDeckError, GameOptions, Level, MAX_CARD_COUNT, RandomSource, Rank, RngSource, Suit,
    build_game_deck,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Always draws the top of the range, which rotates a deck right by one.
struct HighSource;

impl RandomSource for HighSource {
    fn uniform_inclusive(&mut self, _low: usize, high: usize) -> usize {
        high
    }
}

#[test]
fn every_even_count_is_paired() {
    let mut source = RngSource::seeded(5);

    for count in (2..=MAX_CARD_COUNT).step_by(2) {
        let deck = build_game_deck(count, &mut source).unwrap();
        assert_eq!(deck.len(), count);
        assert!(deck.is_paired(), "count {count} not paired");
        assert_eq!(deck.pair_counts().len(), count / 2);
    }
}

#[test]
fn invalid_counts_are_rejected() {
    let mut source = RngSource::seeded(5);

    assert_eq!(
        build_game_deck(0, &mut source).unwrap_err(),
        GameDeckError::Empty
    );
    assert_eq!(
        build_game_deck(53, &mut source).unwrap_err(),
        GameDeckError::TooMany {
            requested: 53,
            max: 52,
        }
    );
    assert_eq!(
        build_game_deck(7, &mut source).unwrap_err(),
        GameDeckError::Odd(7)
    );
    assert_eq!(
        build_game_deck(1, &mut source).unwrap_err(),
        GameDeckError::Odd(1)
    );
}

#[test]
fn scripted_game_deck_matches_expected() {
    let deck = build_game_deck(12, &mut HighSource).unwrap();

    assert_eq!(
        deck.cards(),
        &[
            card(Rank::Two, Suit::Spades),
            card(Rank::King, Suit::Diamonds),
            card(Rank::Ace, Suit::Spades),
            card(Rank::Ace, Suit::Hearts),
            card(Rank::Ace, Suit::Clubs),
            card(Rank::Ace, Suit::Diamonds),
            card(Rank::Two, Suit::Spades),
            card(Rank::King, Suit::Diamonds),
            card(Rank::Ace, Suit::Spades),
            card(Rank::Ace, Suit::Hearts),
            card(Rank::Ace, Suit::Clubs),
            card(Rank::Ace, Suit::Diamonds),
        ]
    );
    assert_eq!(deck.pair_counts().len(), 6);
    assert!(deck.is_paired());
}

#[test]
fn seeded_game_deck_matches_expected() {
    let deck = build_game_deck(12, &mut RngSource::seeded(42)).unwrap();
    let labels: Vec<String> = deck.iter().map(ToString::to_string).collect();

    assert_eq!(
        labels,
        ["K♥", "3♦", "J♥", "3♦", "3♥", "3♥", "J♥", "9♦", "9♦", "7♥", "7♥", "K♥"]
    );
    assert_eq!(deck.pair_counts().len(), 6);
    assert!(deck.is_paired());
}

#[test]
fn seeded_game_deck_is_reproducible() {
    let a = build_game_deck(24, &mut RngSource::seeded(11)).unwrap();
    let b = build_game_deck(24, &mut RngSource::seeded(11)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn full_size_game_deck_uses_half_the_deck() {
    let deck = build_game_deck(MAX_CARD_COUNT, &mut RngSource::seeded(2)).unwrap();
    assert_eq!(deck.len(), 52);
    assert_eq!(deck.pair_counts().len(), 26);
}

#[test]
fn level_grids() {
    assert_eq!(Level::Apprentice.grid(), (4, 3));
    assert_eq!(Level::Regular.grid(), (6, 4));
    assert_eq!(Level::Master.grid(), (8, 4));

    let counts: Vec<usize> = Level::ALL.iter().map(|l| l.card_count()).collect();
    assert_eq!(counts, [12, 24, 32]);
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default();
    assert_eq!(options.level, Level::Apprentice);
    assert_eq!(options.card_count(), 12);

    let options = GameOptions::default()
        .with_level(Level::Master)
        .with_columns(5)
        .with_rows(2);
    assert_eq!(options.level, Level::Master);
    assert_eq!(options.columns, 5);
    assert_eq!(options.rows, 2);
    assert_eq!(options.card_count(), 10);
}

#[test]
fn options_build_level_decks() {
    let mut source = RngSource::seeded(8);

    for level in Level::ALL {
        let deck = GameOptions::for_level(level).build_deck(&mut source).unwrap();
        assert_eq!(deck.len(), level.card_count());
        assert!(deck.is_paired());
    }
}

#[test]
fn options_reject_bad_grids() {
    let mut source = RngSource::seeded(8);

    let odd = GameOptions::default().with_columns(5).with_rows(3);
    assert_eq!(
        odd.build_deck(&mut source).unwrap_err(),
        GameDeckError::Odd(15)
    );

    let huge = GameOptions::default().with_columns(8).with_rows(8);
    assert_eq!(
        huge.build_deck(&mut source).unwrap_err(),
        GameDeckError::TooMany {
            requested: 64,
            max: 52,
        }
    );
}
