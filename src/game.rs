//! Game deck construction.

use crate::card::DECK_SIZE;
use crate::deck::Deck;
use crate::error::GameDeckError;
use crate::random::RandomSource;

/// Largest number of cards a game deck may hold.
pub const MAX_CARD_COUNT: usize = DECK_SIZE;

/// Builds a shuffled game deck of `card_count` cards made of matching pairs.
///
/// A full deck is shuffled, its first `card_count / 2` cards are doubled,
/// and the doubled deck is shuffled again. Every card in the result occurs
/// exactly twice.
///
/// # Errors
///
/// Returns an error if `card_count` is zero, larger than [`MAX_CARD_COUNT`],
/// or odd.
///
/// # Example
///
/// ```
/// use memoria::{RngSource, build_game_deck};
///
/// let mut source = RngSource::seeded(42);
/// let deck = build_game_deck(12, &mut source).unwrap();
/// assert_eq!(deck.len(), 12);
/// assert!(deck.is_paired());
/// ```
pub fn build_game_deck<S: RandomSource + ?Sized>(
    card_count: usize,
    source: &mut S,
) -> Result<Deck, GameDeckError> {
    validate_card_count(card_count).inspect_err(|err| {
        log::warn!("rejected game deck of {card_count} cards: {err}");
    })?;
    log::debug!("building game deck of {card_count} cards");

    // Validation bounds card_count / 2 by DECK_SIZE / 2, so the whole prefix is taken.
    let half: Deck = Deck::full()
        .shuffle(source)
        .into_iter()
        .take(card_count / 2)
        .collect();

    Ok(half.concat(&half).shuffle(source))
}

const fn validate_card_count(card_count: usize) -> Result<(), GameDeckError> {
    if card_count == 0 {
        return Err(GameDeckError::Empty);
    }
    if card_count > MAX_CARD_COUNT {
        return Err(GameDeckError::TooMany {
            requested: card_count,
            max: MAX_CARD_COUNT,
        });
    }
    if card_count % 2 != 0 {
        return Err(GameDeckError::Odd(card_count));
    }
    Ok(())
}
