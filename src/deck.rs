//! Ordered card sequences.

use alloc::vec::Vec;
use core::slice;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{IndexError, TakeError};
use crate::random::RandomSource;

/// An ordered sequence of cards.
///
/// Decks are values: every operation returns a new deck and leaves its
/// inputs as they were.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the standard 52-card deck.
    ///
    /// Cards are emitted rank by rank from Ace to King, and within each rank
    /// in [`Suit::ALL`] order.
    ///
    /// # Example
    ///
    /// ```
    /// use memoria::{Card, Deck, Rank, Suit};
    ///
    /// let deck = Deck::full();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.card(0), Ok(Card::new(Rank::Ace, Suit::Spades)));
    /// ```
    #[must_use]
    pub fn full() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Returns a uniformly shuffled permutation of this deck.
    ///
    /// Uses Fisher–Yates: position `i` is swapped with a position drawn from
    /// `i..=len - 1`, for every `i` but the last.
    ///
    /// # Panics
    ///
    /// Panics if `source` returns a value outside the requested range.
    #[must_use]
    pub fn shuffle<S: RandomSource + ?Sized>(mut self, source: &mut S) -> Self {
        let len = self.cards.len();
        log::trace!("shuffling {len} cards");

        for i in 0..len.saturating_sub(1) {
            let j = source.uniform_inclusive(i, len - 1);
            self.cards.swap(i, j);
        }

        self
    }

    /// Returns a deck holding the first `n` cards, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` exceeds the number of cards.
    pub fn take_first(&self, n: usize) -> Result<Self, TakeError> {
        let prefix = self.cards.get(..n).ok_or(TakeError::OutOfRange {
            requested: n,
            available: self.cards.len(),
        })?;

        Ok(Self {
            cards: prefix.to_vec(),
        })
    }

    /// Returns this deck's cards followed by `other`'s cards.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut cards = Vec::with_capacity(self.cards.len() + other.cards.len());
        cards.extend_from_slice(&self.cards);
        cards.extend_from_slice(&other.cards);
        Self { cards }
    }

    /// Returns the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is past the end of the deck.
    pub fn card(&self, index: usize) -> Result<Card, IndexError> {
        self.cards
            .get(index)
            .copied()
            .ok_or(IndexError::OutOfRange {
                index,
                len: self.cards.len(),
            })
    }

    /// Returns the cards in the deck.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns an iterator over the cards.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Counts how many times each card occurs.
    #[must_use]
    pub fn pair_counts(&self) -> HashMap<Card, usize> {
        let mut counts = HashMap::new();
        for card in &self.cards {
            *counts.entry(*card).or_insert(0) += 1;
        }
        counts
    }

    /// Returns whether every card occurs exactly twice.
    ///
    /// An empty deck is not paired.
    #[must_use]
    pub fn is_paired(&self) -> bool {
        !self.cards.is_empty() && self.pair_counts().values().all(|&count| count == 2)
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
