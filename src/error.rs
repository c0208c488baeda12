//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur when reading a card by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Index is past the end of the deck.
    #[error("index {index} is out of range for a deck of {len} cards")]
    OutOfRange {
        /// Requested position.
        index: usize,
        /// Number of cards in the deck.
        len: usize,
    },
}

/// Errors that can occur when taking a prefix of a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TakeError {
    /// More cards were requested than the deck holds.
    #[error("cannot take {requested} cards from a deck of {available}")]
    OutOfRange {
        /// Requested number of cards.
        requested: usize,
        /// Number of cards in the deck.
        available: usize,
    },
}

/// Errors that can occur when building a game deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameDeckError {
    /// Requested card count is zero.
    #[error("card count is zero")]
    Empty,
    /// Requested card count exceeds the size of a full deck.
    #[error("card count {requested} exceeds the maximum of {max}")]
    TooMany {
        /// Requested card count.
        requested: usize,
        /// Largest card count a game deck may have.
        max: usize,
    },
    /// Requested card count cannot be split into pairs.
    #[error("card count {0} is odd")]
    Odd(usize),
}
