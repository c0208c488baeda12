//! Deck model for a memory-matching card game, with optional `no_std` support.
//!
//! The crate builds the standard 52-card deck, shuffles it with an injected
//! [`RandomSource`], and derives level-sized game decks in which every card
//! appears exactly twice.
//!
//! # Example
//!
//! ```
//! use memoria::{GameOptions, Level, RngSource};
//!
//! let options = GameOptions::for_level(Level::Apprentice);
//! let mut source = RngSource::seeded(42);
//! let deck = options.build_deck(&mut source).unwrap();
//! assert_eq!(deck.len(), 12);
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
pub mod random;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{GameDeckError, IndexError, TakeError};
pub use game::{MAX_CARD_COUNT, build_game_deck};
pub use options::{GameOptions, Level};
pub use random::{RandomSource, RngSource};
