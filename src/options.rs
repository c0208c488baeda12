//! Difficulty levels and game configuration.

use crate::deck::Deck;
use crate::error::GameDeckError;
use crate::game::build_game_deck;
use crate::random::RandomSource;

/// Difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Level {
    /// 4 × 3 grid.
    #[default]
    Apprentice,
    /// 6 × 4 grid.
    Regular,
    /// 8 × 4 grid.
    Master,
}

impl Level {
    /// All levels, easiest first.
    pub const ALL: [Self; 3] = [Self::Apprentice, Self::Regular, Self::Master];

    /// Returns the grid size as `(columns, rows)`.
    #[must_use]
    pub const fn grid(self) -> (u8, u8) {
        match self {
            Self::Apprentice => (4, 3),
            Self::Regular => (6, 4),
            Self::Master => (8, 4),
        }
    }

    /// Returns the number of cards laid out at this level.
    ///
    /// # Example
    ///
    /// ```
    /// use memoria::Level;
    ///
    /// assert_eq!(Level::Regular.card_count(), 24);
    /// ```
    #[must_use]
    pub const fn card_count(self) -> usize {
        let (columns, rows) = self.grid();
        columns as usize * rows as usize
    }
}

/// Configuration for a memory game.
///
/// Starts from a [`Level`] and lets the grid be customized:
///
/// ```
/// use memoria::{GameOptions, Level};
///
/// let options = GameOptions::default()
///     .with_level(Level::Master)
///     .with_rows(2);
/// assert_eq!(options.card_count(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Level the grid was derived from.
    pub level: Level,
    /// Number of grid columns.
    pub columns: u8,
    /// Number of grid rows.
    pub rows: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self::for_level(Level::default())
    }
}

impl GameOptions {
    /// Creates options using the level's grid.
    #[must_use]
    pub const fn for_level(level: Level) -> Self {
        let (columns, rows) = level.grid();
        Self {
            level,
            columns,
            rows,
        }
    }

    /// Sets the level and resets the grid to that level's size.
    ///
    /// # Example
    ///
    /// ```
    /// use memoria::{GameOptions, Level};
    ///
    /// let options = GameOptions::default().with_level(Level::Regular);
    /// assert_eq!((options.columns, options.rows), (6, 4));
    /// ```
    #[must_use]
    pub const fn with_level(mut self, level: Level) -> Self {
        let (columns, rows) = level.grid();
        self.level = level;
        self.columns = columns;
        self.rows = rows;
        self
    }

    /// Sets the number of columns.
    #[must_use]
    pub const fn with_columns(mut self, columns: u8) -> Self {
        self.columns = columns;
        self
    }

    /// Sets the number of rows.
    #[must_use]
    pub const fn with_rows(mut self, rows: u8) -> Self {
        self.rows = rows;
        self
    }

    /// Returns the number of cards in the grid.
    #[must_use]
    pub const fn card_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Builds a game deck filling the grid.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid holds zero, odd, or more than
    /// [`MAX_CARD_COUNT`](crate::game::MAX_CARD_COUNT) cards.
    pub fn build_deck<S: RandomSource + ?Sized>(
        &self,
        source: &mut S,
    ) -> Result<Deck, GameDeckError> {
        build_game_deck(self.card_count(), source)
    }
}
