//! Variant constants.
//!
//! The game is played in a 2-player or a 3-player variant. The two differ
//! only in a handful of numbers (entrance capacity, cloud capacity, tower
//! reserve). The engine never hardcodes these: they are resolved once at
//! game construction into a plain `GameConstants` value and carried by the
//! entities that need them.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Numeric constants for one player-count variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConstants {
    /// Students a board entrance holds when full.
    pub entrance_size: usize,
    /// Students a cloud tile holds when full.
    pub cloud_size: usize,
    /// Towers in each player's reserve at game start.
    pub towers_per_player: usize,
    /// Seats per color row in the dining hall.
    pub hall_row_size: usize,
}

impl GameConstants {
    /// Constants for the 2-player variant.
    #[must_use]
    pub const fn two_players() -> Self {
        Self {
            entrance_size: 7,
            cloud_size: 3,
            towers_per_player: 8,
            hall_row_size: 10,
        }
    }

    /// Constants for the 3-player variant.
    #[must_use]
    pub const fn three_players() -> Self {
        Self {
            entrance_size: 9,
            cloud_size: 4,
            towers_per_player: 6,
            hall_row_size: 10,
        }
    }

    /// Resolve the constant set for a player count.
    ///
    /// Only 2 and 3 player games are supported.
    pub fn for_player_count(player_count: usize) -> Result<Self, GameError> {
        match player_count {
            2 => Ok(Self::two_players()),
            3 => Ok(Self::three_players()),
            n => Err(GameError::UnsupportedPlayerCount(n)),
        }
    }

    /// Entrance occupancy at which a whole cloud fits exactly.
    #[must_use]
    pub const fn fillable_threshold(&self) -> usize {
        self.entrance_size - self.cloud_size
    }
}
