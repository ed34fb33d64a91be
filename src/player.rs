//! Players and player identification.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::GameConstants;

/// Player identifier: the 0-based roster index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw roster index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One registered player: a unique nickname and an owned board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    nickname: String,
    board: Board,
}

impl Player {
    /// Create a player with an empty board for the given variant.
    #[must_use]
    pub fn new(nickname: impl Into<String>, constants: &GameConstants) -> Self {
        Self {
            nickname: nickname.into(),
            board: Board::new(constants),
        }
    }

    /// The player's nickname.
    #[must_use]
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// The player's board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to the player's board.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
