//! Error taxonomy.
//!
//! Every fallible engine operation returns `Result<_, GameError>`. The
//! engine validates before it mutates: a returned error means no state
//! changed. Recovery policy belongs entirely to the caller.
//!
//! Errors fall into three kinds, exposed via [`GameError::kind`]:
//! - `InvalidArgument`: malformed input the caller controls.
//! - `IllegalState`: the operation's preconditions on game, board, or
//!   cloud state are unmet; re-check state before retrying.
//! - `IndexOutOfRange`: a cloud or island index addresses no tile.

use thiserror::Error;

use super::color::Color;

/// Broad classification of a [`GameError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed caller-controlled input.
    InvalidArgument,
    /// Preconditions on current state unmet.
    IllegalState,
    /// A slot index addresses no existing tile.
    IndexOutOfRange,
}

/// Errors returned by engine operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("nickname must not be empty")]
    EmptyNickname,
    #[error("nickname {0:?} is already taken")]
    DuplicateNickname(String),
    #[error("player count must be 2 or 3, got {0}")]
    UnsupportedPlayerCount(usize),
    #[error("mother nature must move between 1 and {max} steps, got {steps}")]
    InvalidMotherNatureMove { steps: usize, max: usize },

    #[error("game requires {expected} players, only {joined} joined")]
    RosterIncomplete { joined: usize, expected: usize },
    #[error("game has already started")]
    AlreadyStarted,
    #[error("game has not started yet")]
    NotStarted,
    #[error("cloud tiles must all be empty before a refill")]
    CloudsNotEmpty,
    #[error("cloud tile is already full")]
    CloudFull,
    #[error("cloud tile {0} has not been refilled")]
    CloudNotRefilled(usize),
    #[error("entrance holds {occupancy} students, needs exactly {required} to receive a cloud")]
    EntranceNotFillable { occupancy: usize, required: usize },
    #[error("entrance is full")]
    EntranceFull,
    #[error("no {0} student in the entrance")]
    NoStudentInEntrance(Color),
    #[error("the {0} dining hall row is full")]
    HallRowFull(Color),
    #[error("the bag cannot supply enough students")]
    EmptyBag,

    #[error("cloud tile {index} does not exist ({count} clouds in play)")]
    CloudIndexOutOfRange { index: usize, count: usize },
    #[error("island {index} does not exist ({count} islands in play)")]
    IslandIndexOutOfRange { index: usize, count: usize },
}

impl GameError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::EmptyNickname
            | GameError::DuplicateNickname(_)
            | GameError::UnsupportedPlayerCount(_)
            | GameError::InvalidMotherNatureMove { .. } => ErrorKind::InvalidArgument,

            GameError::RosterIncomplete { .. }
            | GameError::AlreadyStarted
            | GameError::NotStarted
            | GameError::CloudsNotEmpty
            | GameError::CloudFull
            | GameError::CloudNotRefilled(_)
            | GameError::EntranceNotFillable { .. }
            | GameError::EntranceFull
            | GameError::NoStudentInEntrance(_)
            | GameError::HallRowFull(_)
            | GameError::EmptyBag => ErrorKind::IllegalState,

            GameError::CloudIndexOutOfRange { .. } | GameError::IslandIndexOutOfRange { .. } => {
                ErrorKind::IndexOutOfRange
            }
        }
    }
}
