//! # archipel
//!
//! Rules engine for a 2–3 player islands-and-students tabletop strategy
//! game. The engine owns all authoritative game state and enforces the
//! legality of every transition: player registration, game start, student
//! and mother-nature movement, island merging, professor assignment, and
//! cloud-tile refilling.
//!
//! ## Design Principles
//!
//! 1. **Single mutation entry point**: external callers drive [`Game`];
//!    sub-entities never mutate each other behind its back.
//!
//! 2. **Configuration over convention**: the 2- and 3-player variants are
//!    one [`GameConstants`] value resolved at construction, never branches
//!    inside the rules.
//!
//! 3. **Validate, then mutate**: every operation is all-or-nothing; a
//!    returned [`GameError`] means no state changed.
//!
//! 4. **Deterministic by seed**: all randomness flows through a seedable
//!    [`GameRng`], so a seeded game replays bit-exactly.
//!
//! ## Modules
//!
//! - `core`: colors, student multisets, variant constants, errors, RNG
//! - `bag`: the student supply
//! - `clouds`: cloud tiles staging drawn students
//! - `board`: per-player entrance, dining hall, towers, professors
//! - `islands`: the archipelago ring and tile merging
//! - `player`: player identity and roster entries
//! - `game`: the orchestrating state machine

pub mod bag;
pub mod board;
pub mod clouds;
pub mod core;
pub mod game;
pub mod islands;
pub mod player;

// Re-export the public surface at the crate root.
pub use crate::core::{Color, ErrorKind, GameConstants, GameError, GameRng, GameRngState, StudentSet};

pub use crate::bag::Bag;
pub use crate::board::Board;
pub use crate::clouds::CloudTile;
pub use crate::game::Game;
pub use crate::islands::{Archipelago, IslandTile, INITIAL_ISLANDS};
pub use crate::player::{Player, PlayerId};
