//! Core engine types: colors, student multisets, variant constants,
//! errors, RNG.
//!
//! This module contains the fundamental building blocks shared by every
//! game entity. The player-count variants configure the engine via
//! [`GameConstants`] rather than branching inside the rules.

pub mod color;
pub mod config;
pub mod error;
pub mod rng;
pub mod students;

pub use color::Color;
pub use config::GameConstants;
pub use error::{ErrorKind, GameError};
pub use rng::{GameRng, GameRngState};
pub use students::StudentSet;
