//! Student colors.
//!
//! The game uses a fixed set of five student colors. Professors, dining
//! hall rows, and influence are all keyed by `Color`.

use serde::{Deserialize, Serialize};

/// One of the five student colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Yellow,
    Blue,
    Green,
    Red,
    Pink,
}

impl Color {
    /// Number of distinct colors.
    pub const COUNT: usize = 5;

    /// All colors, in canonical order.
    pub const ALL: [Color; Color::COUNT] = [
        Color::Yellow,
        Color::Blue,
        Color::Green,
        Color::Red,
        Color::Pink,
    ];

    /// Canonical index of this color, `0..Color::COUNT`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Red => "red",
            Color::Pink => "pink",
        };
        write!(f, "{name}")
    }
}
