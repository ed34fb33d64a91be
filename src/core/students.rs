//! Student multisets.
//!
//! Islands, cloud tiles, board entrances, dining halls, and the bag all
//! hold unordered collections of colored students. `StudentSet` is the
//! shared container: a per-color count table that is `Copy` and cheap to
//! move around.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Unordered multiset of colored students.
///
/// Backed by a fixed per-color count array. A full game holds 26 students
/// of each color, so `u8` counts never saturate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSet {
    counts: [u8; Color::COUNT],
}

impl StudentSet {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; Color::COUNT],
        }
    }

    /// Create a set holding `n` students of every color.
    #[must_use]
    pub const fn uniform(n: u8) -> Self {
        Self {
            counts: [n; Color::COUNT],
        }
    }

    /// Number of students of the given color.
    #[must_use]
    pub fn count(&self, color: Color) -> u8 {
        self.counts[color.index()]
    }

    /// Total number of students across all colors.
    #[must_use]
    pub fn num_students(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    /// True when the set holds no students.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Add one student of the given color.
    pub fn add(&mut self, color: Color) {
        self.add_n(color, 1);
    }

    /// Add `n` students of the given color.
    pub fn add_n(&mut self, color: Color, n: u8) {
        self.counts[color.index()] += n;
    }

    /// Remove one student of the given color.
    ///
    /// Returns `false` (and leaves the set untouched) when none is present.
    pub fn remove(&mut self, color: Color) -> bool {
        let slot = &mut self.counts[color.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    /// Merge every student of `other` into this set.
    pub fn absorb(&mut self, other: StudentSet) {
        for color in Color::ALL {
            self.counts[color.index()] += other.counts[color.index()];
        }
    }

    /// Drain this set, returning its previous contents.
    pub fn take(&mut self) -> StudentSet {
        std::mem::take(self)
    }
}
