//! The student bag.
//!
//! An unordered supply of students drawn uniformly at random. Setup uses
//! two phases: a small seeding bag (2 students per color) populates the
//! islands, then the main supply (24 per color) is added for entrances and
//! cloud refills.

use serde::{Deserialize, Serialize};

use crate::core::{Color, GameRng, StudentSet};

/// Students of each color in the island-seeding phase of the bag.
pub const SEEDING_PER_COLOR: u8 = 2;

/// Students of each color added to the bag after island setup.
pub const SUPPLY_PER_COLOR: u8 = 24;

/// Unordered multiset of students supporting uniform random draws.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bag {
    students: StudentSet,
}

impl Bag {
    /// Create an empty bag.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a bag holding `per_color` students of every color.
    #[must_use]
    pub fn with_per_color(per_color: u8) -> Self {
        Self {
            students: StudentSet::uniform(per_color),
        }
    }

    /// Add `n` students of the given color.
    pub fn add(&mut self, color: Color, n: u8) {
        self.students.add_n(color, n);
    }

    /// Total students remaining.
    #[must_use]
    pub fn num_students(&self) -> usize {
        self.students.num_students()
    }

    /// True when no students remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Draw one student uniformly at random over the remaining students.
    ///
    /// Returns `None` when the bag is empty.
    pub fn draw(&mut self, rng: &mut GameRng) -> Option<Color> {
        let total = self.num_students();
        if total == 0 {
            return None;
        }
        let mut pick = rng.gen_range_usize(0..total);
        for color in Color::ALL {
            let count = self.students.count(color) as usize;
            if pick < count {
                self.students.remove(color);
                return Some(color);
            }
            pick -= count;
        }
        unreachable!("pick index within total student count")
    }
}
