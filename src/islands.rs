//! The archipelago: an ordered ring of island tiles.
//!
//! Islands hold students and, once conquered, a tower owner. Adjacent
//! tiles under the same owner collapse into a single larger tile; the ring
//! ordering is preserved and later indices shift down. Mother nature walks
//! this ring, so positions are always taken modulo the current length.

use serde::{Deserialize, Serialize};

use crate::core::{Color, StudentSet};
use crate::player::PlayerId;

/// Number of island tiles at game start.
pub const INITIAL_ISLANDS: usize = 12;

/// One island tile, possibly representing several merged tiles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IslandTile {
    students: StudentSet,
    tower_owner: Option<PlayerId>,
    size: usize,
}

impl IslandTile {
    /// Create an unowned, empty tile of size 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            students: StudentSet::new(),
            tower_owner: None,
            size: 1,
        }
    }

    /// Snapshot of the students on this tile.
    #[must_use]
    pub fn island_students(&self) -> &StudentSet {
        &self.students
    }

    /// Place one student on this tile.
    pub fn add_student(&mut self, color: Color) {
        self.students.add(color);
    }

    /// Current tower owner, if any.
    #[must_use]
    pub fn tower_owner(&self) -> Option<PlayerId> {
        self.tower_owner
    }

    /// Number of merged tiles this tile represents.
    ///
    /// Equals the number of towers on the tile once owned.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    fn absorb(&mut self, other: IslandTile) {
        debug_assert_eq!(self.tower_owner, other.tower_owner);
        self.students.absorb(other.students);
        self.size += other.size;
    }
}

impl Default for IslandTile {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered ring of island tiles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Archipelago {
    tiles: Vec<IslandTile>,
}

impl Archipelago {
    /// Create a ring of `count` fresh tiles.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            tiles: (0..count).map(|_| IslandTile::new()).collect(),
        }
    }

    /// Number of tiles currently in the ring.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True when the ring holds no tiles. Never the case in a game.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The tiles, in ring order.
    #[must_use]
    pub fn tiles(&self) -> &[IslandTile] {
        &self.tiles
    }

    /// The tile at `index`, if it exists.
    #[must_use]
    pub fn tile(&self, index: usize) -> Option<&IslandTile> {
        self.tiles.get(index)
    }

    /// Mutable access to the tile at `index`.
    pub fn tile_mut(&mut self, index: usize) -> Option<&mut IslandTile> {
        self.tiles.get_mut(index)
    }

    /// Index reached from `from` after `steps` clockwise steps.
    #[must_use]
    pub fn advance(&self, from: usize, steps: usize) -> usize {
        (from + steps) % self.tiles.len()
    }

    /// Index of the tile diametrically opposite `index`.
    #[must_use]
    pub fn opposite(&self, index: usize) -> usize {
        (index + self.tiles.len() / 2) % self.tiles.len()
    }

    /// Put `owner`'s tower on the tile at `index`.
    ///
    /// Returns the previous owner. Callers settle tower reserves.
    pub fn set_tower_owner(&mut self, index: usize, owner: PlayerId) -> Option<PlayerId> {
        let tile = &mut self.tiles[index];
        tile.tower_owner.replace(owner)
    }

    /// Collapse the tile at `index` with ring-adjacent tiles under the
    /// same tower owner.
    ///
    /// Students and `size` sum; ring order is preserved. Returns the
    /// merged tile's new index (indices after a removed tile shift down).
    /// No-op for an unowned tile.
    pub fn merge_adjacent(&mut self, mut index: usize) -> usize {
        let Some(owner) = self.tiles[index].tower_owner else {
            return index;
        };

        // Merge clockwise, then counterclockwise. Each absorption can
        // expose a new neighbor, so loop until the neighbor differs.
        loop {
            let next = self.advance(index, 1);
            if next == index || self.tiles[next].tower_owner != Some(owner) {
                break;
            }
            let absorbed = self.tiles.remove(next);
            if next < index {
                index -= 1;
            }
            self.tiles[index].absorb(absorbed);
        }
        loop {
            let prev = (index + self.tiles.len() - 1) % self.tiles.len();
            if prev == index || self.tiles[prev].tower_owner != Some(owner) {
                break;
            }
            let absorbed = self.tiles.remove(prev);
            if prev < index {
                index -= 1;
            }
            self.tiles[index].absorb(absorbed);
        }
        index
    }
}
