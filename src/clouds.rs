//! Cloud tiles.
//!
//! A cloud tile stages students drawn from the bag until one player drains
//! it wholesale into their board entrance. Durable states are empty or
//! full: [`crate::game::Game::bag_to_clouds`] refuses to top up a
//! partially filled cloud.

use serde::{Deserialize, Serialize};

use crate::core::{Color, GameError, StudentSet};

/// Fixed-capacity staging container for drawn students.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudTile {
    students: StudentSet,
    capacity: usize,
}

impl CloudTile {
    /// Create an empty cloud with the given per-variant capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            students: StudentSet::new(),
            capacity,
        }
    }

    /// Capacity of this cloud when full.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of students currently on the cloud.
    #[must_use]
    pub fn num_students(&self) -> usize {
        self.students.num_students()
    }

    /// True when the cloud holds no students.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// True while the cloud is below capacity.
    #[must_use]
    pub fn is_fillable(&self) -> bool {
        self.num_students() < self.capacity
    }

    /// Snapshot of the students on the cloud.
    #[must_use]
    pub fn students(&self) -> &StudentSet {
        &self.students
    }

    /// Place one student on the cloud.
    ///
    /// Fails with [`GameError::CloudFull`] at capacity.
    pub fn fill(&mut self, color: Color) -> Result<(), GameError> {
        if !self.is_fillable() {
            return Err(GameError::CloudFull);
        }
        self.students.add(color);
        Ok(())
    }

    /// Remove and return every student on the cloud.
    pub fn drain(&mut self) -> StudentSet {
        self.students.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cloud_is_empty() {
        let cloud = CloudTile::new(4);
        assert!(cloud.is_empty());
        assert!(cloud.is_fillable());
        assert_eq!(cloud.num_students(), 0);
    }

    #[test]
    fn test_fill_to_capacity() {
        let mut cloud = CloudTile::new(3);
        cloud.fill(Color::Yellow).unwrap();
        cloud.fill(Color::Yellow).unwrap();
        cloud.fill(Color::Blue).unwrap();

        assert!(!cloud.is_fillable());
        assert!(!cloud.is_empty());
        assert_eq!(cloud.fill(Color::Red), Err(GameError::CloudFull));
        assert_eq!(cloud.num_students(), 3);
    }

    #[test]
    fn test_drain() {
        let mut cloud = CloudTile::new(3);
        cloud.fill(Color::Green).unwrap();
        cloud.fill(Color::Pink).unwrap();

        let students = cloud.drain();
        assert_eq!(students.num_students(), 2);
        assert_eq!(students.count(Color::Green), 1);
        assert!(cloud.is_empty());
        assert!(cloud.is_fillable());
    }
}
