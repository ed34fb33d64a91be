//! Player boards.
//!
//! A board holds the two staging areas for one player's students plus the
//! player's tower reserve and professor markers:
//!
//! - **Entrance**: undecided students awaiting placement. Topped up in
//!   discrete cloud-sized increments, never partially: the entrance is
//!   "fillable" only at the exact occupancy where one whole cloud fits.
//! - **Dining hall**: committed students, one bounded row per color.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Color, GameConstants, GameError, StudentSet};

/// One player's board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    entrance: StudentSet,
    hall: StudentSet,
    professors: FxHashSet<Color>,
    towers: usize,
    entrance_size: usize,
    cloud_size: usize,
    hall_row_size: usize,
}

impl Board {
    /// Create an empty board for the given variant.
    #[must_use]
    pub fn new(constants: &GameConstants) -> Self {
        Self {
            entrance: StudentSet::new(),
            hall: StudentSet::new(),
            professors: FxHashSet::default(),
            towers: constants.towers_per_player,
            entrance_size: constants.entrance_size,
            cloud_size: constants.cloud_size,
            hall_row_size: constants.hall_row_size,
        }
    }

    // === Entrance ===

    /// Snapshot of the entrance students.
    #[must_use]
    pub fn entrance(&self) -> &StudentSet {
        &self.entrance
    }

    /// Entrance capacity for this variant.
    #[must_use]
    pub fn entrance_size(&self) -> usize {
        self.entrance_size
    }

    /// Current entrance occupancy.
    #[must_use]
    pub fn num_in_entrance(&self) -> usize {
        self.entrance.num_students()
    }

    /// True iff at least one student of `color` is in the entrance.
    #[must_use]
    pub fn student_in_entrance(&self, color: Color) -> bool {
        self.entrance.count(color) > 0
    }

    /// True iff the entrance can receive one whole cloud.
    ///
    /// Occupancy must equal exactly `entrance_size - cloud_size`: the
    /// entrance refills in cloud-sized increments, so both one student too
    /// many and one too few leave it non-fillable.
    #[must_use]
    pub fn entrance_is_fillable(&self) -> bool {
        self.num_in_entrance() == self.entrance_size - self.cloud_size
    }

    /// Place one student in the entrance.
    pub fn add_to_entrance(&mut self, color: Color) -> Result<(), GameError> {
        if self.num_in_entrance() >= self.entrance_size {
            return Err(GameError::EntranceFull);
        }
        self.entrance.add(color);
        Ok(())
    }

    /// Place a batch of students in the entrance, all or nothing.
    pub fn receive_students(&mut self, students: StudentSet) -> Result<(), GameError> {
        if self.num_in_entrance() + students.num_students() > self.entrance_size {
            return Err(GameError::EntranceFull);
        }
        self.entrance.absorb(students);
        Ok(())
    }

    /// Remove one student of `color` from the entrance.
    ///
    /// Returns `false` (and mutates nothing) when none is present.
    pub fn remove_student_from_entrance(&mut self, color: Color) -> bool {
        self.entrance.remove(color)
    }

    // === Dining hall ===

    /// Snapshot of the dining hall students.
    #[must_use]
    pub fn hall(&self) -> &StudentSet {
        &self.hall
    }

    /// Students seated in the hall row for `color`.
    #[must_use]
    pub fn students_in_hall(&self, color: Color) -> u8 {
        self.hall.count(color)
    }

    /// Seat one student in its hall row.
    ///
    /// Fails with [`GameError::HallRowFull`] when the row is at capacity.
    pub fn seat_student(&mut self, color: Color) -> Result<(), GameError> {
        if usize::from(self.hall.count(color)) >= self.hall_row_size {
            return Err(GameError::HallRowFull(color));
        }
        self.hall.add(color);
        Ok(())
    }

    // === Professors ===

    /// True iff this board holds the professor of `color`.
    #[must_use]
    pub fn has_professor(&self, color: Color) -> bool {
        self.professors.contains(&color)
    }

    /// Grant the professor of `color` to this board.
    pub fn grant_professor(&mut self, color: Color) {
        self.professors.insert(color);
    }

    /// Revoke the professor of `color` from this board.
    pub fn revoke_professor(&mut self, color: Color) {
        self.professors.remove(&color);
    }

    // === Towers ===

    /// Towers remaining in the reserve.
    #[must_use]
    pub fn towers(&self) -> usize {
        self.towers
    }

    /// Take one tower from the reserve.
    ///
    /// Returns `false` when the reserve is empty.
    pub fn take_tower(&mut self) -> bool {
        if self.towers == 0 {
            return false;
        }
        self.towers -= 1;
        true
    }

    /// Return `n` towers to the reserve.
    pub fn return_towers(&mut self, n: usize) {
        self.towers += n;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(&GameConstants::three_players())
    }

    fn fill_entrance(b: &mut Board) {
        while b.num_in_entrance() < b.entrance_size() {
            b.add_to_entrance(Color::Yellow).unwrap();
        }
    }

    #[test]
    fn test_new_board() {
        let b = board();
        assert_eq!(b.num_in_entrance(), 0);
        assert_eq!(b.towers(), 6);
        assert!(!b.has_professor(Color::Red));
    }

    #[test]
    fn test_entrance_capacity() {
        let mut b = board();
        fill_entrance(&mut b);
        assert_eq!(b.num_in_entrance(), 9);
        assert_eq!(b.add_to_entrance(Color::Blue), Err(GameError::EntranceFull));
    }

    #[test]
    fn test_fillable_only_at_exact_threshold() {
        let mut b = board();
        fill_entrance(&mut b);
        assert!(!b.entrance_is_fillable());

        // 3-player variant: entrance 9, cloud 4, threshold 5.
        for _ in 0..3 {
            b.remove_student_from_entrance(Color::Yellow);
        }
        assert_eq!(b.num_in_entrance(), 6);
        assert!(!b.entrance_is_fillable());

        b.remove_student_from_entrance(Color::Yellow);
        assert!(b.entrance_is_fillable());

        b.remove_student_from_entrance(Color::Yellow);
        assert_eq!(b.num_in_entrance(), 4);
        assert!(!b.entrance_is_fillable());
    }

    #[test]
    fn test_remove_absent_color_is_noop() {
        let mut b = board();
        b.add_to_entrance(Color::Green).unwrap();
        assert!(!b.remove_student_from_entrance(Color::Pink));
        assert_eq!(b.num_in_entrance(), 1);
        assert!(b.remove_student_from_entrance(Color::Green));
        assert!(!b.student_in_entrance(Color::Green));
    }

    #[test]
    fn test_receive_students_all_or_nothing() {
        let mut b = board();
        fill_entrance(&mut b);
        b.remove_student_from_entrance(Color::Yellow);

        let mut batch = StudentSet::new();
        batch.add_n(Color::Blue, 2);
        assert_eq!(b.receive_students(batch), Err(GameError::EntranceFull));
        assert_eq!(b.num_in_entrance(), 8);

        let mut one = StudentSet::new();
        one.add(Color::Blue);
        b.receive_students(one).unwrap();
        assert_eq!(b.num_in_entrance(), 9);
    }

    #[test]
    fn test_hall_row_limit() {
        let mut b = board();
        for _ in 0..10 {
            b.seat_student(Color::Red).unwrap();
        }
        assert_eq!(
            b.seat_student(Color::Red),
            Err(GameError::HallRowFull(Color::Red))
        );
        assert_eq!(b.students_in_hall(Color::Red), 10);
        b.seat_student(Color::Blue).unwrap();
    }

    #[test]
    fn test_professors() {
        let mut b = board();
        b.grant_professor(Color::Pink);
        assert!(b.has_professor(Color::Pink));
        b.revoke_professor(Color::Pink);
        assert!(!b.has_professor(Color::Pink));
    }

    #[test]
    fn test_towers() {
        let mut b = Board::new(&GameConstants::two_players());
        assert_eq!(b.towers(), 8);
        assert!(b.take_tower());
        assert_eq!(b.towers(), 7);
        b.return_towers(2);
        assert_eq!(b.towers(), 9);

        for _ in 0..9 {
            assert!(b.take_tower());
        }
        assert!(!b.take_tower());
    }
}
