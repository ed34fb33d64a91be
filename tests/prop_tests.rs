//! Property-based tests for bag draws, the fillable threshold, and
//! archipelago merging.

use proptest::prelude::*;

use archipel::{Archipelago, Bag, Board, Color, GameConstants, GameRng, PlayerId, StudentSet};

proptest! {
    /// Drawing a bag dry returns exactly the students put in.
    #[test]
    fn prop_bag_draws_conserve_students(per_color in 0u8..=26, seed in any::<u64>()) {
        let mut bag = Bag::with_per_color(per_color);
        let mut rng = GameRng::new(seed);

        let mut drawn = StudentSet::new();
        while let Some(color) = bag.draw(&mut rng) {
            drawn.add(color);
        }

        prop_assert!(bag.is_empty());
        prop_assert_eq!(drawn, StudentSet::uniform(per_color));
    }

    /// The entrance is fillable at exactly one occupancy.
    #[test]
    fn prop_fillable_threshold_is_exact(occupancy in 0usize..=9, three_players in any::<bool>()) {
        let constants = if three_players {
            GameConstants::three_players()
        } else {
            GameConstants::two_players()
        };
        prop_assume!(occupancy <= constants.entrance_size);

        let mut board = Board::new(&constants);
        for _ in 0..occupancy {
            board.add_to_entrance(Color::Yellow).unwrap();
        }

        prop_assert_eq!(
            board.entrance_is_fillable(),
            occupancy == constants.fillable_threshold()
        );
    }

    /// Merging conserves students and tile sizes and never empties the ring.
    #[test]
    fn prop_merge_conserves_students_and_size(
        owners in prop::collection::vec(prop::option::of(0u8..3), 3..=12),
        students in prop::collection::vec(0u8..4, 3..=12),
        index_seed in any::<usize>(),
    ) {
        let mut arch = Archipelago::new(owners.len());
        for (i, owner) in owners.iter().enumerate() {
            if let Some(p) = owner {
                arch.set_tower_owner(i, PlayerId::new(*p));
            }
        }
        for (i, &n) in students.iter().enumerate().take(owners.len()) {
            for _ in 0..n {
                arch.tile_mut(i).unwrap().add_student(Color::Green);
            }
        }

        let total_students: usize = arch
            .tiles()
            .iter()
            .map(|t| t.island_students().num_students())
            .sum();
        let original_len = arch.len();

        let index = index_seed % arch.len();
        let merged = arch.merge_adjacent(index);

        prop_assert!(!arch.is_empty());
        prop_assert!(merged < arch.len());

        let students_after: usize = arch
            .tiles()
            .iter()
            .map(|t| t.island_students().num_students())
            .sum();
        let size_after: usize = arch.tiles().iter().map(|t| t.size()).sum();

        prop_assert_eq!(students_after, total_students);
        prop_assert_eq!(size_after, original_len);

        // The merged tile has no same-owner neighbor left.
        if let Some(owner) = arch.tile(merged).unwrap().tower_owner() {
            if arch.len() > 1 {
                let next = arch.advance(merged, 1);
                let prev = arch.advance(merged, arch.len() - 1);
                if next != merged {
                    prop_assert_ne!(arch.tile(next).unwrap().tower_owner(), Some(owner));
                }
                if prev != merged && prev != next {
                    prop_assert_ne!(arch.tile(prev).unwrap().tower_owner(), Some(owner));
                }
            }
        }
    }
}
