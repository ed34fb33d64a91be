//! Lobby and setup invariants: registration, start preconditions, and the
//! state of islands, clouds, and entrances right after a successful start.

use archipel::{Color, ErrorKind, Game, GameError, INITIAL_ISLANDS};

fn three_player_lobby() -> Game {
    Game::with_seed("alice", 3, 42).unwrap()
}

fn started_three_player() -> Game {
    let mut game = three_player_lobby();
    game.add_player("bob").unwrap();
    game.add_player("carol").unwrap();
    game.start_game().unwrap();
    game
}

/// Registrations beyond the configured count are silently dropped: the
/// roster stays capped and no error is raised.
#[test]
fn test_adding_more_players_than_expected() {
    let mut game = three_player_lobby();
    assert_eq!(game.num_players(), 1);

    game.add_player("bob").unwrap();
    game.add_player("carol").unwrap();
    assert_eq!(game.num_players(), 3);

    game.add_player("dave").unwrap();
    assert_eq!(game.num_players(), 3);
    assert!(game.players().iter().all(|p| p.nickname() != "dave"));
}

/// An empty nickname is rejected and leaves the roster unchanged.
#[test]
fn test_adding_player_with_empty_nickname() {
    let mut game = three_player_lobby();
    let err = game.add_player("").unwrap_err();
    assert_eq!(err, GameError::EmptyNickname);
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(game.num_players(), 1);
}

/// Starting before the roster is full fails with an illegal-state error.
#[test]
fn test_starting_without_full_roster() {
    let mut game = three_player_lobby();
    game.add_player("bob").unwrap();

    let err = game.start_game().unwrap_err();
    assert_eq!(
        err,
        GameError::RosterIncomplete {
            joined: 2,
            expected: 3
        }
    );
    assert_eq!(err.kind(), ErrorKind::IllegalState);
    assert!(!game.is_started());
}

/// Clouds exist after start, one per player, all empty.
#[test]
fn test_cloud_init() {
    let game = started_three_player();
    assert_eq!(game.cloud_tiles().len(), 3);
    for cloud in game.cloud_tiles() {
        assert_eq!(cloud.num_students(), 0);
        assert!(cloud.is_empty());
    }
}

/// Every player's entrance is filled to capacity at start, so no entrance
/// reports fillable.
#[test]
fn test_entrances_filled_at_start() {
    let game = started_three_player();
    for player in game.players() {
        assert_eq!(player.board().num_in_entrance(), 9);
        assert!(!player.board().entrance_is_fillable());
    }
}

/// Mother nature starts on a valid archipelago index.
#[test]
fn test_mother_nature_in_bounds() {
    let game = started_three_player();
    assert!(game.mother_nature() < INITIAL_ISLANDS);
}

/// Every island starts with exactly one student, except mother nature's
/// tile and the diametrically opposite one, which start with zero.
#[test]
fn test_island_seeding() {
    let game = started_three_player();
    let mother_nature = game.mother_nature();
    let opposite = (mother_nature + 6) % 12;

    for (index, tile) in game.archipelago().tiles().iter().enumerate() {
        let expected = usize::from(index != mother_nature && index != opposite);
        assert_eq!(
            tile.island_students().num_students(),
            expected,
            "island {index}"
        );
        assert_eq!(tile.size(), 1);
        assert!(tile.tower_owner().is_none());
    }
}

/// Across many seeds: exactly 2 empty islands and 10 with one student.
#[test]
fn test_island_seeding_counts_across_seeds() {
    for seed in 0..50 {
        let mut game = Game::with_seed("alice", 3, seed).unwrap();
        game.add_player("bob").unwrap();
        game.add_player("carol").unwrap();
        game.start_game().unwrap();

        let empty = game
            .archipelago()
            .tiles()
            .iter()
            .filter(|t| t.island_students().is_empty())
            .count();
        assert_eq!(empty, 2, "seed {seed}");
        assert!(game.mother_nature() < 12, "seed {seed}");
    }
}

/// The 2-player variant uses its own constant table end to end.
#[test]
fn test_two_player_variant_setup() {
    let mut game = Game::with_seed("alice", 2, 7).unwrap();
    game.add_player("bob").unwrap();
    game.start_game().unwrap();

    assert_eq!(game.cloud_tiles().len(), 2);
    for player in game.players() {
        assert_eq!(player.board().num_in_entrance(), 7);
        assert_eq!(player.board().towers(), 8);
    }
}

/// Student supply is conserved: islands, entrances, and the bag together
/// hold the full complement after start.
#[test]
fn test_student_conservation_after_start() {
    let game = started_three_player();

    let on_islands: usize = game
        .archipelago()
        .tiles()
        .iter()
        .map(|t| t.island_students().num_students())
        .sum();
    let in_entrances: usize = game
        .players()
        .iter()
        .map(|p| p.board().num_in_entrance())
        .sum();

    assert_eq!(on_islands, 10);
    assert_eq!(in_entrances, 27);
    assert_eq!(
        game.students_in_bag() + on_islands + in_entrances,
        26 * Color::COUNT
    );
}
