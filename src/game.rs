//! Game orchestration.
//!
//! `Game` is the single mutation entry point of the engine. External
//! callers (a turn controller, a network layer) drive it through its
//! public operations in sequence:
//!
//! 1. `add_player` until the configured roster is full
//! 2. `start_game`
//! 3. per round: `bag_to_clouds`, then per turn the student moves,
//!    `move_mother_nature`, and finally `cloud_to_board`
//!
//! Every operation validates before it mutates: on error the game is
//! untouched. One `Game` per session; concurrent access must be
//! serialized by the caller.

use crate::bag::{Bag, SEEDING_PER_COLOR, SUPPLY_PER_COLOR};
use crate::board::Board;
use crate::clouds::CloudTile;
use crate::core::{Color, GameConstants, GameError, GameRng};
use crate::islands::{Archipelago, INITIAL_ISLANDS};
use crate::player::{Player, PlayerId};

/// Authoritative state machine for one game session.
#[derive(Clone, Debug)]
pub struct Game {
    constants: GameConstants,
    expected_players: usize,
    players: Vec<Player>,
    started: bool,
    bag: Bag,
    archipelago: Archipelago,
    clouds: Vec<CloudTile>,
    mother_nature: usize,
    current_player: PlayerId,
    rng: GameRng,
}

impl Game {
    /// Create a game lobby with the first player already joined.
    ///
    /// `expected_players` must be 2 or 3 and fixes the variant constants
    /// for the whole session. Seeds the RNG from entropy; use
    /// [`Game::with_seed`] for reproducible games.
    pub fn new(first_nickname: &str, expected_players: usize) -> Result<Self, GameError> {
        Self::with_seed(first_nickname, expected_players, rand::random())
    }

    /// Create a game lobby with an explicit RNG seed.
    ///
    /// Two games built with the same seed and driven through the same
    /// operations are bit-identical.
    pub fn with_seed(
        first_nickname: &str,
        expected_players: usize,
        seed: u64,
    ) -> Result<Self, GameError> {
        let constants = GameConstants::for_player_count(expected_players)?;
        if first_nickname.is_empty() {
            return Err(GameError::EmptyNickname);
        }
        Ok(Self {
            constants,
            expected_players,
            players: vec![Player::new(first_nickname, &constants)],
            started: false,
            bag: Bag::empty(),
            archipelago: Archipelago::new(INITIAL_ISLANDS),
            clouds: Vec::new(),
            mother_nature: 0,
            current_player: PlayerId::new(0),
            rng: GameRng::new(seed),
        })
    }

    // === Registration ===

    /// Register a player.
    ///
    /// Rejects empty and duplicate nicknames. Attempts beyond the
    /// configured player count are silently ignored: the roster stays
    /// capped and no error is raised.
    pub fn add_player(&mut self, nickname: &str) -> Result<(), GameError> {
        if nickname.is_empty() {
            return Err(GameError::EmptyNickname);
        }
        if self.players.len() == self.expected_players {
            return Ok(());
        }
        if self.players.iter().any(|p| p.nickname() == nickname) {
            return Err(GameError::DuplicateNickname(nickname.to_string()));
        }
        self.players.push(Player::new(nickname, &self.constants));
        Ok(())
    }

    // === Setup ===

    /// Start the game.
    ///
    /// Requires a full roster; rejects a second start. Seeds the
    /// archipelago, constructs the cloud tiles, and fills every entrance:
    ///
    /// - mother nature lands on a uniformly random tile;
    /// - that tile and its diametrically opposite one start with 0
    ///   students, every other tile with exactly 1 drawn from a seeding
    ///   bag of 2 students per color;
    /// - the main supply (24 per color) then refills the bag;
    /// - every player's entrance is filled to capacity.
    ///
    /// The first player in the roster becomes the current player.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }
        if self.players.len() != self.expected_players {
            return Err(GameError::RosterIncomplete {
                joined: self.players.len(),
                expected: self.expected_players,
            });
        }

        self.bag = Bag::with_per_color(SEEDING_PER_COLOR);
        self.mother_nature = self.rng.gen_range_usize(0..self.archipelago.len());
        let opposite = self.archipelago.opposite(self.mother_nature);

        for index in 0..self.archipelago.len() {
            if index == self.mother_nature || index == opposite {
                continue;
            }
            let color = self.draw_from_bag()?;
            if let Some(tile) = self.archipelago.tile_mut(index) {
                tile.add_student(color);
            }
        }

        for color in Color::ALL {
            self.bag.add(color, SUPPLY_PER_COLOR);
        }

        self.clouds = (0..self.expected_players)
            .map(|_| CloudTile::new(self.constants.cloud_size))
            .collect();

        for index in 0..self.players.len() {
            for _ in 0..self.constants.entrance_size {
                let color = self.draw_from_bag()?;
                self.players[index].board_mut().add_to_entrance(color)?;
            }
        }

        self.started = true;
        self.current_player = PlayerId::new(0);
        Ok(())
    }

    // === Round flow ===

    /// Refill every cloud tile from the bag.
    ///
    /// All clouds must be empty: a cloud holding any students (partial or
    /// full) fails the whole refill with [`GameError::CloudsNotEmpty`].
    /// Afterwards every cloud is full.
    pub fn bag_to_clouds(&mut self) -> Result<(), GameError> {
        self.ensure_started()?;
        if self.clouds.iter().any(|c| !c.is_empty()) {
            return Err(GameError::CloudsNotEmpty);
        }
        let needed = self.clouds.len() * self.constants.cloud_size;
        if self.bag.num_students() < needed {
            return Err(GameError::EmptyBag);
        }
        for index in 0..self.clouds.len() {
            while self.clouds[index].is_fillable() {
                let color = self.draw_from_bag()?;
                self.clouds[index].fill(color)?;
            }
        }
        Ok(())
    }

    /// Move every student from the addressed cloud to the current
    /// player's entrance.
    ///
    /// The entrance must be exactly at the fillable threshold
    /// (occupancy == entrance capacity - cloud capacity) and the cloud
    /// must be full: entrances are topped up in whole-cloud increments,
    /// never partially, so an empty or half-filled cloud cannot deliver
    /// the top-up. Afterwards the cloud is empty and the entrance full.
    pub fn cloud_to_board(&mut self, cloud_index: usize) -> Result<(), GameError> {
        self.ensure_started()?;
        if cloud_index >= self.clouds.len() {
            return Err(GameError::CloudIndexOutOfRange {
                index: cloud_index,
                count: self.clouds.len(),
            });
        }
        let board = self.players[self.current_player.index()].board();
        if !board.entrance_is_fillable() {
            return Err(GameError::EntranceNotFillable {
                occupancy: board.num_in_entrance(),
                required: self.constants.fillable_threshold(),
            });
        }
        if self.clouds[cloud_index].is_fillable() {
            return Err(GameError::CloudNotRefilled(cloud_index));
        }
        let students = self.clouds[cloud_index].drain();
        self.players[self.current_player.index()]
            .board_mut()
            .receive_students(students)
    }

    // === Turn actions ===

    /// Move one student from the current player's entrance to their
    /// dining hall, then reassign the professor of that color.
    ///
    /// The professor goes to the player with strictly the most seated
    /// students of the color; ties leave the assignment unchanged.
    pub fn move_student_to_hall(&mut self, color: Color) -> Result<(), GameError> {
        self.ensure_started()?;
        let board = self.players[self.current_player.index()].board();
        if !board.student_in_entrance(color) {
            return Err(GameError::NoStudentInEntrance(color));
        }
        if usize::from(board.students_in_hall(color)) >= self.constants.hall_row_size {
            return Err(GameError::HallRowFull(color));
        }
        let board = self.players[self.current_player.index()].board_mut();
        board.remove_student_from_entrance(color);
        board.seat_student(color)?;
        self.reassign_professor(color);
        Ok(())
    }

    /// Move one student from the current player's entrance onto an
    /// island tile.
    pub fn move_student_to_island(
        &mut self,
        color: Color,
        island_index: usize,
    ) -> Result<(), GameError> {
        self.ensure_started()?;
        if island_index >= self.archipelago.len() {
            return Err(GameError::IslandIndexOutOfRange {
                index: island_index,
                count: self.archipelago.len(),
            });
        }
        let board = self.players[self.current_player.index()].board_mut();
        if !board.remove_student_from_entrance(color) {
            return Err(GameError::NoStudentInEntrance(color));
        }
        if let Some(tile) = self.archipelago.tile_mut(island_index) {
            tile.add_student(color);
        }
        Ok(())
    }

    /// Advance mother nature clockwise and resolve the landing island:
    /// influence is computed, a strict winner conquers, and same-owner
    /// neighbors merge.
    ///
    /// `steps` must be at least 1 and less than the current ring length
    /// (the per-turn maximum from the played card is enforced by the
    /// caller).
    pub fn move_mother_nature(&mut self, steps: usize) -> Result<(), GameError> {
        self.ensure_started()?;
        if steps == 0 || steps >= self.archipelago.len() {
            return Err(GameError::InvalidMotherNatureMove {
                steps,
                max: self.archipelago.len() - 1,
            });
        }
        self.mother_nature = self.archipelago.advance(self.mother_nature, steps);
        self.resolve_island(self.mother_nature);
        Ok(())
    }

    /// Rotate the current player round-robin.
    pub fn advance_turn(&mut self) -> Result<(), GameError> {
        self.ensure_started()?;
        let next = (self.current_player.index() + 1) % self.players.len();
        self.current_player = PlayerId::new(next as u8);
        Ok(())
    }

    // === Queries ===

    /// Number of registered players.
    #[must_use]
    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    /// The registered players, in join order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The player with the given ID, if registered.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// The cloud tiles. Empty before the game starts.
    #[must_use]
    pub fn cloud_tiles(&self) -> &[CloudTile] {
        &self.clouds
    }

    /// The cloud tile at `index`, if it exists.
    #[must_use]
    pub fn cloud_tile(&self, index: usize) -> Option<&CloudTile> {
        self.clouds.get(index)
    }

    /// Mutable access to a cloud tile.
    pub fn cloud_tile_mut(&mut self, index: usize) -> Option<&mut CloudTile> {
        self.clouds.get_mut(index)
    }

    /// The archipelago ring.
    #[must_use]
    pub fn archipelago(&self) -> &Archipelago {
        &self.archipelago
    }

    /// Index of the tile mother nature occupies.
    #[must_use]
    pub fn mother_nature(&self) -> usize {
        self.mother_nature
    }

    /// The acting player.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// The acting player's board.
    #[must_use]
    pub fn current_board(&self) -> &Board {
        self.players[self.current_player.index()].board()
    }

    /// Mutable access to the acting player's board.
    pub fn current_board_mut(&mut self) -> &mut Board {
        self.players[self.current_player.index()].board_mut()
    }

    /// Mutable access to a player's board.
    pub fn board_mut(&mut self, id: PlayerId) -> Option<&mut Board> {
        self.players.get_mut(id.index()).map(Player::board_mut)
    }

    /// True once `start_game` has succeeded.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// The variant constants resolved at construction.
    #[must_use]
    pub fn constants(&self) -> &GameConstants {
        &self.constants
    }

    /// Students remaining in the bag.
    #[must_use]
    pub fn students_in_bag(&self) -> usize {
        self.bag.num_students()
    }

    // === Internals ===

    fn ensure_started(&self) -> Result<(), GameError> {
        if self.started {
            Ok(())
        } else {
            Err(GameError::NotStarted)
        }
    }

    fn draw_from_bag(&mut self) -> Result<Color, GameError> {
        self.bag.draw(&mut self.rng).ok_or(GameError::EmptyBag)
    }

    /// Hand the professor of `color` to the strict hall-count leader.
    fn reassign_professor(&mut self, color: Color) {
        let counts: Vec<u8> = self
            .players
            .iter()
            .map(|p| p.board().students_in_hall(color))
            .collect();
        let best = counts.iter().copied().max().unwrap_or(0);
        if best == 0 || counts.iter().filter(|&&c| c == best).count() != 1 {
            return;
        }
        for (index, player) in self.players.iter_mut().enumerate() {
            if counts[index] == best {
                player.board_mut().grant_professor(color);
            } else {
                player.board_mut().revoke_professor(color);
            }
        }
    }

    /// Influence of each player over the tile at `index`: students of
    /// every color whose professor the player holds, plus the tile size
    /// for the tower owner.
    fn influences(&self, index: usize) -> Vec<usize> {
        let tile = &self.archipelago.tiles()[index];
        PlayerId::all(self.players.len())
            .map(|id| {
                let board = self.players[id.index()].board();
                let mut influence: usize = Color::ALL
                    .iter()
                    .filter(|&&c| board.has_professor(c))
                    .map(|&c| tile.island_students().count(c) as usize)
                    .sum();
                if tile.tower_owner() == Some(id) {
                    influence += tile.size();
                }
                influence
            })
            .collect()
    }

    /// Conquest and merge resolution for the tile mother nature landed on.
    fn resolve_island(&mut self, index: usize) {
        let influences = self.influences(index);
        let best = match influences.iter().copied().max() {
            Some(b) if b > 0 => b,
            _ => return,
        };
        if influences.iter().filter(|&&i| i == best).count() != 1 {
            return;
        }
        let winner_index = influences
            .iter()
            .position(|&i| i == best)
            .unwrap_or_default();
        let winner = PlayerId::new(winner_index as u8);

        let tile_size = self.archipelago.tiles()[index].size();
        if self.archipelago.tiles()[index].tower_owner() == Some(winner) {
            return;
        }

        // Winner places one tower per merged tile; a reserve that cannot
        // cover the whole tile refuses the conquest. Previous owner takes
        // theirs back.
        {
            let board = self.players[winner_index].board_mut();
            if board.towers() < tile_size {
                return;
            }
            for _ in 0..tile_size {
                board.take_tower();
            }
        }
        let previous = self.archipelago.set_tower_owner(index, winner);
        if let Some(previous) = previous {
            self.players[previous.index()]
                .board_mut()
                .return_towers(tile_size);
        }
        self.mother_nature = self.archipelago.merge_adjacent(index);
    }
}
