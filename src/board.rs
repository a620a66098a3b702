//! Defines the [`Board`] type: a fixed 4x4 sliding-tile board, its move table, and in-place
//! move/unmove.
//!
//! This is deliberately narrower than a general `SlidingPuzzle` abstraction (arbitrary `W×H`,
//! piece labels, scrambling, rendering): it exists only to carry what the PDB builder and IDA*
//! engine need for the fixed 4x4 case.

use crate::{
    direction::{Direction, ALL},
    error::Error,
};

/// Number of tiles on a 4x4 board, including the empty cell.
pub const NUM_TILES: usize = 16;

/// The side length of the board this crate solves.
pub const SIDE: usize = 4;

/// The tile value used to denote "don't care" in a reduced board built for PDB construction.
/// Distinct from the empty cell (0) and from every real tile (1..15).
pub(crate) const DONT_CARE: u8 = u8::MAX;

/// The move table: for each empty-cell index, the board index of the tile that would slide for
/// each of the four clockwise directions, or `None` if that direction has no legal move from that
/// empty-cell position.
///
/// A static constant, computed once at compile time from the board's fixed topology.
pub const MOVE_TABLE: [[Option<u8>; 4]; NUM_TILES] = make_move_table();

const fn make_move_table() -> [[Option<u8>; 4]; NUM_TILES] {
    let mut table = [[None; 4]; NUM_TILES];
    let mut empty = 0usize;
    while empty < NUM_TILES {
        // Up: the tile below the gap slides up.
        table[empty][Direction::Up as usize] = if empty < NUM_TILES - SIDE {
            Some((empty + SIDE) as u8)
        } else {
            None
        };
        // Left: the tile right of the gap slides left.
        table[empty][Direction::Left as usize] = if empty % SIDE != SIDE - 1 {
            Some((empty + 1) as u8)
        } else {
            None
        };
        // Down: the tile above the gap slides down.
        table[empty][Direction::Down as usize] = if empty >= SIDE {
            Some((empty - SIDE) as u8)
        } else {
            None
        };
        // Right: the tile left of the gap slides right.
        table[empty][Direction::Right as usize] = if empty % SIDE != 0 {
            Some((empty - 1) as u8)
        } else {
            None
        };
        empty += 1;
    }
    table
}

/// Applies a move directly to a raw tile array and empty-cell index, without going through
/// [`Board`]'s permutation validation.
///
/// The PDB builder works with "reduced boards" that repeat the [`DONT_CARE`] sentinel for every
/// tile outside the pattern under construction, which is not a valid permutation of `0..=15` and
/// so cannot be wrapped in a `Board`. Returns `Some((moved_tile, old_empty_index))` on success, the
/// pair [`undo_move_raw`] needs to reverse the move.
pub(crate) fn apply_move_raw(
    tiles: &mut [u8; NUM_TILES],
    empty_index: &mut u8,
    dir: Direction,
) -> Option<(u8, u8)> {
    let mv = MOVE_TABLE[*empty_index as usize][dir as usize]?;
    let old_empty = *empty_index;
    let tile = tiles[mv as usize];
    tiles[old_empty as usize] = tile;
    tiles[mv as usize] = 0;
    *empty_index = mv;
    Some((tile, old_empty))
}

/// Reverses a move applied by [`apply_move_raw`].
pub(crate) fn undo_move_raw(
    tiles: &mut [u8; NUM_TILES],
    empty_index: &mut u8,
    tile: u8,
    old_empty_index: u8,
) {
    let mv = *empty_index;
    tiles[mv as usize] = tile;
    tiles[old_empty_index as usize] = 0;
    *empty_index = old_empty_index;
}

/// A 4x4 sliding-tile board.
///
/// Tiles are indexed 0..15 left-to-right, top-to-bottom (`row = i/4, col = i%4`). Exactly one
/// entry equals 0 (the empty cell); the rest are a permutation of 1..15.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    tiles: [u8; NUM_TILES],
    empty_index: u8,
}

impl Board {
    /// The solved board: `1, 2, ..., 15, 0`.
    #[must_use]
    pub fn solved() -> Self {
        let mut tiles = [0; NUM_TILES];
        for (i, tile) in tiles.iter_mut().enumerate().take(NUM_TILES - 1) {
            *tile = (i + 1) as u8;
        }
        Self {
            tiles,
            empty_index: (NUM_TILES - 1) as u8,
        }
    }

    /// Constructs a board from a flat tile list, validating that it is a permutation of
    /// `0..=15`.
    pub fn new(tiles: [u8; NUM_TILES]) -> Result<Self, Error> {
        let mut seen = [false; NUM_TILES];
        for &tile in &tiles {
            let tile = tile as usize;
            if tile >= NUM_TILES {
                return Err(Error::InvalidInput(format!(
                    "tile {tile} is out of range 0..=15"
                )));
            }
            if seen[tile] {
                return Err(Error::InvalidInput(format!("tile {tile} appears twice")));
            }
            seen[tile] = true;
        }

        let empty_index = tiles
            .iter()
            .position(|&t| t == 0)
            .expect("permutation of 0..=15 contains exactly one 0") as u8;

        Ok(Self { tiles, empty_index })
    }

    /// The tiles, in board order.
    #[must_use]
    pub fn tiles(&self) -> &[u8; NUM_TILES] {
        &self.tiles
    }

    /// The board index of the empty cell.
    #[must_use]
    pub fn empty_index(&self) -> u8 {
        self.empty_index
    }

    /// Whether every tile is in its solved position.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.tiles == Board::solved().tiles
    }

    /// The board index where `tile` currently sits, found by linear scan.
    ///
    /// `tile` must appear in this board (true for every real tile 1..15 and for 0, but not
    /// necessarily for [`DONT_CARE`] on a reduced board).
    #[must_use]
    pub fn position_of(&self, tile: u8) -> usize {
        self.tiles
            .iter()
            .position(|&t| t == tile)
            .expect("tile must be present on the board")
    }

    /// Attempts to slide a tile into the gap from `dir`. On success, mutates the board in place
    /// and returns `Some((moved_tile, old_empty_index))`; the pair is exactly what
    /// [`Board::undo_move`] needs to reverse the move. Returns `None` if `dir` has no legal move
    /// from the current empty-cell position.
    pub fn apply_move(&mut self, dir: Direction) -> Option<(u8, u8)> {
        let mv = MOVE_TABLE[self.empty_index as usize][dir as usize]?;
        let old_empty = self.empty_index;
        let tile = self.tiles[mv as usize];
        self.tiles[old_empty as usize] = tile;
        self.tiles[mv as usize] = 0;
        self.empty_index = mv;
        Some((tile, old_empty))
    }

    /// Reverses a move previously applied by [`Board::apply_move`], given the tile that moved and
    /// the empty-cell index from before the move.
    pub fn undo_move(&mut self, tile: u8, old_empty_index: u8) {
        let mv = self.empty_index;
        self.tiles[mv as usize] = tile;
        self.tiles[old_empty_index as usize] = 0;
        self.empty_index = old_empty_index;
    }
}
