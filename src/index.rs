//! The sparse index function: maps a pattern's tile positions on a board to a slot in its PDB
//! table, and the diagonal-reflection symmetry used to derive a second admissible heuristic from
//! the same table.

use crate::{board::NUM_TILES, pattern::Pattern};

/// Reflects a board index through the main diagonal: `row, col -> col, row`.
///
/// `transpose_position(i) = 4*(i % 4) + i / 4`. An involution: applying it twice returns the
/// original index.
#[must_use]
pub fn transpose_position(i: usize) -> usize {
    4 * (i % 4) + i / 4
}

/// The board index holding `tile`, found by linear scan.
///
/// Takes a raw tile array rather than a [`crate::board::Board`] so the PDB builder can call this
/// against reduced boards carrying the "don't care" sentinel, which are not valid `Board`s.
#[must_use]
pub fn position_of(tiles: &[u8; NUM_TILES], tile: u8) -> usize {
    tiles
        .iter()
        .position(|&t| t == tile)
        .expect("tile must be present on the board")
}

/// Computes the sparse index of `tiles` with respect to `pattern`: the tile positions of
/// `pattern.tiles`, each expressed base-16, packed into one integer.
///
/// `idx(B, P) = sum_i pos(tile_i, B) * 16^i`, for `tile_i` the i-th tile in `pattern.tiles`. This
/// is a bijection from the set of achievable position-tuples to a dense sub-range of
/// `[0, 16^len)`; unreachable combinations of positions (e.g. two pattern tiles sharing a cell)
/// never arise for a valid board, so no additional packing is needed.
#[must_use]
pub fn sparse_index(tiles: &[u8; NUM_TILES], pattern: &Pattern) -> usize {
    let mut index = 0usize;
    let mut place = 1usize;
    for &tile in pattern.tiles {
        index += position_of(tiles, tile) * place;
        place *= 16;
    }
    index
}

/// Computes the sparse index `tiles` would have if reflected through the main diagonal, without
/// materializing the reflected board.
///
/// Reflecting the board swaps the row and column of every tile (via [`transpose_position`]) and
/// relabels each tile to its diagonal mirror. Rather than applying both transformations to every
/// cell, this looks up `pattern.reflected_tiles` (already the mirror-labeled tile list) at their
/// *unreflected* board positions, then reflects just those positions. The two approaches agree
/// because reflection is an involution on both the tile labeling and the board geometry.
#[must_use]
pub fn sparse_index_reflected(tiles: &[u8; NUM_TILES], pattern: &Pattern) -> usize {
    let mut index = 0usize;
    let mut place = 1usize;
    for &tile in pattern.reflected_tiles {
        index += transpose_position(position_of(tiles, tile)) * place;
        place *= 16;
    }
    index
}
