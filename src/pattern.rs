//! Defines the three disjoint tile patterns whose additive heuristic sum is admissible for the
//! 4x4 fifteen puzzle, and the layout of their combined pattern database table.

/// A disjoint tile pattern: a fixed set of tiles whose positions are tracked together in one
/// sub-database, and the offset at which that sub-database's entries live in the combined table.
#[derive(Clone, Copy, Debug)]
pub struct Pattern {
    /// The tiles belonging to this pattern, in the fixed order used to build its sparse index.
    /// `tiles.len()` is always 6 or 3 for the three patterns this crate uses.
    pub tiles: &'static [u8],

    /// The tiles of the *reflected* pattern, i.e. `tiles` reflected through the main diagonal.
    /// Used to compute the alternative (reflected) admissible heuristic without re-deriving the
    /// reflection at lookup time.
    pub reflected_tiles: &'static [u8],

    /// The offset, in table entries, at which this pattern's sub-database begins within the
    /// combined table built by [`crate::pdb::builder`].
    pub offset: usize,
}

/// Tiles `{1, 5, 6, 9, 10, 13}`: the left column plus part of the second column.
pub const P0: Pattern = Pattern {
    tiles: &[1, 5, 6, 9, 10, 13],
    reflected_tiles: &[1, 2, 6, 3, 7, 4],
    offset: 0,
};

/// Tiles `{7, 8, 11, 12, 14, 15}`: the bottom-right block.
pub const P1: Pattern = Pattern {
    tiles: &[7, 8, 11, 12, 14, 15],
    reflected_tiles: &[10, 14, 11, 15, 8, 12],
    offset: STATES_PER_6_TILE_PATTERN,
};

/// Tiles `{2, 3, 4}`: the remainder of the top row.
pub const P2: Pattern = Pattern {
    tiles: &[2, 3, 4],
    reflected_tiles: &[5, 9, 13],
    offset: 2 * STATES_PER_6_TILE_PATTERN,
};

/// The three disjoint patterns this crate's PDB is built from, covering tiles 1..15 exactly once
/// among them (tile 0, the empty cell, belongs to none).
pub const PATTERNS: [Pattern; 3] = [P0, P1, P2];

/// The number of sparse-index slots a 6-tile pattern's table occupies: `16^6`, one slot per
/// combination of 6 ordered tile positions among the 16 board cells.
pub const STATES_PER_6_TILE_PATTERN: usize = 16usize.pow(6);

/// The number of sparse-index slots a 3-tile pattern's table occupies: `16^3`.
pub const STATES_PER_3_TILE_PATTERN: usize = 16usize.pow(3);

/// The total number of entries in the combined pattern database table: two 6-tile pattern tables
/// plus one 3-tile pattern table.
pub const TOTAL_STATES: usize = 2 * STATES_PER_6_TILE_PATTERN + STATES_PER_3_TILE_PATTERN;
