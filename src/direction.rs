//! Defines the [`Direction`] type used by the move table, the PDB builder, and the IDA* engine.

use std::fmt::{Display, Write as _};

#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// The four directions a tile can slide into the empty cell, in the fixed clockwise order used
/// throughout this crate for move-table construction, breadth-first search neighbor enumeration,
/// and depth-first search child ordering.
///
/// Each variant names the direction the *tile* moves, not the gap: `Up` means "the tile below the
/// gap slides up into it".
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// The tile below the gap slides up.
    Up,
    /// The tile right of the gap slides left.
    Left,
    /// The tile above the gap slides down.
    Down,
    /// The tile left of the gap slides right.
    Right,
}

/// The four directions, in the fixed clockwise order in which children are expanded everywhere in
/// this crate (move-table construction, BFS neighbor enumeration, DFS child ordering).
pub const ALL: [Direction; 4] = [
    Direction::Up,
    Direction::Left,
    Direction::Down,
    Direction::Right,
];

impl Direction {
    /// The opposite direction. Swaps `Up` with `Down` and `Left` with `Right`.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Left => Self::Right,
            Self::Down => Self::Up,
            Self::Right => Self::Left,
        }
    }

    /// Reflection in the main diagonal. Swaps `Up` with `Left` and `Down` with `Right`.
    ///
    /// This is the direction-space counterpart of [`crate::index::transpose_position`]; it is not
    /// used by the search itself (the reflected heuristic only reflects *positions*, never move
    /// directions) but is kept for the move-table symmetry test in [`crate::board`].
    #[must_use]
    pub fn transpose(self) -> Self {
        match self {
            Self::Up => Self::Left,
            Self::Left => Self::Up,
            Self::Down => Self::Right,
            Self::Right => Self::Down,
        }
    }
}

impl Display for Direction {
    /// Formats the direction as an upper case character: U, L, D, R.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char(match self {
            Self::Up => 'U',
            Self::Left => 'L',
            Self::Down => 'D',
            Self::Right => 'R',
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_involution() {
        for d in ALL {
            assert_eq!(d.inverse().inverse(), d);
        }
    }

    #[test]
    fn test_transpose_involution() {
        for d in ALL {
            assert_eq!(d.transpose().transpose(), d);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Direction::Up.to_string(), "U");
        assert_eq!(Direction::Left.to_string(), "L");
        assert_eq!(Direction::Down.to_string(), "D");
        assert_eq!(Direction::Right.to_string(), "R");
    }
}
