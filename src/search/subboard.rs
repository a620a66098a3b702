//! Sub-board embedding: relabels the lower-right 4x4 corner of a larger N×N board into this
//! crate's native 4x4 alphabet, and maps the resulting move sequence back.
//!
//! This exists so an (out-of-scope) row-by-row solver for N>4 boards can call into this crate's
//! IDA\* engine once only the final 4x4 corner remains unsolved, using it as an optimal macro-move
//! building block rather than reimplementing pattern-database search for every board size.
//!
//! Precondition: every tile occupying a cell in the requested corner must have its own solved
//! destination inside that same corner (true once a row-by-row solver has finished every row and
//! column outside the corner). This module does not itself verify that precondition; a violation
//! produces a relabeled tile number outside `1..=15` and [`embed`] returns
//! [`Error::IncompatiblePuzzleSize`].

use crate::{board::Board, error::Error};

/// Relabels the lower-right 4x4 corner (rows and columns `board_offset..board_offset+4`) of a
/// flat, row-major N×N board into this crate's native 4x4 alphabet.
///
/// `board` is a flat row-major array of length `dim*dim`; `0` denotes the empty cell, and every
/// other cell holds a tile number `1..=dim*dim-1` equal to one more than that tile's own row-major
/// solved destination index in the full N×N board. A tile's relabeled id is the position (within
/// the corner) of that same solved destination.
///
/// # Errors
///
/// Returns [`Error::IncompatiblePuzzleSize`] if `dim < board_offset + 4`, or if any tile's solved
/// destination does not lie within the requested corner (see module precondition).
pub fn embed(board: &[usize], dim: usize, board_offset: usize) -> Result<Board, Error> {
    if dim < board_offset + 4 {
        return Err(Error::IncompatiblePuzzleSize(format!(
            "board of size {dim} is too small to contain a 4x4 corner at offset {board_offset}"
        )));
    }

    let mut tiles = [0u8; crate::board::NUM_TILES];
    let mut i = 0;
    for row in board_offset..board_offset + 4 {
        for col in board_offset..board_offset + 4 {
            let value = board[row * dim + col];
            tiles[i] = if value == 0 {
                0
            } else {
                relabel(value, dim, board_offset)?
            };
            i += 1;
        }
    }

    Board::new(tiles)
}

fn relabel(value: usize, dim: usize, board_offset: usize) -> Result<u8, Error> {
    let destination = value - 1;
    let destination_row = destination / dim;
    let destination_col = destination % dim;

    if destination_row < board_offset
        || destination_col < board_offset
        || destination_row >= board_offset + 4
        || destination_col >= board_offset + 4
    {
        return Err(Error::IncompatiblePuzzleSize(format!(
            "tile {value}'s solved destination does not lie within the corner at offset {board_offset}"
        )));
    }

    let adjusted_row = destination_row - board_offset;
    let adjusted_col = destination_col - board_offset;
    Ok((adjusted_row * 4 + adjusted_col + 1) as u8)
}

/// Maps a solution's relabeled tile numbers (as produced by the search engine against an
/// [`embed`]-ed board) back to the original N×N board's tile numbers.
#[must_use]
pub fn remap_moves(moves: &[u8], dim: usize, board_offset: usize) -> Vec<usize> {
    moves
        .iter()
        .map(|&relabeled| {
            let adjusted_row = (relabeled - 1) as usize / 4;
            let adjusted_col = (relabeled - 1) as usize % 4;
            (adjusted_row + board_offset) * dim + (adjusted_col + board_offset) + 1
        })
        .collect()
}
