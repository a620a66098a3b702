//! The solvability predicate: decides whether a board is reachable from the solved state by a
//! sequence of legal moves, without running a search.
//!
//! Every single slide is a transposition of the 16 cells (swapping the empty cell with its
//! neighbor), so the parity of the full 16-cell permutation flips on every move, and so does the
//! parity of the taxicab distance the empty cell has left to travel to its solved corner (any
//! slide moves the empty cell to an adjacent cell, changing that distance by exactly one). Their
//! XOR is therefore invariant across all reachable boards, and is zero at the solved board; a
//! board is solvable iff the two parities agree.

use crate::board::Board;

/// Returns `true` if `board` is reachable from [`Board::solved`] by a sequence of legal moves.
///
/// Computed from two parities, both derived directly from the board, with no search involved:
/// - the parity of the permutation of all 16 cells, treating the empty cell as the largest value
///   (by cycle decomposition: a permutation's sign is even iff `n - cycle_count` is even), and
/// - the parity of the taxicab distance between the board's empty-cell index and the solved
///   empty-cell index (15).
///
/// The board is solvable exactly when these two parities agree.
#[must_use]
pub fn is_solvable(board: &Board) -> bool {
    permutation_parity(board) == taxicab_distance_to_solved(board) % 2
}

/// The parity of the permutation of all 16 cells read off `board` in row-major order, with the
/// empty cell treated as the value 16 (the largest), as `0` (even) or `1` (odd).
///
/// Omitting the empty cell from this computation (treating it as though it weren't part of the
/// permutation at all) is a distinct, *not* equivalent quantity: every slide is a transposition of
/// all 16 cells including the empty one, so its contribution to the permutation's parity cannot be
/// dropped without breaking the invariant this predicate relies on.
fn permutation_parity(board: &Board) -> usize {
    let tiles = board.tiles();

    // `sequence[slot - 1]` is the value occupying `slot`, for `slot` in 1..=16, with the empty
    // cell's value (0) mapped to 16. Decomposing this permutation into cycles and counting them
    // gives the sign via `(16 - cycle_count) % 2`.
    let mut visited = [false; 17];
    let mut cycle_count = 0usize;
    for start in 1..=16usize {
        if visited[start] {
            continue;
        }
        cycle_count += 1;
        let mut current = start;
        while !visited[current] {
            visited[current] = true;
            let value = tiles[current - 1];
            current = if value == 0 { 16 } else { value as usize };
        }
    }

    (16 - cycle_count) % 2
}

/// The taxicab (Manhattan) distance between `board`'s empty-cell index and the solved empty-cell
/// index (15, the bottom-right corner).
fn taxicab_distance_to_solved(board: &Board) -> usize {
    const SOLVED_EMPTY: usize = 15;
    let current = board.empty_index() as usize;
    (current / 4).abs_diff(SOLVED_EMPTY / 4) + (current % 4).abs_diff(SOLVED_EMPTY % 4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;

    #[test]
    fn test_solved_board_is_solvable() {
        assert!(is_solvable(&Board::solved()));
    }

    #[test]
    fn test_single_move_preserves_solvability() {
        let mut board = Board::solved();
        board.apply_move(Direction::Down);
        assert!(is_solvable(&board));
    }

    #[test]
    fn test_many_moves_preserve_solvability() {
        let mut board = Board::solved();
        for dir in [
            Direction::Down,
            Direction::Right,
            Direction::Up,
            Direction::Left,
            Direction::Down,
            Direction::Down,
            Direction::Left,
        ] {
            board.apply_move(dir);
        }
        assert!(is_solvable(&board));
    }

    #[test]
    fn test_random_walks_preserve_solvability() {
        use rand::{Rng as _, SeedableRng as _};
        use rand_xoshiro::Xoroshiro128StarStar;

        const SEED: [u8; 16] = [
            160, 108, 126, 255, 147, 210, 122, 252, 71, 77, 144, 13, 167, 11, 225, 93,
        ];
        let mut rng = Xoroshiro128StarStar::from_seed(SEED);
        for _ in 0..50 {
            let mut board = Board::solved();
            for _ in 0..rng.random_range(0..200) {
                let dir = [
                    Direction::Up,
                    Direction::Left,
                    Direction::Down,
                    Direction::Right,
                ][rng.random_range(0..4)];
                board.apply_move(dir);
            }
            assert!(is_solvable(&board));
        }
    }

    #[test]
    fn test_one_move_from_solved_board_with_even_empty_index_is_solvable() {
        // Spec section 8 scenario 2: one slide away from solved, with the empty cell landing on
        // index 14 (even). Omitting the empty cell's own contribution to the permutation parity
        // misclassifies exactly this kind of board as unsolvable.
        let board = Board::new([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 0, 15]).unwrap();
        assert_eq!(board.empty_index() % 2, 0);
        assert!(is_solvable(&board));
    }

    #[test]
    fn test_swapping_two_tiles_makes_board_unsolvable() {
        // Swapping any two non-empty tiles flips the permutation parity without moving the empty
        // cell, producing a board no sequence of legal moves can reach.
        let mut tiles = *Board::solved().tiles();
        tiles.swap(0, 1);
        let board = Board::new(tiles).expect("still a permutation of 0..=15");
        assert!(!is_solvable(&board));
    }
}
