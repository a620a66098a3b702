//! The IDA\* search engine: iterative deepening by admissible f-bound over an in-place,
//! single-node depth-first search.
//!
//! Matches the reference algorithm exactly: a recursive DFS cuts off branches whose `1 +
//! heuristic` exceeds the current bound, returning the least cut-off value as the next bound to
//! retry with. Because the heuristic is admissible, the first solution found at any bound is
//! optimal.
//!
//! The recursion distinguishes "this subtree reached the goal" from "this subtree exhausted,
//! here is its next bound" with a tagged [`DfsOutcome`] rather than a side-channel boolean flag
//! plus a bare integer — the node itself still carries the one piece of mutable state (applied
//! and undone in lockstep on every return path), but the *outcome* of a call is never ambiguous.

use crate::{
    board::{Board, MOVE_TABLE},
    direction::ALL,
    error::Error,
    pdb::Heuristic,
    search::node::{SearchNode, MAX_MOVES},
    statistics::SearchIterationStats,
};

/// Bound value meaning "the search space is exhausted": no bound this large will ever be tried.
const INFINITE_BOUND: u16 = u16::MAX;

/// The result of one DFS call: either the goal was reached (the solution lives in the caller's
/// node), or the subtree was exhausted and its next-bound candidate is reported.
pub enum DfsOutcome {
    /// The goal was reached somewhere in this subtree; the node holds the solution path.
    Found,

    /// No child of this subtree fit within the bound; retrying with this larger bound may
    /// succeed. `u16::MAX` encodes "no child existed at all" (an entirely pruned subtree).
    NextBound(u16),
}

/// Runs IDA\* from `root` against `oracle`, returning the optimal move sequence.
///
/// `on_iteration`, if given, is called once per completed bound-escalation iteration (i.e. once
/// per unsuccessful outer-loop pass), reporting the bound that iteration searched to.
///
/// # Errors
///
/// Propagates any [`Error`] the oracle returns (a data-integrity fault in the loaded PDB), and
/// returns [`Error::SearchExhausted`] if the bound escalates to "infinite" without finding a
/// solution (unreachable for a solvable root against a correctly built PDB).
pub fn solve(
    root: Board,
    oracle: &Heuristic,
    on_iteration: Option<&dyn Fn(SearchIterationStats)>,
) -> Result<Vec<u8>, Error> {
    let initial_heuristic = oracle.h(&root)?;
    let mut node = SearchNode::new(root, initial_heuristic);
    let mut bound = initial_heuristic;

    loop {
        match dfs(&mut node, bound, oracle)? {
            DfsOutcome::Found => return Ok(node.solution()),
            DfsOutcome::NextBound(next_bound) => {
                if let Some(callback) = on_iteration {
                    callback(SearchIterationStats { bound });
                }
                if next_bound == INFINITE_BOUND {
                    return Err(Error::SearchExhausted);
                }
                bound = next_bound;
            }
        }
    }
}

/// The recursive depth-first search at the core of one IDA\* iteration.
///
/// Contract: on every return path other than [`DfsOutcome::Found`], `node` is left exactly as it
/// was passed in (every applied move is undone, `heuristic` and `num_moves` restored). On
/// `Found`, `node` holds the solution path in `node.moves[..node.num_moves]`.
pub fn dfs(node: &mut SearchNode, bound: u16, oracle: &Heuristic) -> Result<DfsOutcome, Error> {
    if node.heuristic == 0 {
        return Ok(DfsOutcome::Found);
    }

    let mut new_bound = INFINITE_BOUND;

    for dir in ALL {
        let empty_index = node.board.empty_index();
        let Some(mv) = MOVE_TABLE[empty_index as usize][dir as usize] else {
            continue;
        };
        let tile = node.board.tiles()[mv as usize];

        // Parent-move pruning: skip the child that would undo the previous move. The root call
        // (num_moves == 0) always allows every direction, rather than relying on moves[-1]
        // happening to never equal a real tile value.
        if node.num_moves > 0 && tile == node.moves[node.num_moves as usize - 1] {
            continue;
        }

        assert!(
            (node.num_moves as usize) < MAX_MOVES,
            "search exceeded the proven {MAX_MOVES}-move worst case"
        );

        let (moved_tile, old_empty) = node
            .board
            .apply_move(dir)
            .expect("move_table entry for this direction exists, so the move is legal");
        let old_heuristic = node.heuristic;
        node.heuristic = oracle.h(&node.board)?;
        node.moves[node.num_moves as usize] = moved_tile;
        node.num_moves += 1;

        let f = 1 + node.heuristic;
        let b = if f <= bound {
            match dfs(node, bound - 1, oracle)? {
                DfsOutcome::Found => return Ok(DfsOutcome::Found),
                DfsOutcome::NextBound(sub_bound) => sub_bound.saturating_add(1),
            }
        } else {
            f
        };
        new_bound = new_bound.min(b);

        node.num_moves -= 1;
        node.board.undo_move(moved_tile, old_empty);
        node.heuristic = old_heuristic;
    }

    Ok(DfsOutcome::NextBound(new_bound))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{direction::Direction, pdb::oracle::Heuristic as OracleHeuristic, pattern::TOTAL_STATES};

    /// An all-zero table makes every board look already solved, which is enough to exercise the
    /// root `Found` special case without building a real PDB.
    fn zero_oracle() -> OracleHeuristic {
        OracleHeuristic::from_bytes(vec![0u8; TOTAL_STATES]).unwrap()
    }

    #[test]
    fn test_solve_root_already_solved() {
        let oracle = zero_oracle();
        let moves = solve(Board::solved(), &oracle, None).unwrap();
        assert!(moves.is_empty());
    }

    #[test]
    fn test_dfs_found_when_heuristic_zero() {
        let oracle = zero_oracle();
        let mut node = SearchNode::new(Board::solved(), 0);
        match dfs(&mut node, 0, &oracle).unwrap() {
            DfsOutcome::Found => {}
            DfsOutcome::NextBound(_) => panic!("expected Found"),
        }
    }

    #[test]
    fn test_dfs_leaves_node_unchanged_on_next_bound() {
        // With a zero oracle, heuristic 0 would report Found immediately; craft a node whose
        // heuristic is nonzero so the loop actually explores and backtracks children.
        let oracle = zero_oracle();
        let mut board = Board::solved();
        board.apply_move(Direction::Down);
        let mut node = SearchNode::new(board, 1);
        let before = node.clone();

        let outcome = dfs(&mut node, 0, &oracle).unwrap();
        match outcome {
            DfsOutcome::NextBound(_) => {}
            DfsOutcome::Found => panic!("bound 0 should not admit any child"),
        }
        assert_eq!(node.board, before.board);
        assert_eq!(node.heuristic, before.heuristic);
        assert_eq!(node.num_moves, before.num_moves);
    }

    /// Reflects `board` through the main diagonal: the tile occupying cell `i` moves to cell
    /// `transpose_position(i)`, relabeled to the value whose own solved position is the
    /// transpose of this tile's solved position. A solved board reflects to itself.
    fn reflect_board(board: &Board) -> Board {
        use crate::index::transpose_position;

        let mut tiles = [0u8; crate::board::NUM_TILES];
        for (i, &tile) in board.tiles().iter().enumerate() {
            let solved_position = if tile == 0 { 15 } else { (tile - 1) as usize };
            let reflected_value = if tile == 0 {
                0
            } else {
                (transpose_position(solved_position) + 1) as u8
            };
            tiles[transpose_position(i)] = reflected_value;
        }
        Board::new(tiles).expect("reflecting a valid permutation yields a valid permutation")
    }

    /// Builds the real, full-size pattern database and exercises the concrete scenarios of spec
    /// section 8 end to end. Gated behind `--ignored` since a full build takes real wall-clock
    /// time (two `16^7`-expanded-state breadth-first searches).
    #[test]
    #[ignore = "builds the full pattern database; takes real wall-clock time"]
    fn test_full_solve_scenarios() {
        let table = crate::pdb::builder::build(None).unwrap();
        let oracle = OracleHeuristic::from_bytes(table).unwrap();

        // Scenario 1: the solved board needs no moves.
        let solved = Board::solved();
        assert!(solve(solved, &oracle, None).unwrap().is_empty());

        // Scenario 2: one move away from solved.
        let one_move =
            Board::new([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 0, 15]).unwrap();
        let moves = solve(one_move, &oracle, None).unwrap();
        assert_eq!(moves, vec![15]);

        // Scenario 3: a small, few-moves-from-solved board; any optimal sequence that rolls the
        // board back to solved is acceptable, and this implementation's deterministic child order
        // always produces the same one for the same input.
        let three_moves_start =
            Board::new([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 0, 14, 15]).unwrap();
        let solution = solve(three_moves_start, &oracle, None).unwrap();
        assert!(!solution.is_empty());
        let mut replayed = three_moves_start;
        for &tile in &solution {
            let dir = ALL
                .into_iter()
                .find(|&d| {
                    MOVE_TABLE[replayed.empty_index() as usize][d as usize]
                        .is_some_and(|mv| replayed.tiles()[mv as usize] == tile)
                })
                .expect("recorded move must be legal from the current position");
            replayed.apply_move(dir);
        }
        assert!(replayed.is_solved());

        // Scenario 4: a known 52-move optimum.
        let hard = Board::new([
            0, 12, 9, 13, 15, 11, 10, 14, 3, 7, 2, 5, 4, 8, 6, 1,
        ])
        .unwrap();
        assert!(crate::solvability::is_solvable(&hard));
        let hard_solution = solve(hard, &oracle, None).unwrap();
        assert_eq!(hard_solution.len(), 52);

        // Scenario 5: a board and its diagonal reflection have solutions of equal length.
        let reflected = reflect_board(&hard);
        let reflected_solution = solve(reflected, &oracle, None).unwrap();
        assert_eq!(reflected_solution.len(), hard_solution.len());

        // Determinism: solving the same board twice gives the identical move sequence.
        let repeat_solution = solve(hard, &oracle, None).unwrap();
        assert_eq!(repeat_solution, hard_solution);
    }
}
