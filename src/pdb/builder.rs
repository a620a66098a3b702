//! Offline breadth-first construction of the combined pattern database.

use std::collections::VecDeque;

use crate::{
    board::{apply_move_raw, undo_move_raw, DONT_CARE, NUM_TILES},
    direction::ALL,
    error::Error,
    index::sparse_index,
    pattern::{Pattern, PATTERNS, TOTAL_STATES},
    statistics::PdbIterationStats,
};

/// Sentinel byte meaning "unreached" in both the visited table and the output heuristic table.
const UNSET: u8 = u8::MAX;

/// Builds the combined pattern database and returns it as a flat table of [`TOTAL_STATES`] bytes.
///
/// Runs one independent breadth-first search per entry of [`PATTERNS`], each starting from the
/// solved configuration with every tile outside that pattern replaced by the "don't care"
/// sentinel. `on_iteration`, if given, is called once per BFS depth transition within each
/// pattern's search so a caller can log progress during the multi-minute build.
///
/// # Errors
///
/// Returns [`Error::ResourceExhaustion`] if allocating the output table or a pattern's visited
/// table fails.
pub fn build(on_iteration: Option<&dyn Fn(PdbIterationStats)>) -> Result<Vec<u8>, Error> {
    let mut table = Vec::new();
    table
        .try_reserve_exact(TOTAL_STATES)
        .map_err(|_| Error::ResourceExhaustion)?;
    table.resize(TOTAL_STATES, UNSET);

    for pattern in &PATTERNS {
        build_pattern(pattern, &mut table, on_iteration)?;
    }

    Ok(table)
}

/// The expanded-state index: the reduced (pattern-only) index with the empty cell's board index
/// packed into the lowest base-16 digit, giving a bijection into `[0, 16^(n+1))`.
fn expanded_index(tiles: &[u8; NUM_TILES], empty_index: u8, pattern: &Pattern) -> usize {
    empty_index as usize + 16 * sparse_index(tiles, pattern)
}

fn solved_reduced_board(pattern: &Pattern) -> ([u8; NUM_TILES], u8) {
    let mut tiles = [DONT_CARE; NUM_TILES];
    for &tile in pattern.tiles {
        tiles[tile as usize - 1] = tile;
    }
    let empty_index = (NUM_TILES - 1) as u8;
    tiles[empty_index as usize] = 0;
    (tiles, empty_index)
}

fn build_pattern(
    pattern: &Pattern,
    table: &mut [u8],
    on_iteration: Option<&dyn Fn(PdbIterationStats)>,
) -> Result<(), Error> {
    let reduced_states = 16usize.pow(pattern.tiles.len() as u32);
    let expanded_states = reduced_states * NUM_TILES;

    let mut visited = Vec::new();
    visited
        .try_reserve_exact(expanded_states)
        .map_err(|_| Error::ResourceExhaustion)?;
    visited.resize(expanded_states, UNSET);

    let (root_tiles, root_empty) = solved_reduced_board(pattern);
    table[sparse_index(&root_tiles, pattern) + pattern.offset] = 0;
    visited[expanded_index(&root_tiles, root_empty, pattern)] = 0;

    let mut queue: VecDeque<([u8; NUM_TILES], u8, u8)> = VecDeque::new();
    queue.push_back((root_tiles, root_empty, 0));

    let mut depth = 0u8;
    let mut new_at_depth = 0u64;
    let mut total = 0u64;

    while let Some((mut tiles, mut empty_index, cost)) = queue.pop_front() {
        for dir in ALL {
            let Some((tile, old_empty)) = apply_move_raw(&mut tiles, &mut empty_index, dir) else {
                continue;
            };

            let mut heuristic = cost;
            if tile != DONT_CARE {
                heuristic += 1;
            }

            let expanded = expanded_index(&tiles, empty_index, pattern);
            if visited[expanded] <= heuristic {
                // A path with cost at most this one was already recorded for this expanded
                // state; use its cost instead of the (possibly larger) one just computed.
                heuristic = visited[expanded];
            } else {
                visited[expanded] = heuristic;
                queue.push_back((tiles, empty_index, heuristic));
            }

            let slot = sparse_index(&tiles, pattern) + pattern.offset;
            if table[slot] > heuristic {
                if heuristic != depth {
                    if let Some(callback) = on_iteration {
                        callback(PdbIterationStats {
                            depth,
                            new: new_at_depth,
                            total,
                        });
                    }
                    depth = heuristic;
                    new_at_depth = 0;
                }
                table[slot] = heuristic;
                new_at_depth += 1;
                total += 1;
            }

            undo_move_raw(&mut tiles, &mut empty_index, tile, old_empty);
        }
    }

    if let Some(callback) = on_iteration {
        callback(PdbIterationStats {
            depth,
            new: new_at_depth,
            total,
        });
    }

    Ok(())
}
