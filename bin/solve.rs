//! Reads 4x4 fifteen-puzzle boards from standard input, one per line, and prints an optimal move
//! sequence for each solvable one.
//!
//! Each line is parsed as 16 non-negative decimal integers in `[0,15]` separated by non-digit
//! delimiters; lines shorter than 37 characters are skipped (too short to encode 16 two-digit
//! numbers and their delimiters). Run with `RUST_LOG=info` to watch the bound-escalation loop.

use std::{
    io::{self, BufRead, Write as _},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use dim4::{
    board::{Board, NUM_TILES},
    search,
    solvability::is_solvable,
    statistics::SearchIterationStats,
    Heuristic,
};
use log::info;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the pattern database built by `build_pdb`.
    #[arg(short = 'H', long, default_value = "dim4_heuristics.bin")]
    heuristics: PathBuf,
}

/// Lines shorter than this cannot encode 16 decimal tiles with delimiters.
const MIN_LINE_LEN: usize = 37;

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let heuristic = match Heuristic::load(&cli.heuristics) {
        Ok(heuristic) => heuristic,
        Err(err) => {
            eprintln!("failed to load {}: {err}", cli.heuristics.display());
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        if line.len() < MIN_LINE_LEN {
            continue;
        }

        let Some(tiles) = parse_tiles(&line) else {
            eprintln!("could not parse board from line: {line}");
            continue;
        };

        let board = match Board::new(tiles) {
            Ok(board) => board,
            Err(err) => {
                eprintln!("invalid board: {err}");
                continue;
            }
        };

        if !is_solvable(&board) {
            eprintln!("unsolvable board: {line}");
            continue;
        }

        let log_progress = |stats: SearchIterationStats| {
            info!("bound {} exhausted", stats.bound);
        };

        match search::solve(board, &heuristic, Some(&log_progress)) {
            Ok(moves) => {
                let moves_str = moves
                    .iter()
                    .map(u8::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                if writeln!(out, "{} moves: {moves_str}", moves.len()).is_err() {
                    return ExitCode::FAILURE;
                }
            }
            Err(err) => eprintln!("failed to solve board: {err}"),
        }
    }

    ExitCode::SUCCESS
}

/// Parses 16 non-negative decimal integers separated by non-digit delimiters from `line`.
fn parse_tiles(line: &str) -> Option<[u8; NUM_TILES]> {
    let mut tiles = [0u8; NUM_TILES];
    let mut count = 0;

    for token in line.split(|c: char| !c.is_ascii_digit()) {
        if token.is_empty() {
            continue;
        }
        if count >= NUM_TILES {
            return None;
        }
        tiles[count] = token.parse().ok()?;
        count += 1;
    }

    (count == NUM_TILES).then_some(tiles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tiles_valid_line() {
        let line = "1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 0";
        let tiles = parse_tiles(line).unwrap();
        assert_eq!(tiles, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0]);
    }

    #[test]
    fn test_parse_tiles_rejects_wrong_count() {
        assert!(parse_tiles("1 2 3").is_none());
    }

    #[test]
    fn test_parse_tiles_ignores_non_digit_delimiters() {
        let line = "0,12,9,13,15,11,10,14,3,7,2,5,4,8,6,1";
        let tiles = parse_tiles(line).unwrap();
        assert_eq!(tiles[0], 0);
        assert_eq!(tiles[1], 12);
        assert_eq!(tiles[15], 1);
    }
}
