//! Builds the pattern database and writes it to disk.
//!
//! Takes real wall-clock time (multiple minutes): each of the two 6-tile patterns performs a
//! breadth-first search over `16^7` expanded states. Run with `RUST_LOG=info` to watch progress.

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use dim4::{pdb::builder, statistics::PdbIterationStats, Heuristic};
use log::info;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to write the built pattern database to.
    #[arg(short, long, default_value = "dim4_heuristics.bin")]
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let log_progress = |stats: PdbIterationStats| {
        info!(
            "depth {}: {} new, {} total",
            stats.depth, stats.new, stats.total
        );
    };

    let table = match builder::build(Some(&log_progress)) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("failed to build pattern database: {err}");
            return ExitCode::FAILURE;
        }
    };

    let heuristic = match Heuristic::from_bytes(table) {
        Ok(heuristic) => heuristic,
        Err(err) => {
            eprintln!("built table failed validation: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = heuristic.save(&cli.output) {
        eprintln!("failed to write {}: {err}", cli.output.display());
        return ExitCode::FAILURE;
    }

    info!("wrote {}", cli.output.display());
    ExitCode::SUCCESS
}
