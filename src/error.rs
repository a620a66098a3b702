//! Defines the [`Error`] type shared by every fallible entry point in this crate.

use thiserror::Error;

/// Error type covering every failure kind the PDB builder, heuristic oracle, and IDA* engine can
/// produce.
///
/// Propagation policy: these are always returned through a `Result`, never logged or used to abort
/// the process. Presentation and retry are the caller's concern (see the `solve` and `build_pdb`
/// binaries for the two callers this crate ships).
#[derive(Debug, Error)]
pub enum Error {
    /// PDB load or save failed at the filesystem level.
    #[error("IoError: {0}")]
    Io(#[from] std::io::Error),

    /// The loaded PDB file does not have the expected size, or a sentinel byte (255) was read
    /// during a heuristic lookup for a state that should be reachable. Indicates a corrupt or
    /// mis-versioned artifact.
    #[error("DataIntegrity: {0}")]
    DataIntegrity(String),

    /// An allocation failed while building the PDB (the visited table or the BFS queue).
    #[error("ResourceExhaustion: allocation failed while building the pattern database")]
    ResourceExhaustion,

    /// The input board is malformed: wrong length, a tile out of the range [0,15], or a duplicate
    /// tile.
    #[error("InvalidInput: {0}")]
    InvalidInput(String),

    /// The input board fails the solvability predicate.
    #[error("Unsolvable: board is not a solvable permutation of the 4x4 fifteen puzzle")]
    Unsolvable,

    /// IDA*'s bound escalation reached the "no further bound" sentinel. Unreachable for a solvable
    /// board against a correctly built PDB; surfaced rather than looping forever.
    #[error("SearchExhausted: iterative deepening exhausted the search space without a solution")]
    SearchExhausted,

    /// A caller passed a board whose dimensions are incompatible with this crate's fixed 4x4
    /// board, or (for the sub-board embedding path) an outer board too small to contain the
    /// requested 4x4 corner.
    #[error("IncompatiblePuzzleSize: {0}")]
    IncompatiblePuzzleSize(String),
}
