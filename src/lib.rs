//! An optimal solver for the 4x4 sliding-tile ("fifteen") puzzle.
//!
//! Built on an additive, disjoint pattern-database heuristic ([`pdb`]) and an Iterative Deepening
//! A\* tree search ([`search`]). The pattern database is built once, offline, by
//! [`pdb::builder::build`] and persisted to disk; solving loads it read-only via
//! [`pdb::Heuristic::load`] and feeds it to [`search::solve`].

pub mod board;
pub mod direction;
pub mod error;
pub mod index;
pub mod pattern;
pub mod pdb;
pub mod search;
pub mod solvability;
pub mod statistics;

pub use board::Board;
pub use error::Error;
pub use pdb::Heuristic;
