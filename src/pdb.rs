//! The pattern database: offline construction (`builder`) and the online read-only oracle
//! (`oracle`) built on top of it.

pub mod builder;
pub mod oracle;

pub use oracle::Heuristic;
