//! The heuristic oracle: an in-memory, read-only view over a persisted pattern database.

use std::{
    fs,
    io::Write as _,
    path::Path,
};

use crate::{
    board::Board,
    error::Error,
    index::{sparse_index, sparse_index_reflected},
    pattern::{PATTERNS, TOTAL_STATES},
};

/// A loaded pattern database, ready to answer admissible distance estimates.
///
/// Acquired via [`Heuristic::load`] (or [`Heuristic::from_bytes`] for an in-memory table, as
/// produced by [`crate::pdb::builder::build`]); released when dropped along with the backing
/// `Vec<u8>`. Cheap to share across multiple searches via `&Heuristic`, since nothing here is
/// mutated after construction.
#[derive(Clone, Debug)]
pub struct Heuristic {
    table: Vec<u8>,
}

impl Heuristic {
    /// Wraps an already-built table, validating its length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataIntegrity`] if `table.len() != TOTAL_STATES`.
    pub fn from_bytes(table: Vec<u8>) -> Result<Self, Error> {
        if table.len() != TOTAL_STATES {
            return Err(Error::DataIntegrity(format!(
                "expected {TOTAL_STATES} bytes, got {}",
                table.len()
            )));
        }
        Ok(Self { table })
    }

    /// Reads a pattern database from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or [`Error::DataIntegrity`] if its length
    /// does not match [`TOTAL_STATES`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let table = fs::read(path)?;
        Self::from_bytes(table)
    }

    /// Writes this pattern database to disk.
    ///
    /// Writes to a sibling temporary file first and renames it into place, so a crash or I/O
    /// error partway through never leaves a truncated file at `path`. The temporary file is
    /// removed if any step after its creation fails.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if any filesystem operation fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("bin.tmp");

        let write_result = (|| -> Result<(), Error> {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(&self.table)?;
            file.sync_all()?;
            Ok(())
        })();

        if let Err(err) = write_result {
            let _ = fs::remove_file(&tmp_path);
            return Err(err);
        }

        fs::rename(&tmp_path, path)?;
        Ok(())
    }

    /// Computes the admissible distance estimate for `board`: the greater of the plain-pattern
    /// sum and the reflected-pattern sum, both over all three patterns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataIntegrity`] if a looked-up slot is the sentinel 255, which indicates a
    /// corrupt or mis-built table (every reachable placement is always &lt; 255 after a correct
    /// build).
    pub fn h(&self, board: &Board) -> Result<u16, Error> {
        let mut plain = 0u16;
        let mut reflected = 0u16;

        for pattern in &PATTERNS {
            let plain_slot = sparse_index(board.tiles(), pattern) + pattern.offset;
            let reflected_slot = sparse_index_reflected(board.tiles(), pattern) + pattern.offset;

            plain += u16::from(self.lookup(plain_slot)?);
            reflected += u16::from(self.lookup(reflected_slot)?);
        }

        Ok(plain.max(reflected))
    }

    fn lookup(&self, slot: usize) -> Result<u8, Error> {
        match self.table[slot] {
            255 => Err(Error::DataIntegrity(format!(
                "sentinel hit at table slot {slot}"
            ))),
            value => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_table() -> Vec<u8> {
        vec![0u8; TOTAL_STATES]
    }

    #[test]
    fn test_from_bytes_rejects_wrong_length() {
        assert!(Heuristic::from_bytes(vec![0u8; 10]).is_err());
    }

    #[test]
    fn test_from_bytes_accepts_correct_length() {
        assert!(Heuristic::from_bytes(tiny_table()).is_ok());
    }

    #[test]
    fn test_h_of_solved_is_zero_when_table_is_all_zero() {
        let heuristic = Heuristic::from_bytes(tiny_table()).unwrap();
        assert_eq!(heuristic.h(&Board::solved()).unwrap(), 0);
    }

    #[test]
    fn test_h_detects_sentinel() {
        let heuristic = Heuristic::from_bytes(vec![255u8; TOTAL_STATES]).unwrap();
        assert!(heuristic.h(&Board::solved()).is_err());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = std::env::temp_dir().join(format!(
            "dim4-oracle-test-{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("heuristics.bin");

        let original = Heuristic::from_bytes(tiny_table()).unwrap();
        original.save(&path).unwrap();
        let loaded = Heuristic::load(&path).unwrap();

        assert_eq!(loaded.table, original.table);

        let _ = fs::remove_file(&path);
        let _ = fs::remove_dir(&dir);
    }
}
