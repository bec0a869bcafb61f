//! Storage layer for pocket-ledger
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The entire entry collection is one durable blob; reads and
//! writes are whole-value, never partial.

pub mod entries;
pub mod file_io;
pub mod init;

pub use entries::EntryRepository;
pub use file_io::{read_json_or_default, write_json_atomic};
pub use init::initialize_storage;

use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;

/// Main storage coordinator
///
/// Callers hold one instance per process; the entry collection is owned
/// exclusively by the repository inside.
pub struct Storage {
    paths: LedgerPaths,
    pub entries: EntryRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LedgerPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        Ok(Self {
            entries: EntryRepository::new(paths.entries_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), LedgerError> {
        self.entries.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        storage.load_all().unwrap();
        assert_eq!(storage.entries.count().unwrap(), 0);
    }
}
