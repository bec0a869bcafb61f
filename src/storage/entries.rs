//! Entry repository for JSON storage
//!
//! Holds the entry collection in stored (insertion) order and round-trips it
//! to entries.json as a bare JSON array. Every mutating operation performs
//! the durable write before returning: an `Ok` from `upsert`, `delete`, or
//! `replace_all` guarantees the post-mutation blob is on disk.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::LedgerError;
use crate::models::{Entry, EntryId};

use super::file_io::{read_json_or_default, write_json_atomic};

/// Repository for entry persistence
pub struct EntryRepository {
    path: PathBuf,
    entries: RwLock<Vec<Entry>>,
}

impl EntryRepository {
    /// Create a new entry repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Load entries from disk
    ///
    /// A missing or malformed file yields an empty collection.
    pub fn load(&self) -> Result<(), LedgerError> {
        let loaded: Vec<Entry> = read_json_or_default(&self.path);

        let mut entries = self
            .entries
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *entries = loaded;

        Ok(())
    }

    /// Save the whole collection to disk
    pub fn save(&self) -> Result<(), LedgerError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*entries)
    }

    /// Get an entry by ID
    pub fn get(&self, id: &EntryId) -> Result<Option<Entry>, LedgerError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.iter().find(|e| &e.id == id).cloned())
    }

    /// Get all entries in stored (insertion) order
    pub fn get_all(&self) -> Result<Vec<Entry>, LedgerError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.clone())
    }

    /// Get all entries in display order: date descending, ties keeping
    /// stored order (stable sort)
    pub fn get_all_by_date(&self) -> Result<Vec<Entry>, LedgerError> {
        let mut entries = self.get_all()?;
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }

    /// Insert or update an entry
    ///
    /// An existing entry with the same id is replaced in place, keeping its
    /// position; a new entry goes to the front. The collection is persisted
    /// before returning.
    pub fn upsert(&self, entry: Entry) -> Result<(), LedgerError> {
        {
            let mut entries = self.entries.write().map_err(|e| {
                LedgerError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;

            match entries.iter().position(|e| e.id == entry.id) {
                Some(index) => entries[index] = entry,
                None => entries.insert(0, entry),
            }
        }

        self.save()
    }

    /// Delete an entry by id, persisting afterwards
    ///
    /// Returns whether an entry was removed; deleting an absent id is not an
    /// error.
    pub fn delete(&self, id: &EntryId) -> Result<bool, LedgerError> {
        let removed = {
            let mut entries = self.entries.write().map_err(|e| {
                LedgerError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;

            let before = entries.len();
            entries.retain(|e| &e.id != id);
            before != entries.len()
        };

        self.save()?;
        Ok(removed)
    }

    /// Discard the current collection and install the given list verbatim,
    /// persisting afterwards
    pub fn replace_all(&self, new_entries: Vec<Entry>) -> Result<(), LedgerError> {
        {
            let mut entries = self.entries.write().map_err(|e| {
                LedgerError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            *entries = new_entries;
        }

        self.save()
    }

    /// Count entries
    pub fn count(&self) -> Result<usize, LedgerError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.len())
    }
}
