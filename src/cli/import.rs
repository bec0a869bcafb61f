//! Import CLI command

use std::fs;
use std::path::PathBuf;

use crate::error::{LedgerError, LedgerResult};
use crate::services::import_entries;
use crate::storage::Storage;

/// Handle the import command
///
/// Reads a CSV file and, if it yields any valid rows, replaces the entire
/// collection with its contents.
pub fn handle_import_command(storage: &Storage, file: PathBuf) -> LedgerResult<()> {
    let content = fs::read_to_string(&file).map_err(|e| {
        LedgerError::Import(format!("Failed to read {}: {}", file.display(), e))
    })?;

    let summary = import_entries(storage, &content)?;

    if summary.imported == 0 {
        println!(
            "No valid rows in {}; existing entries unchanged.",
            file.display()
        );
    } else {
        println!(
            "Imported {} entries from {} ({} rows skipped), replacing the previous collection.",
            summary.imported,
            file.display(),
            summary.skipped
        );
    }

    Ok(())
}
