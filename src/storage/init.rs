//! First-run storage initialization

use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::Entry;

use super::file_io::write_json_atomic;

/// Create the storage directories and an empty entries file
///
/// An existing entries file is left untouched.
pub fn initialize_storage(paths: &LedgerPaths) -> Result<(), LedgerError> {
    paths.ensure_directories()?;

    let entries_file = paths.entries_file();
    if !entries_file.exists() {
        write_json_atomic(&entries_file, &Vec::<Entry>::new())?;
    }

    Ok(())
}
