//! Export CLI command

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use chrono::Local;
use clap::ValueEnum;

use crate::error::{LedgerError, LedgerResult};
use crate::export::{csv, json};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV interchange format
    Csv,
    /// JSON array, same shape as the data file
    Json,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// Default export filename: budget-entries-<ISO-date>.<ext>
fn default_filename(format: ExportFormat) -> PathBuf {
    PathBuf::from(format!(
        "budget-entries-{}.{}",
        Local::now().date_naive().format("%Y-%m-%d"),
        format.extension()
    ))
}

/// Handle the export command
///
/// Exporting an empty collection is a no-op: no file is produced.
pub fn handle_export_command(
    storage: &Storage,
    output: Option<PathBuf>,
    format: ExportFormat,
) -> LedgerResult<()> {
    // Export follows stored order, not display order
    let entries = storage.entries.get_all()?;

    if entries.is_empty() {
        println!("No entries to export.");
        return Ok(());
    }

    let output = output.unwrap_or_else(|| default_filename(format));

    let file = File::create(&output).map_err(|e| {
        LedgerError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => csv::write_entries_csv(&entries, &mut writer)?,
        ExportFormat::Json => json::write_entries_json(&entries, &mut writer)?,
    }

    println!("Exported {} entries to: {}", entries.len(), output.display());
    Ok(())
}
