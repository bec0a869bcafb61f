//! CSV export
//!
//! The encode side of the CSV codec. The dialect: a fixed header, one row
//! per entry in stored order, `category` and `note` always wrapped in double
//! quotes with internal quotes doubled, all other fields unquoted, rows
//! newline-joined with no trailing newline.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Entry;

/// The fixed header row
pub const CSV_HEADER: &str = "id,type,amount,category,date,note";

/// Wrap a field in double quotes, doubling internal quotes
fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Encode entries into a CSV document
///
/// Rows follow the collection's stored order, not the display order.
pub fn encode_entries(entries: &[Entry]) -> String {
    let mut rows = Vec::with_capacity(entries.len() + 1);
    rows.push(CSV_HEADER.to_string());

    for entry in entries {
        rows.push(format!(
            "{},{},{},{},{},{}",
            entry.id,
            entry.kind,
            entry.amount.to_decimal_string(),
            quote(&entry.category),
            entry.date.format("%Y-%m-%d"),
            quote(&entry.note)
        ));
    }

    rows.join("\n")
}

/// Encode entries and write the document to a writer
pub fn write_entries_csv<W: Write>(entries: &[Entry], writer: &mut W) -> LedgerResult<()> {
    writer
        .write_all(encode_entries(entries).as_bytes())
        .map_err(|e| LedgerError::Export(e.to_string()))
}
