//! JSON export
//!
//! Writes the entry collection as the same bare JSON array the durable blob
//! uses, so an exported file can be inspected or re-seeded directly.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Entry;

/// Write entries as a pretty-printed JSON array
pub fn write_entries_json<W: Write>(entries: &[Entry], writer: &mut W) -> LedgerResult<()> {
    serde_json::to_writer_pretty(writer, entries)
        .map_err(|e| LedgerError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryId, EntryKind, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_json_export_round_trips() {
        let mut entry = Entry::new(
            EntryKind::Income,
            Money::from_cents(1250),
            "Pay",
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        );
        entry.id = EntryId::from("1");
        let entries = vec![entry];

        let mut output = Vec::new();
        write_entries_json(&entries, &mut output).unwrap();

        let parsed: Vec<Entry> = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed, entries);
    }
}
