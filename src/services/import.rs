//! CSV import service
//!
//! The decode side of the CSV codec. The dialect is the one `export::csv`
//! emits: a header line, then one row per entry with `category` and `note`
//! quoted. Decoding is lenient by contract: rows that fail any field check
//! are skipped, never fatal, and an import that yields no valid rows leaves
//! the existing collection untouched.

use chrono::NaiveDate;

use crate::error::LedgerResult;
use crate::models::{Entry, EntryId, EntryKind, Money};
use crate::storage::Storage;

/// Number of fields in a well-formed row: id, type, amount, category, date, note
const FIELD_COUNT: usize = 6;

/// Result of decoding a CSV document
#[derive(Debug, Clone, Default)]
pub struct CsvImport {
    /// Entries decoded from valid rows, in file order
    pub entries: Vec<Entry>,
    /// Number of data rows that failed a field check
    pub skipped: usize,
}

/// Outcome of applying a decoded document to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Entries installed (0 means the import was a no-op)
    pub imported: usize,
    /// Rows skipped during decoding
    pub skipped: usize,
}

/// Split one CSV line into fields with a quote-aware scanner
///
/// A `"` toggles the in-quotes flag, except that a doubled `""` inside
/// quotes emits one literal quote. A `,` separates fields only outside
/// quotes.
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut inside_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if inside_quotes && chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    inside_quotes = !inside_quotes;
                }
            }
            ',' if !inside_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }

    fields.push(current);
    fields
}

/// Trim a field and strip one residual wrapping quote pair
fn clean_field(value: &str) -> String {
    let trimmed = value.trim();
    let stripped = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let stripped = stripped.strip_suffix('"').unwrap_or(stripped);
    stripped.to_string()
}

/// Decode one data row, or `None` if any field check fails
fn decode_row(line: &str) -> Option<Entry> {
    let mut fields = split_csv_line(line);
    // Missing trailing fields are treated as empty; extras are ignored
    fields.resize(FIELD_COUNT, String::new());

    let id = fields[0].trim();
    if id.is_empty() {
        return None;
    }

    let amount = Money::parse(&fields[2]).ok()?;
    if !amount.is_positive() {
        return None;
    }

    let date_field = fields[4].trim();
    if date_field.is_empty() {
        return None;
    }
    let date = NaiveDate::parse_from_str(date_field, "%Y-%m-%d").ok()?;

    // Exact "income" is income; everything else normalizes to expense
    let kind = if fields[1] == "income" {
        EntryKind::Income
    } else {
        EntryKind::Expense
    };

    Some(Entry {
        id: EntryId::from(id),
        kind,
        amount,
        category: clean_field(&fields[3]),
        date,
        note: clean_field(&fields[5]),
    })
}

/// Decode a CSV document into entries
///
/// The first non-empty line is a header and is discarded. A document with
/// fewer than two non-empty lines decodes to an empty result without error.
pub fn decode_entries(content: &str) -> CsvImport {
    let lines: Vec<&str> = content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < 2 {
        return CsvImport::default();
    }

    let mut import = CsvImport::default();
    for line in &lines[1..] {
        match decode_row(line) {
            Some(entry) => import.entries.push(entry),
            None => import.skipped += 1,
        }
    }

    import
}

/// Decode a CSV document and apply it to the store
///
/// A non-empty decode wholesale-replaces the collection (persisted before
/// returning); an empty decode is a no-op and the collection is untouched.
pub fn import_entries(storage: &Storage, content: &str) -> LedgerResult<ImportSummary> {
    let decoded = decode_entries(content);
    let summary = ImportSummary {
        imported: decoded.entries.len(),
        skipped: decoded.skipped,
    };

    if !decoded.entries.is_empty() {
        storage.entries.replace_all(decoded.entries)?;
    }

    Ok(summary)
}
