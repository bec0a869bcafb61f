//! Entry display formatting
//!
//! Formats entries for terminal output: a register view of the collection
//! and a detail view for a single entry.

use crate::models::Entry;

/// Format a single entry as a register row
pub fn format_entry_row(entry: &Entry) -> String {
    let amount = if entry.is_income() {
        format!("+{}", entry.amount)
    } else {
        format!("-{}", entry.amount)
    };

    let note = if entry.note.is_empty() {
        String::new()
    } else {
        format!("  {}", entry.note)
    };

    format!(
        "{} {:20} {:>12}{}",
        entry.date.format("%Y-%m-%d"),
        truncate(&entry.category, 20),
        amount,
        note
    )
}

/// Format a list of entries as a register
pub fn format_entry_register(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries yet. Add your first one with 'pocket entry add'.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:20} {:>12}  {}\n",
        "Date", "Category", "Amount", "Note"
    ));
    output.push_str(&"-".repeat(50));
    output.push('\n');

    for entry in entries {
        output.push_str(&format_entry_row(entry));
        output.push('\n');
    }

    output
}

/// Format entry details for display
pub fn format_entry_details(entry: &Entry) -> String {
    let mut output = String::new();

    output.push_str(&format!("Entry:    {}\n", entry.id));
    output.push_str(&format!("Type:     {}\n", entry.kind));
    output.push_str(&format!("Amount:   {}\n", entry.amount));
    output.push_str(&format!("Category: {}\n", entry.category));
    output.push_str(&format!("Date:     {}\n", entry.date.format("%Y-%m-%d")));

    if !entry.note.is_empty() {
        output.push_str(&format!("Note:     {}\n", entry.note));
    }

    output
}

/// Truncate a string to a maximum length
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryId, EntryKind, Money};
    use chrono::NaiveDate;

    fn sample_entry() -> Entry {
        let mut entry = Entry::new(
            EntryKind::Expense,
            Money::from_cents(1250),
            "Groceries",
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        );
        entry.id = EntryId::from("g1");
        entry
    }

    #[test]
    fn test_format_entry_row() {
        let formatted = format_entry_row(&sample_entry());
        assert!(formatted.contains("2024-01-05"));
        assert!(formatted.contains("Groceries"));
        assert!(formatted.contains("-$12.50"));
    }

    #[test]
    fn test_income_row_has_plus_sign() {
        let mut entry = sample_entry();
        entry.kind = EntryKind::Income;
        assert!(format_entry_row(&entry).contains("+$12.50"));
    }

    #[test]
    fn test_row_appends_note() {
        let mut entry = sample_entry();
        entry.note = "weekly shop".to_string();
        assert!(format_entry_row(&entry).ends_with("weekly shop"));
    }

    #[test]
    fn test_format_empty_register() {
        let formatted = format_entry_register(&[]);
        assert!(formatted.contains("No entries yet"));
    }

    #[test]
    fn test_format_entry_details() {
        let mut entry = sample_entry();
        entry.note = "weekly shop".to_string();

        let formatted = format_entry_details(&entry);
        assert!(formatted.contains("g1"));
        assert!(formatted.contains("expense"));
        assert!(formatted.contains("Groceries"));
        assert!(formatted.contains("weekly shop"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 10).trim(), "Short");
        let result = truncate("A very long category label", 10);
        assert!(result.len() <= 10);
        assert!(result.ends_with("..."));
    }
}
