//! CSV dialect tests
//!
//! Covers the encode/decode round-trip and proves the emitted dialect is
//! readable by a standard CSV parser.

use chrono::NaiveDate;

use pocket_ledger::export::csv::encode_entries;
use pocket_ledger::models::{Entry, EntryId, EntryKind, Money};
use pocket_ledger::services::decode_entries;

fn entry(
    id: &str,
    kind: EntryKind,
    cents: i64,
    category: &str,
    date: (i32, u32, u32),
    note: &str,
) -> Entry {
    Entry {
        id: EntryId::from(id),
        kind,
        amount: Money::from_cents(cents),
        category: category.to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        note: note.to_string(),
    }
}

fn awkward_entries() -> Vec<Entry> {
    vec![
        entry("1", EntryKind::Income, 1250, "Pay,check", (2024, 1, 5), ""),
        entry(
            "2",
            EntryKind::Expense,
            4000,
            "say \"hi\"",
            (2024, 2, 1),
            "quotes \"and\" commas, together",
        ),
        entry("3", EntryKind::Expense, 5, "Misc", (2024, 2, 2), "tiny"),
    ]
}

#[test]
fn documented_encode_scenario_is_byte_exact() {
    let entries = vec![entry("1", EntryKind::Income, 1250, "Pay,check", (2024, 1, 5), "")];

    assert_eq!(
        encode_entries(&entries),
        "id,type,amount,category,date,note\n1,income,12.5,\"Pay,check\",2024-01-05,\"\""
    );
}

#[test]
fn decode_inverts_encode() {
    let entries = awkward_entries();
    let decoded = decode_entries(&encode_entries(&entries));

    assert_eq!(decoded.skipped, 0);
    assert_eq!(decoded.entries, entries);
}

#[test]
fn emitted_dialect_parses_with_a_standard_reader() {
    let entries = awkward_entries();
    let encoded = encode_entries(&entries);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(encoded.as_bytes());

    let header = reader.headers().unwrap().clone();
    assert_eq!(
        header,
        csv::StringRecord::from(vec!["id", "type", "amount", "category", "date", "note"])
    );

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), entries.len());

    for (record, entry) in records.iter().zip(&entries) {
        assert_eq!(&record[0], entry.id.as_str());
        assert_eq!(&record[1], entry.kind.to_string().as_str());
        assert_eq!(&record[2], entry.amount.to_decimal_string().as_str());
        assert_eq!(&record[3], entry.category.as_str());
        assert_eq!(&record[4], entry.date.format("%Y-%m-%d").to_string().as_str());
        assert_eq!(&record[5], entry.note.as_str());
    }
}

#[test]
fn decode_accepts_crlf_line_endings() {
    let entries = awkward_entries();
    let encoded = encode_entries(&entries).replace('\n', "\r\n");

    let decoded = decode_entries(&encoded);
    assert_eq!(decoded.entries, entries);
}
