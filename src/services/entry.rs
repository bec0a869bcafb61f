//! Entry service
//!
//! The validation boundary between user input and the store. Drafts carry
//! the raw form fields; `validate_draft` either produces a well-formed entry
//! or a typed rejection reason. The store is never reached by an invalid
//! entry.

use chrono::NaiveDate;
use thiserror::Error;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Entry, EntryId, EntryKind, Money};
use crate::storage::Storage;

/// Raw entry payload as submitted by the user
///
/// All value fields are unparsed strings; `id` is set when editing an
/// existing entry and absent for a new one.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub id: Option<EntryId>,
    pub kind: EntryKind,
    pub amount: String,
    pub category: String,
    pub date: String,
    pub note: String,
}

/// Why a draft was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryRejection {
    #[error("amount is not a number: '{0}'")]
    AmountNotNumeric(String),

    #[error("amount must be greater than zero")]
    AmountNotPositive,

    #[error("category must not be empty")]
    EmptyCategory,

    #[error("date must not be empty")]
    EmptyDate,

    #[error("date is not a valid YYYY-MM-DD date: '{0}'")]
    InvalidDate(String),
}

/// Validate a draft into a well-formed entry
///
/// A draft without an id gets a fresh one; a draft with an id produces the
/// full replacement for that entry.
pub fn validate_draft(draft: &EntryDraft) -> Result<Entry, EntryRejection> {
    let amount = Money::parse(&draft.amount)
        .map_err(|_| EntryRejection::AmountNotNumeric(draft.amount.clone()))?;
    if !amount.is_positive() {
        return Err(EntryRejection::AmountNotPositive);
    }

    let category = draft.category.trim();
    if category.is_empty() {
        return Err(EntryRejection::EmptyCategory);
    }

    let date_str = draft.date.trim();
    if date_str.is_empty() {
        return Err(EntryRejection::EmptyDate);
    }
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| EntryRejection::InvalidDate(date_str.to_string()))?;

    let mut entry = Entry::new(draft.kind, amount, category, date);
    if let Some(id) = &draft.id {
        entry.id = id.clone();
    }
    entry.note = draft.note.trim().to_string();

    Ok(entry)
}

/// Service for entry management
pub struct EntryService<'a> {
    storage: &'a Storage,
}

impl<'a> EntryService<'a> {
    /// Create a new entry service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and upsert a draft, persisting before returning
    pub fn submit(&self, draft: EntryDraft) -> LedgerResult<Entry> {
        let entry =
            validate_draft(&draft).map_err(|reason| LedgerError::Validation(reason.to_string()))?;

        self.storage.entries.upsert(entry.clone())?;
        Ok(entry)
    }

    /// Get an entry by id
    pub fn get(&self, id: &EntryId) -> LedgerResult<Option<Entry>> {
        self.storage.entries.get(id)
    }

    /// Delete an entry by id; absent ids are not an error
    pub fn delete(&self, id: &EntryId) -> LedgerResult<bool> {
        self.storage.entries.delete(id)
    }

    /// List entries in display order (date descending)
    pub fn list(&self) -> LedgerResult<Vec<Entry>> {
        self.storage.entries.get_all_by_date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn draft(amount: &str, category: &str, date: &str) -> EntryDraft {
        EntryDraft {
            id: None,
            kind: EntryKind::Expense,
            amount: amount.to_string(),
            category: category.to_string(),
            date: date.to_string(),
            note: String::new(),
        }
    }

    #[test]
    fn test_valid_draft() {
        let entry = validate_draft(&draft("12.50", "Groceries", "2024-01-05")).unwrap();
        assert_eq!(entry.amount.cents(), 1250);
        assert_eq!(entry.category, "Groceries");
        assert!(!entry.id.as_str().is_empty());
    }

    #[test]
    fn test_rejects_non_numeric_amount() {
        assert_eq!(
            validate_draft(&draft("abc", "Food", "2024-01-05")),
            Err(EntryRejection::AmountNotNumeric("abc".to_string()))
        );
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        assert_eq!(
            validate_draft(&draft("0", "Food", "2024-01-05")),
            Err(EntryRejection::AmountNotPositive)
        );
        assert_eq!(
            validate_draft(&draft("-5", "Food", "2024-01-05")),
            Err(EntryRejection::AmountNotPositive)
        );
    }

    #[test]
    fn test_rejects_empty_category() {
        assert_eq!(
            validate_draft(&draft("5", "   ", "2024-01-05")),
            Err(EntryRejection::EmptyCategory)
        );
    }

    #[test]
    fn test_rejects_empty_and_invalid_dates() {
        assert_eq!(
            validate_draft(&draft("5", "Food", "")),
            Err(EntryRejection::EmptyDate)
        );
        assert_eq!(
            validate_draft(&draft("5", "Food", "05/01/2024")),
            Err(EntryRejection::InvalidDate("05/01/2024".to_string()))
        );
    }

    #[test]
    fn test_draft_trims_category_and_note() {
        let mut d = draft("5", "  Food  ", "2024-01-05");
        d.note = "  lunch  ".to_string();
        let entry = validate_draft(&d).unwrap();
        assert_eq!(entry.category, "Food");
        assert_eq!(entry.note, "lunch");
    }

    #[test]
    fn test_submit_then_resubmit_replaces_by_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = EntryService::new(&storage);

        let first = service.submit(draft("10", "Food", "2024-01-05")).unwrap();

        let mut edit = draft("50", "Food", "2024-01-05");
        edit.id = Some(first.id.clone());
        service.submit(edit).unwrap();

        let all = storage.entries.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, first.id);
        assert_eq!(all[0].amount.cents(), 5000);
    }

    #[test]
    fn test_submit_rejection_leaves_store_untouched() {
        let (_temp_dir, storage) = create_test_storage();
        let service = EntryService::new(&storage);

        let err = service.submit(draft("0", "Food", "2024-01-05")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(storage.entries.count().unwrap(), 0);
    }

    #[test]
    fn test_list_is_display_ordered() {
        let (_temp_dir, storage) = create_test_storage();
        let service = EntryService::new(&storage);

        service.submit(draft("1", "A", "2024-01-01")).unwrap();
        service.submit(draft("2", "B", "2024-03-01")).unwrap();
        service.submit(draft("3", "C", "2024-02-01")).unwrap();

        let listed = service.list().unwrap();
        let categories: Vec<&str> = listed.iter().map(|e| e.category.as_str()).collect();
        assert_eq!(categories, vec!["B", "C", "A"]);
    }
}
