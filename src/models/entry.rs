//! Entry model
//!
//! A ledger entry is one income or expense record. Entries are immutable
//! value objects from the store's point of view: an edit replaces the whole
//! entry under the same id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EntryId;
use super::money::Money;

/// Whether an entry adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    #[default]
    Expense,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// One income or expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier, stable across edits
    pub id: EntryId,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: EntryKind,

    /// Amount in currency units, always positive for valid entries
    pub amount: Money,

    /// Category label
    pub category: String,

    /// Calendar date, no time component
    pub date: NaiveDate,

    /// Optional free-text note
    #[serde(default)]
    pub note: String,
}

impl Entry {
    /// Create a new entry with a fresh id and an empty note
    pub fn new(kind: EntryKind, amount: Money, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: EntryId::new(),
            kind,
            amount,
            category: category.into(),
            date,
            note: String::new(),
        }
    }

    /// Check if this is an income entry
    pub fn is_income(&self) -> bool {
        self.kind == EntryKind::Income
    }

    /// Amount with its direction applied: positive for income, negative for
    /// expense
    pub fn signed_amount(&self) -> Money {
        if self.is_income() {
            self.amount
        } else {
            -self.amount
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.signed_amount()
        )
    }
}
