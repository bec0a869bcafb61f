//! Income/expense/balance totals
//!
//! A pure fold over the entry collection; no side effects, O(n).

use crate::models::{Entry, EntryKind, Money};

/// Aggregate totals for a set of entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    /// Sum of income amounts
    pub income: Money,
    /// Sum of expense amounts
    pub expense: Money,
    /// income - expense
    pub balance: Money,
}

impl Totals {
    /// Compute totals over a borrowed slice of entries
    pub fn compute(entries: &[Entry]) -> Self {
        let mut income = Money::zero();
        let mut expense = Money::zero();

        for entry in entries {
            match entry.kind {
                EntryKind::Income => income += entry.amount,
                EntryKind::Expense => expense += entry.amount,
            }
        }

        Self {
            income,
            expense,
            balance: income - expense,
        }
    }
}
