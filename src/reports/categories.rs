//! Per-category activity breakdown

use std::collections::HashMap;

use crate::models::{Entry, EntryKind, Money};

/// Activity accumulated under one category label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryActivity {
    /// Category label
    pub category: String,
    /// Income recorded under this category
    pub income: Money,
    /// Expenses recorded under this category
    pub expense: Money,
    /// Number of entries
    pub entry_count: usize,
}

impl CategoryActivity {
    /// Total movement regardless of direction
    pub fn activity(&self) -> Money {
        self.income + self.expense
    }
}

/// Breakdown of the collection by category label
#[derive(Debug, Clone, Default)]
pub struct CategoryBreakdown {
    /// One row per category, ordered by activity descending then label
    pub rows: Vec<CategoryActivity>,
}

impl CategoryBreakdown {
    /// Generate a breakdown from a borrowed slice of entries
    pub fn generate(entries: &[Entry]) -> Self {
        let mut by_category: HashMap<&str, CategoryActivity> = HashMap::new();

        for entry in entries {
            let row = by_category
                .entry(entry.category.as_str())
                .or_insert_with(|| CategoryActivity {
                    category: entry.category.clone(),
                    income: Money::zero(),
                    expense: Money::zero(),
                    entry_count: 0,
                });

            match entry.kind {
                EntryKind::Income => row.income += entry.amount,
                EntryKind::Expense => row.expense += entry.amount,
            }
            row.entry_count += 1;
        }

        let mut rows: Vec<CategoryActivity> = by_category.into_values().collect();
        rows.sort_by(|a, b| {
            b.activity()
                .cmp(&a.activity())
                .then_with(|| a.category.cmp(&b.category))
        });

        Self { rows }
    }
}
