//! Entry CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::display::entry::{format_entry_details, format_entry_register};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{EntryId, EntryKind};
use crate::services::{EntryDraft, EntryService};
use crate::storage::Storage;

/// Entry subcommands
#[derive(Subcommand)]
pub enum EntryCommands {
    /// Add a new entry
    Add {
        /// Amount in currency units (e.g. "12.50")
        amount: String,
        /// Category label
        category: String,
        /// Record as income (default is expense)
        #[arg(long)]
        income: bool,
        /// Entry date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Edit an entry, replacing it under the same id
    Edit {
        /// Entry ID
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New note
        #[arg(short, long)]
        note: Option<String>,
        /// Change to income
        #[arg(long, conflicts_with = "expense")]
        income: bool,
        /// Change to expense
        #[arg(long)]
        expense: bool,
    },
    /// Delete an entry
    Delete {
        /// Entry ID
        id: String,
    },
    /// List entries, newest date first
    List {
        /// Number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show entry details
    Show {
        /// Entry ID
        id: String,
    },
}

/// Handle an entry command
pub fn handle_entry_command(storage: &Storage, cmd: EntryCommands) -> LedgerResult<()> {
    let service = EntryService::new(storage);

    match cmd {
        EntryCommands::Add {
            amount,
            category,
            income,
            date,
            note,
        } => {
            let draft = EntryDraft {
                id: None,
                kind: if income {
                    EntryKind::Income
                } else {
                    EntryKind::Expense
                },
                amount,
                category,
                date: date.unwrap_or_else(|| Local::now().date_naive().format("%Y-%m-%d").to_string()),
                note: note.unwrap_or_default(),
            };

            let entry = service.submit(draft)?;
            println!("Added entry {}: {}", entry.id, entry);
        }
        EntryCommands::Edit {
            id,
            amount,
            category,
            date,
            note,
            income,
            expense,
        } => {
            let id = EntryId::from(id);
            let existing = service
                .get(&id)?
                .ok_or_else(|| LedgerError::entry_not_found(id.to_string()))?;

            let kind = if income {
                EntryKind::Income
            } else if expense {
                EntryKind::Expense
            } else {
                existing.kind
            };

            let draft = EntryDraft {
                id: Some(id),
                kind,
                amount: amount.unwrap_or_else(|| existing.amount.to_decimal_string()),
                category: category.unwrap_or_else(|| existing.category.clone()),
                date: date.unwrap_or_else(|| existing.date.format("%Y-%m-%d").to_string()),
                note: note.unwrap_or_else(|| existing.note.clone()),
            };

            let entry = service.submit(draft)?;
            println!("Updated entry {}: {}", entry.id, entry);
        }
        EntryCommands::Delete { id } => {
            let id = EntryId::from(id);
            if service.delete(&id)? {
                println!("Deleted entry {}", id);
            } else {
                println!("No entry with id {}", id);
            }
        }
        EntryCommands::List { limit } => {
            let mut entries = service.list()?;
            if let Some(limit) = limit {
                entries.truncate(limit);
            }
            print!("{}", format_entry_register(&entries));
        }
        EntryCommands::Show { id } => {
            let id = EntryId::from(id);
            let entry = service
                .get(&id)?
                .ok_or_else(|| LedgerError::entry_not_found(id.to_string()))?;
            print!("{}", format_entry_details(&entry));
        }
    }

    Ok(())
}
