//! Report CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::totals::format_totals;
use crate::error::LedgerResult;
use crate::reports::{CategoryBreakdown, Totals};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Income/expense/balance summary
    Totals,
    /// Activity broken down by category
    Categories,
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> LedgerResult<()> {
    match cmd {
        ReportCommands::Totals => handle_totals_command(storage, settings),
        ReportCommands::Categories => handle_categories_command(storage, settings),
    }
}

/// Print the totals summary
pub fn handle_totals_command(storage: &Storage, settings: &Settings) -> LedgerResult<()> {
    let entries = storage.entries.get_all()?;
    let totals = Totals::compute(&entries);
    print!("{}", format_totals(&totals, &settings.currency_symbol));
    Ok(())
}

/// Print the per-category breakdown
fn handle_categories_command(storage: &Storage, settings: &Settings) -> LedgerResult<()> {
    let entries = storage.entries.get_all()?;
    let breakdown = CategoryBreakdown::generate(&entries);

    if breakdown.rows.is_empty() {
        println!("No entries yet.");
        return Ok(());
    }

    println!(
        "{:20} {:>12} {:>12} {:>8}",
        "Category", "Income", "Expenses", "Entries"
    );
    println!("{}", "-".repeat(56));

    for row in &breakdown.rows {
        println!(
            "{:20} {:>12} {:>12} {:>8}",
            row.category,
            row.income.format_with_symbol(&settings.currency_symbol),
            row.expense.format_with_symbol(&settings.currency_symbol),
            row.entry_count
        );
    }

    Ok(())
}
