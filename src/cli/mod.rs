//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. This is the
//! presentation adapter: it turns user actions into store operations and
//! renders the results as plain text.

pub mod entry;
pub mod export;
pub mod import;
pub mod report;

pub use entry::{handle_entry_command, EntryCommands};
pub use export::{handle_export_command, ExportFormat};
pub use import::handle_import_command;
pub use report::{handle_report_command, handle_totals_command, ReportCommands};
