use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pocket_ledger::cli::{
    handle_entry_command, handle_export_command, handle_import_command, handle_report_command,
    handle_totals_command, EntryCommands, ExportFormat, ReportCommands,
};
use pocket_ledger::config::{paths::LedgerPaths, settings::Settings};
use pocket_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "pocket",
    version,
    about = "Command-line personal income and expense ledger",
    long_about = "pocket-ledger records income and expense entries, keeps them \
                  in a local JSON data file, and summarizes totals. Entries can \
                  be exported to and imported from CSV."
)]
struct Cli {
    /// Enable verbose diagnostics
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Entry management commands
    #[command(subcommand)]
    Entry(EntryCommands),

    /// Income/expense/balance summary
    Totals,

    /// Reports over the collection
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export entries to a file
    Export {
        /// Output file path (defaults to budget-entries-<date>.<ext>)
        output: Option<PathBuf>,

        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
    },

    /// Import entries from a CSV file, replacing the collection
    Import {
        /// Path to CSV file
        file: PathBuf,
    },

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Entry(cmd)) => {
            handle_entry_command(&storage, cmd)?;
        }
        Some(Commands::Totals) => {
            handle_totals_command(&storage, &settings)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export { output, format }) => {
            handle_export_command(&storage, output, format)?;
        }
        Some(Commands::Import { file }) => {
            handle_import_command(&storage, file)?;
        }
        Some(Commands::Init) => {
            println!("Initializing pocket-ledger at: {}", paths.base_dir().display());
            pocket_ledger::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete.");
            println!();
            println!("Add your first entry with 'pocket entry add 12.50 Groceries'.");
        }
        Some(Commands::Config) => {
            println!("pocket-ledger configuration");
            println!("===========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data file:      {}", paths.entries_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
        }
        None => {
            println!("pocket-ledger - Command-line income and expense ledger");
            println!();
            println!("Run 'pocket --help' for usage information.");
            println!("Run 'pocket entry list' to see your entries.");
        }
    }

    Ok(())
}

/// Initialize tracing for diagnostics
///
/// Silent by default; `--verbose` or RUST_LOG enables output. User-facing
/// messages go to stdout via println, never through tracing.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "off" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
