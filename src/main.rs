use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_ledger::cli::{
    handle_categories_command, handle_expense_command, handle_export_command,
    handle_history_command, handle_summary_command, ExpenseCommands, FilterArgs,
};
use expense_ledger::config::{paths::DATA_DIR_ENV, LedgerPaths, Settings};
use expense_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    author = "Kaylee Beyene",
    version,
    about = "Personal expense tracker",
    long_about = "Record expenses by amount, category and description, review them \
                  by category and date range, and export them to CSV."
)]
struct Cli {
    /// Directory holding expenses.json, config.json and audit.log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Show spending per category
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Export all expenses to CSV
    Export {
        /// Output file (default: expenses.csv in the data directory)
        output: Option<PathBuf>,
    },

    /// List known categories
    Categories,

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Create the data directory and a default config file
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = match cli.data_dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone(), &settings)?;
    if let Err(e) = storage.load() {
        eprintln!("Warning: {}. Starting with an empty ledger.", e);
    }

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Summary { filter }) => {
            handle_summary_command(&storage, &settings, &filter)?;
        }
        Some(Commands::Export { output }) => {
            handle_export_command(&storage, output)?;
        }
        Some(Commands::Categories) => {
            handle_categories_command(&storage)?;
        }
        Some(Commands::History { count }) => {
            handle_history_command(&storage, count)?;
        }
        Some(Commands::Init) => {
            println!("Initializing expense ledger at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Default categories: {}", settings.categories.join(", "));
            println!("Run 'expenses add <AMOUNT> <CATEGORY>' to record an expense.");
        }
        Some(Commands::Config) => {
            println!("Expense Ledger Configuration");
            println!("============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {:?}", settings.currency_symbol);
            println!("  Categories:      {}", settings.categories.join(", "));
            println!("  Audit log:       {}", settings.audit_log);
        }
        None => {
            println!("Expense Ledger - personal expense tracker");
            println!();
            println!("Run 'expenses --help' for usage information.");
        }
    }

    Ok(())
}
