use anyhow::Result;
use clap::{Parser, Subcommand};

use tally::cli::{
    handle_audit_command, handle_category_command, handle_export_command, handle_method_command,
    handle_record_command, handle_summary_command, FilterArgs,
};
use tally::config::{paths::TallyPaths, settings::Settings};
use tally::storage::Storage;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal income and expense ledger",
    long_about = "tally is a terminal ledger for personal income and expenses. \
                  Records carry a date, categories, and a payment method, and can \
                  be filtered, paged, summarized, and exported from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record management commands
    #[command(subcommand, alias = "rec")]
    Record(tally::cli::RecordCommands),

    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(tally::cli::CategoryCommands),

    /// Payment method management commands
    #[command(subcommand)]
    Method(tally::cli::MethodCommands),

    /// Show income, expense, and net totals for a filter
    Summary {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Export records
    #[command(subcommand)]
    Export(tally::cli::ExportCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Initialize the ledger with default categories and methods
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Record(cmd)) => {
            handle_record_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, cmd)?;
        }
        Some(Commands::Method(cmd)) => {
            handle_method_command(&storage, cmd)?;
        }
        Some(Commands::Summary { filters }) => {
            handle_summary_command(&storage, &settings, filters)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Audit { limit }) => {
            handle_audit_command(&storage, limit)?;
        }
        Some(Commands::Init) => {
            println!("Initializing tally at: {}", paths.base_dir().display());
            tally::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Default categories: Food, Travel, Shopping, Other");
            println!("Default payment methods: Cash, Bank Transfer");
            println!();
            println!("Run 'tally record add' to enter your first record.");
        }
        Some(Commands::Config) => {
            println!("tally Configuration");
            println!("===================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Page size:       {}", settings.page_size);
        }
        None => {
            println!("tally - terminal income and expense ledger");
            println!();
            println!("Run 'tally --help' for usage information.");
            println!("Run 'tally init' to set up a fresh ledger.");
        }
    }

    Ok(())
}
