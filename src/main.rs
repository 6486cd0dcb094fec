use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use fintrack::cli::{
    handle_config_command, handle_export_command, handle_report_command,
    handle_summary_command, handle_target_command, handle_transaction_command, ConfigCommands,
    ExportArgs, ReportCommands, TargetCommands, TransactionCommands,
};
use fintrack::config::{paths::FintrackPaths, settings::Settings};
use fintrack::logging::init_tracing;
use fintrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance reports and budget checks",
    long_about = "fintrack keeps a ledger of income and expenses, summarizes it by \
                  category and by month, and warns when a monthly budget target \
                  for a category has been exceeded."
)]
struct Cli {
    /// Use this directory instead of the default data location
    #[arg(long, global = true, env = "FINTRACK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Category and monthly reports and charts
    #[command(subcommand)]
    Report(ReportCommands),

    /// Dashboard for one month
    Summary {
        /// Month to summarize (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Budget target management
    #[command(subcommand)]
    Target(TargetCommands),

    /// Transaction management
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Export a filtered selection as CSV, JSON or YAML
    Export(ExportArgs),

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => FintrackPaths::with_base_dir(dir),
        None => FintrackPaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;
    init_tracing(settings.log_filter.as_deref());

    let storage = Storage::new(&paths)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Report(cmd)) => handle_report_command(&storage, &settings, cmd)?,
        Some(Commands::Summary { month }) => {
            handle_summary_command(&storage, &settings, month.as_deref())?
        }
        Some(Commands::Target(cmd)) => handle_target_command(&storage, &settings, cmd)?,
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?
        }
        Some(Commands::Export(args)) => handle_export_command(&storage, args)?,
        Some(Commands::Config { command }) => {
            handle_config_command(&paths, &mut settings, command)?
        }
        None => handle_summary_command(&storage, &settings, None)?,
    }

    Ok(())
}
