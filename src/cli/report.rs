//! CLI commands for reports
//!
//! Category and monthly reports, the two chart views and the monthly
//! dashboard summary.

use clap::Subcommand;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use super::{parse_period, FilterArgs};
use crate::config::settings::Settings;
use crate::display::format_series_chart;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{ChartSeries, Transaction, TransactionKind};
use crate::reports::{
    bar_series, pie_series, CategoryOrder, CategoryTotals, DashboardSummary, MonthLabel,
    MonthlyTotals,
};
use crate::services::TransactionFilter;
use crate::storage::{Storage, TransactionSource};

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Totals per category (expenses unless --kind says otherwise)
    Categories {
        #[command(flatten)]
        filter: FilterArgs,

        /// first-seen, alphabetical or largest-first
        #[arg(long)]
        order: Option<CategoryOrder>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Totals per calendar month, oldest first
    Monthly {
        #[command(flatten)]
        filter: FilterArgs,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Category distribution chart
    Pie {
        #[command(flatten)]
        filter: FilterArgs,

        /// first-seen, alphabetical or largest-first
        #[arg(long)]
        order: Option<CategoryOrder>,

        /// Print the series as JSON instead of drawing it
        #[arg(long)]
        json: bool,
    },

    /// Monthly totals chart
    Bars {
        #[command(flatten)]
        filter: FilterArgs,

        /// key (YYYY-MM) or short (Jan 2025)
        #[arg(short, long)]
        label: Option<MonthLabel>,

        /// Print the series as JSON instead of drawing it
        #[arg(long)]
        json: bool,
    },
}

fn select(storage: &Storage, args: &FilterArgs) -> FintrackResult<(Vec<Transaction>, TransactionFilter)> {
    let transactions = storage.transactions.list()?;
    let filter = args.build(Some(TransactionKind::Expense))?;
    Ok((transactions, filter))
}

fn write_csv_file<F>(path: &Path, write: F) -> FintrackResult<()>
where
    F: FnOnce(BufWriter<File>) -> FintrackResult<()>,
{
    let file = File::create(path)
        .map_err(|e| FintrackError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    write(BufWriter::new(file))?;
    println!("Report exported to: {}", path.display());
    Ok(())
}

fn print_series(series: &ChartSeries, show_share: bool, json: bool) -> FintrackResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(series)?);
    } else {
        print!("{}", format_series_chart(series, 40, show_share));
    }
    Ok(())
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> FintrackResult<()> {
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Categories {
            filter,
            order,
            output,
        } => {
            let (transactions, filter) = select(storage, &filter)?;
            let report = CategoryTotals::aggregate(filter.apply(&transactions));
            let order = order.unwrap_or(settings.category_order);

            match output {
                Some(path) => write_csv_file(&path, |w| report.export_csv(w, order))?,
                None => print!("{}", report.format_terminal("Category Report", order, currency)),
            }
        }

        ReportCommands::Monthly { filter, output } => {
            let (transactions, filter) = select(storage, &filter)?;
            let report = MonthlyTotals::aggregate(filter.apply(&transactions));

            match output {
                Some(path) => write_csv_file(&path, |w| report.export_csv(w))?,
                None => print!("{}", report.format_terminal("Monthly Report", currency)),
            }
        }

        ReportCommands::Pie {
            filter,
            order,
            json,
        } => {
            let (transactions, filter) = select(storage, &filter)?;
            let totals = CategoryTotals::aggregate(filter.apply(&transactions));
            let series = pie_series(&totals, order.unwrap_or(settings.category_order));
            print_series(&series, true, json)?;
        }

        ReportCommands::Bars {
            filter,
            label,
            json,
        } => {
            let (transactions, filter) = select(storage, &filter)?;
            let totals = MonthlyTotals::aggregate(filter.apply(&transactions));
            let series = bar_series(&totals, label.unwrap_or(settings.month_label));
            print_series(&series, false, json)?;
        }
    }

    Ok(())
}

/// Print the dashboard for one month (current month by default)
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<&str>,
) -> FintrackResult<()> {
    let month = parse_period(month)?;
    let transactions = storage.transactions.list()?;
    let summary = DashboardSummary::generate(&transactions, month);
    print!("{}", summary.format_terminal(&settings.currency_symbol));
    Ok(())
}
