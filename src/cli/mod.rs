//! CLI command handlers
//!
//! This module bridges clap argument parsing with the reports and services.
//! Handlers load what they need from [`Storage`](crate::storage::Storage),
//! run the engine and print the result.

pub mod config;
pub mod export;
pub mod report;
pub mod target;
pub mod transaction;

pub use config::{handle_config_command, ConfigCommands};
pub use export::{handle_export_command, ExportArgs};
pub use report::{handle_report_command, handle_summary_command, ReportCommands};
pub use target::{handle_target_command, TargetCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;
use clap::Args;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Money, TransactionKind, YearMonth};
use crate::services::TransactionFilter;

/// Range and selection options shared by reports, listing and export
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// First date to include (YYYY-MM-DD)
    #[arg(short, long)]
    pub start: Option<String>,

    /// Last date to include (YYYY-MM-DD)
    #[arg(short, long)]
    pub end: Option<String>,

    /// Restrict to one month (YYYY-MM or "current"); overrides start/end
    #[arg(short, long)]
    pub month: Option<String>,

    /// Smallest amount to include
    #[arg(long)]
    pub min: Option<String>,

    /// Largest amount to include
    #[arg(long)]
    pub max: Option<String>,

    /// income, expense or all
    #[arg(short, long)]
    pub kind: Option<String>,

    /// Only this category (case-insensitive)
    #[arg(short, long)]
    pub category: Option<String>,
}

impl FilterArgs {
    /// Build the filter; `default_kind` applies when `--kind` is not given
    pub fn build(&self, default_kind: Option<TransactionKind>) -> FintrackResult<TransactionFilter> {
        let mut filter = match &self.month {
            Some(month) => TransactionFilter::new().within_month(parse_period(Some(month))?),
            None => TransactionFilter::new().between_dates(
                self.start.as_deref().map(parse_date).transpose()?,
                self.end.as_deref().map(parse_date).transpose()?,
            )?,
        };

        filter = filter.between_values(
            self.min.as_deref().map(parse_money).transpose()?,
            self.max.as_deref().map(parse_money).transpose()?,
        )?;

        let kind = match self.kind.as_deref() {
            Some(raw) => parse_kind_filter(raw)?,
            None => default_kind,
        };
        if let Some(kind) = kind {
            filter = filter.of_kind(kind);
        }

        if let Some(category) = &self.category {
            filter = filter.in_category(category.as_str());
        }

        Ok(filter)
    }
}

/// "all" means no kind restriction
fn parse_kind_filter(raw: &str) -> FintrackResult<Option<TransactionKind>> {
    if raw.trim().eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    TransactionKind::parse(raw).map(Some).ok_or_else(|| {
        FintrackError::Validation(format!(
            "Invalid kind: '{}'. Use income, expense or all",
            raw
        ))
    })
}

pub(crate) fn parse_date(raw: &str) -> FintrackResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        FintrackError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", raw))
    })
}

pub(crate) fn parse_money(raw: &str) -> FintrackResult<Money> {
    Money::parse(raw).map_err(|e| FintrackError::Validation(format!("Invalid amount: {}", e)))
}

/// Parse `YYYY-MM`; `None` or "current" means the current month
pub(crate) fn parse_period(raw: Option<&str>) -> FintrackResult<YearMonth> {
    match raw.map(str::trim) {
        None | Some("current") => Ok(YearMonth::current()),
        Some(text) => YearMonth::parse(text)
            .map_err(|e| FintrackError::Validation(format!("Invalid period: {}", e))),
    }
}
