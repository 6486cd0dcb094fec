//! JSON Export functionality
//!
//! Exports an already filtered selection of transactions together with its
//! category and monthly aggregates. Nothing here filters again.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Money, Transaction};
use crate::reports::{CategoryTotals, MonthlyTotals};
use crate::services::TransactionFilter;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Report export structure
#[derive(Debug, Clone, Serialize)]
pub struct ReportExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Bounds the selection was produced with
    pub filter: TransactionFilter,

    pub transactions: Vec<&'a Transaction>,

    pub categories: CategoryTotals,

    pub months: MonthlyTotals,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub total_amount: Money,
    pub earliest_transaction: Option<String>,
    pub latest_transaction: Option<String>,
}

impl<'a> ReportExport<'a> {
    /// Package a filtered selection for export
    pub fn new(filter: &TransactionFilter, transactions: &[&'a Transaction]) -> Self {
        let earliest_transaction = transactions
            .iter()
            .filter_map(|t| t.date)
            .min()
            .map(|d| d.to_string());

        let latest_transaction = transactions
            .iter()
            .filter_map(|t| t.date)
            .max()
            .map(|d| d.to_string());

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            total_amount: transactions.iter().map(|t| t.amount).sum(),
            earliest_transaction,
            latest_transaction,
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            filter: filter.clone(),
            transactions: transactions.to_vec(),
            categories: CategoryTotals::aggregate(transactions.iter().copied()),
            months: MonthlyTotals::aggregate(transactions.iter().copied()),
            metadata,
        }
    }
}

/// Write the export as pretty-printed JSON
pub fn export_report_json<W: Write>(export: &ReportExport<'_>, writer: &mut W) -> FintrackResult<()> {
    serde_json::to_writer_pretty(&mut *writer, export)
        .map_err(|e| FintrackError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FintrackError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_export_contains_selection_and_aggregates() {
        let txns = vec![
            Transaction::expense(date(2025, 1, 3), "Lazer", Money::from_units(10)),
            Transaction::expense(date(2025, 2, 3), "Moradia", Money::from_units(90)),
            Transaction::expense(date(2025, 3, 3), "Lazer", Money::from_units(1000)),
        ];
        let filter = TransactionFilter::new()
            .between_values(None, Some(Money::from_units(100)))
            .unwrap();
        let selected = filter.apply(&txns);

        let export = ReportExport::new(&filter, &selected);
        assert_eq!(export.metadata.transaction_count, 2);
        assert_eq!(export.metadata.total_amount, Money::from_units(100));
        assert_eq!(export.metadata.earliest_transaction.as_deref(), Some("2025-01-03"));
        assert_eq!(export.metadata.latest_transaction.as_deref(), Some("2025-02-03"));

        let mut buf = Vec::new();
        export_report_json(&export, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["transactions"].as_array().unwrap().len(), 2);
        assert_eq!(value["transactions"][0]["amount"], 10.0);
        assert_eq!(value["filter"]["values"]["max"], 100.0);
        assert!(value["months"]["months"].get("2025-02").is_some());
    }

    #[test]
    fn test_empty_selection() {
        let export = ReportExport::new(&TransactionFilter::new(), &[]);
        assert_eq!(export.metadata.transaction_count, 0);
        assert!(export.metadata.earliest_transaction.is_none());
        assert!(export.categories.is_empty());
    }
}
