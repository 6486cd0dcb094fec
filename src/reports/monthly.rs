//! Monthly Report
//!
//! Totals a transaction selection per calendar month. Months are keyed by
//! the numeric `YearMonth` of each transaction's own date, so iteration is
//! always chronological and never depends on month names.

use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use tracing::{debug, warn};

use crate::display::report::{format_bar, separator};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Money, Transaction, YearMonth};

/// Total for one month
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MonthTotal {
    pub total: Money,
    pub transaction_count: usize,
}

/// Per-month totals in chronological order
///
/// Sparse: months without transactions are absent rather than zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MonthlyTotals {
    months: BTreeMap<YearMonth, MonthTotal>,
    skipped: usize,
}

impl MonthlyTotals {
    /// Aggregate transactions by the month of their date
    ///
    /// Records without a usable date are skipped and counted.
    pub fn aggregate<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut months: BTreeMap<YearMonth, MonthTotal> = BTreeMap::new();
        let mut skipped = 0;

        for txn in transactions {
            let Some(month) = txn.month() else {
                skipped += 1;
                continue;
            };
            let entry = months.entry(month).or_default();
            entry.total += txn.amount;
            entry.transaction_count += 1;
        }

        if skipped > 0 {
            warn!(skipped, "skipped transactions without a usable date");
        }
        debug!(months = months.len(), "aggregated monthly totals");
        Self { months, skipped }
    }

    /// Iterate months oldest first
    pub fn iter(&self) -> impl Iterator<Item = (YearMonth, &MonthTotal)> {
        self.months.iter().map(|(month, total)| (*month, total))
    }

    pub fn months(&self) -> Vec<YearMonth> {
        self.months.keys().copied().collect()
    }

    pub fn get(&self, month: YearMonth) -> Option<&MonthTotal> {
        self.months.get(&month)
    }

    /// Total for `month`, zero when the month has no transactions
    pub fn total_for(&self, month: YearMonth) -> Money {
        self.months.get(&month).map_or(Money::zero(), |m| m.total)
    }

    /// Sum across every month
    pub fn total(&self) -> Money {
        self.months.values().map(|m| m.total).sum()
    }

    /// Number of input records that had no usable date
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, title: &str, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(title);
        output.push('\n');
        output.push_str(&"=".repeat(64));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No dated transactions in range.\n");
            return output;
        }

        let max = self
            .months
            .values()
            .map(|m| m.total.as_decimal())
            .fold(0.0, f64::max);

        output.push_str(&format!(
            "{:<10} {:>14} {:>6}  {}\n",
            "Month", "Amount", "Count", "Trend"
        ));
        output.push_str(&separator(64));
        output.push('\n');

        for (month, entry) in self.iter() {
            output.push_str(&format!(
                "{:<10} {:>14} {:>6}  {}\n",
                month.to_string(),
                entry.total.format_with_symbol(currency),
                entry.transaction_count,
                format_bar(entry.total.as_decimal(), max, 24)
            ));
        }

        output.push_str(&separator(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<10} {:>14}\n",
            "TOTAL",
            self.total().format_with_symbol(currency)
        ));

        if self.skipped > 0 {
            output.push_str(&format!(
                "\n{} transaction(s) without a valid date were skipped.\n",
                self.skipped
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> FintrackResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(["Month", "Amount", "Transaction Count"])
            .map_err(|e| FintrackError::Export(e.to_string()))?;

        for (month, entry) in self.iter() {
            wtr.write_record([
                month.to_string(),
                entry.total.to_string(),
                entry.transaction_count.to_string(),
            ])
            .map_err(|e| FintrackError::Export(e.to_string()))?;
        }

        wtr.flush()
            .map_err(|e| FintrackError::Export(e.to_string()))?;
        Ok(())
    }
}
