//! Category Report
//!
//! Groups a transaction selection by canonical category and totals each
//! group. Categories without transactions never appear.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use tracing::debug;

use crate::display::report::{format_bar, format_percentage, separator, truncate};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{CategoryName, Money, Transaction};

/// Presentation order for category entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryOrder {
    /// Order in which each category first appeared in the input
    #[default]
    FirstSeen,
    Alphabetical,
    LargestFirst,
}

impl fmt::Display for CategoryOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstSeen => write!(f, "first-seen"),
            Self::Alphabetical => write!(f, "alphabetical"),
            Self::LargestFirst => write!(f, "largest-first"),
        }
    }
}

impl FromStr for CategoryOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first-seen" | "first" | "input" => Ok(Self::FirstSeen),
            "alphabetical" | "alpha" | "name" => Ok(Self::Alphabetical),
            "largest-first" | "largest" | "amount" => Ok(Self::LargestFirst),
            other => Err(format!(
                "Unknown category order '{}' (expected first-seen, alphabetical or largest-first)",
                other
            )),
        }
    }
}

/// Total for a single category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: CategoryName,
    pub total: Money,
    pub transaction_count: usize,
    /// Share of the aggregate total, 0.0 when the aggregate is zero
    pub percentage: f64,
}

/// Per-category totals over a transaction selection
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryTotals {
    entries: Vec<CategoryTotal>,
    total: Money,
}

impl CategoryTotals {
    /// Aggregate transactions by category
    ///
    /// Blank categories are grouped under "Uncategorized". Entries are kept
    /// in first-appearance order.
    pub fn aggregate<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut entries: Vec<CategoryTotal> = Vec::new();
        let mut total = Money::zero();

        for txn in transactions {
            let category = txn.category_key();
            match entries.iter_mut().find(|e| e.category == category) {
                Some(entry) => {
                    entry.total += txn.amount;
                    entry.transaction_count += 1;
                }
                None => entries.push(CategoryTotal {
                    category,
                    total: txn.amount,
                    transaction_count: 1,
                    percentage: 0.0,
                }),
            }
            total += txn.amount;
        }

        for entry in &mut entries {
            entry.percentage = entry.total.percentage_of(total);
        }

        debug!(categories = entries.len(), %total, "aggregated category totals");
        Self { entries, total }
    }

    /// Entries in first-appearance order
    pub fn entries(&self) -> &[CategoryTotal] {
        &self.entries
    }

    /// Entries in the requested order
    ///
    /// Ties under `LargestFirst` keep their first-appearance order.
    pub fn ordered(&self, order: CategoryOrder) -> Vec<&CategoryTotal> {
        let mut entries: Vec<&CategoryTotal> = self.entries.iter().collect();
        match order {
            CategoryOrder::FirstSeen => {}
            CategoryOrder::Alphabetical => entries.sort_by(|a, b| a.category.cmp(&b.category)),
            CategoryOrder::LargestFirst => entries.sort_by(|a, b| b.total.cmp(&a.total)),
        }
        entries
    }

    pub fn get(&self, category: &CategoryName) -> Option<&CategoryTotal> {
        self.entries.iter().find(|e| &e.category == category)
    }

    /// Share of `category` in percent; 0.0 for unknown categories or a zero total
    pub fn percentage(&self, category: &CategoryName) -> f64 {
        self.get(category).map_or(0.0, |e| e.percentage)
    }

    /// Sum of every entry
    pub fn total(&self) -> Money {
        self.total
    }

    pub fn transaction_count(&self) -> usize {
        self.entries.iter().map(|e| e.transaction_count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, title: &str, order: CategoryOrder, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(title);
        output.push('\n');
        output.push_str(&"=".repeat(72));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No transactions in range.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<24} {:>14} {:>6} {:>7}  {}\n",
            "Category", "Amount", "Count", "%", "Share"
        ));
        output.push_str(&separator(72));
        output.push('\n');

        for entry in self.ordered(order) {
            output.push_str(&format!(
                "{:<24} {:>14} {:>6} {:>7}  {}\n",
                truncate(entry.category.as_str(), 24),
                entry.total.format_with_symbol(currency),
                entry.transaction_count,
                format_percentage(entry.percentage),
                format_bar(entry.percentage, 100.0, 16)
            ));
        }

        output.push_str(&separator(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<24} {:>14} {:>6}\n",
            "TOTAL",
            self.total.format_with_symbol(currency),
            self.transaction_count()
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W, order: CategoryOrder) -> FintrackResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(["Category", "Amount", "Transaction Count", "Percentage"])
            .map_err(|e| FintrackError::Export(e.to_string()))?;

        for entry in self.ordered(order) {
            wtr.write_record([
                entry.category.to_string(),
                entry.total.to_string(),
                entry.transaction_count.to_string(),
                format!("{:.2}", entry.percentage),
            ])
            .map_err(|e| FintrackError::Export(e.to_string()))?;
        }

        wtr.flush()
            .map_err(|e| FintrackError::Export(e.to_string()))?;
        Ok(())
    }
}
