//! Range filter for transaction collections
//!
//! Applies inclusive date-range and value-range bounds (plus optional kind
//! and category restrictions) to a snapshot. Unset bounds impose no
//! constraint; a transaction qualifies only if it passes every bound that
//! is set.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{CategoryName, Money, Transaction, TransactionKind, YearMonth};

/// Inclusive date bounds; either end may be open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    fn contains(&self, date: Option<NaiveDate>) -> bool {
        if self.start.is_none() && self.end.is_none() {
            return true;
        }
        // A record without a usable date cannot satisfy a date bound
        let Some(date) = date else {
            return false;
        };
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

/// Inclusive amount bounds; either end may be open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ValueRange {
    pub min: Option<Money>,
    pub max: Option<Money>,
}

impl ValueRange {
    fn contains(&self, amount: Money) -> bool {
        self.min.map_or(true, |min| amount >= min) && self.max.map_or(true, |max| amount <= max)
    }
}

/// Filter applied to a transaction snapshot before aggregation or export
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransactionFilter {
    pub dates: DateRange,
    pub values: ValueRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryName>,
}

impl TransactionFilter {
    /// A filter that lets everything through
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to an inclusive date range
    ///
    /// Fails when both bounds are given and the start is after the end.
    pub fn between_dates(
        mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> FintrackResult<Self> {
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(FintrackError::Validation(format!(
                    "Start date {} is after end date {}",
                    start, end
                )));
            }
        }
        self.dates = DateRange { start, end };
        Ok(self)
    }

    /// Restrict to a single calendar month
    pub fn within_month(mut self, month: YearMonth) -> Self {
        self.dates = DateRange {
            start: Some(month.start_date()),
            end: Some(month.end_date()),
        };
        self
    }

    /// Restrict to an inclusive amount range
    ///
    /// Fails on negative bounds or when the minimum exceeds the maximum.
    pub fn between_values(mut self, min: Option<Money>, max: Option<Money>) -> FintrackResult<Self> {
        for bound in [min, max].into_iter().flatten() {
            if bound.is_negative() {
                return Err(FintrackError::Validation(format!(
                    "Value bounds must not be negative (got {})",
                    bound
                )));
            }
        }
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(FintrackError::Validation(format!(
                    "Minimum value {} is greater than maximum value {}",
                    min, max
                )));
            }
        }
        self.values = ValueRange { min, max };
        Ok(self)
    }

    /// Keep only income or only expense records
    pub fn of_kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Keep only one category (case-insensitive)
    pub fn in_category(mut self, category: impl Into<CategoryName>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Whether a single transaction passes every configured bound
    pub fn matches(&self, txn: &Transaction) -> bool {
        self.kind.map_or(true, |kind| txn.kind == kind)
            && self
                .category
                .as_ref()
                .map_or(true, |category| &txn.category_key() == category)
            && self.dates.contains(txn.date)
            && self.values.contains(txn.amount)
    }

    /// Select the matching subset, preserving input order
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        let selected: Vec<&Transaction> = transactions.iter().filter(|t| self.matches(t)).collect();
        debug!(
            input = transactions.len(),
            selected = selected.len(),
            "applied transaction filter"
        );
        selected
    }

    /// True when no bound of any kind is set
    pub fn is_unbounded(&self) -> bool {
        self == &Self::default()
    }
}
