//! Transaction model
//!
//! Income and expense entries share one shape and differ only in their
//! `kind`. Records are loaded wholesale from a snapshot, so deserialization
//! is lenient: a missing or unreadable date becomes `None` and a missing,
//! null or non-numeric amount becomes zero instead of failing the whole load.
//! Amounts are decimal currency units, as numbers or strings.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use tracing::warn;

use super::category::CategoryName;
use super::ids::TransactionId;
use super::money::Money;
use super::month::YearMonth;

/// Whether a transaction is money coming in or going out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

impl TransactionKind {
    /// Parse "income"/"expense" (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Some(Self::Income),
            "expense" | "out" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A single income or expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Identifier assigned by the backing store
    #[serde(default)]
    pub id: TransactionId,

    #[serde(default)]
    pub kind: TransactionKind,

    /// Calendar date; `None` when the source value was missing or unreadable
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,

    #[serde(default)]
    pub category: CategoryName,

    /// Non-negative amount; the sign is carried by `kind`
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: Money,

    /// Payer (income) or payee (expense)
    #[serde(default)]
    pub counterparty: String,

    #[serde(default)]
    pub notes: String,
}

impl Transaction {
    /// Create a new transaction with a fresh ID
    pub fn new(
        kind: TransactionKind,
        date: NaiveDate,
        category: impl Into<CategoryName>,
        amount: Money,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            date: Some(date),
            category: category.into(),
            amount,
            counterparty: String::new(),
            notes: String::new(),
        }
    }

    pub fn expense(date: NaiveDate, category: impl Into<CategoryName>, amount: Money) -> Self {
        Self::new(TransactionKind::Expense, date, category, amount)
    }

    pub fn income(date: NaiveDate, category: impl Into<CategoryName>, amount: Money) -> Self {
        Self::new(TransactionKind::Income, date, category, amount)
    }

    /// Set the counterparty label (builder style)
    pub fn with_counterparty(mut self, counterparty: impl Into<String>) -> Self {
        self.counterparty = counterparty.into();
        self
    }

    /// Set the notes (builder style)
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// The calendar month of this transaction, if it has a usable date
    pub fn month(&self) -> Option<YearMonth> {
        self.date.map(YearMonth::from_date)
    }

    /// Category used for grouping; blank labels fall back to "Uncategorized"
    pub fn category_key(&self) -> CategoryName {
        if self.category.is_empty() {
            CategoryName::uncategorized()
        } else {
            self.category.clone()
        }
    }

    /// Validate the transaction before it is handed to the store
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }

        if self.category.is_empty() {
            return Err(TransactionValidationError::EmptyCategory);
        }

        if self.date.is_none() {
            return Err(TransactionValidationError::MissingDate);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "????-??-??".to_string());
        write!(f, "{} {} {} {}", date, self.kind, self.category, self.amount)
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
    EmptyCategory,
    MissingDate,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Transaction amount must not be negative (got {})", amount)
            }
            Self::EmptyCategory => write!(f, "Transaction category cannot be empty"),
            Self::MissingDate => write!(f, "Transaction date is required"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

/// Any JSON/YAML value; only strings are considered as dates
#[derive(Deserialize)]
#[serde(untagged)]
#[allow(dead_code)]
enum RawValue<T> {
    Value(T),
    Other(serde::de::IgnoredAny),
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawValue<String>> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawValue::Value(text)) => parse_date_prefix(&text),
        _ => None,
    })
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<Money, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawValue<Money>> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawValue::Value(amount)) => amount,
        Some(RawValue::Other(_)) => {
            warn!("unreadable transaction amount, using zero");
            Money::zero()
        }
        None => Money::zero(),
    })
}

/// Parse `YYYY-MM-DD`, also accepting a trailing time component
fn parse_date_prefix(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    let day_part = text.get(..10).unwrap_or(text);
    NaiveDate::parse_from_str(day_part, "%Y-%m-%d").ok()
}
