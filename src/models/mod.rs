//! Core data models for fintrack
//!
//! Transactions, budget targets, the `YearMonth` period key, money amounts
//! and the chart series produced by the reports.

pub mod category;
pub mod ids;
pub mod money;
pub mod month;
pub mod series;
pub mod target;
pub mod transaction;

pub use category::{canonicalize, CategoryName, UNCATEGORIZED};
pub use ids::{BudgetTargetId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use month::{PeriodParseError, YearMonth};
pub use series::{ChartSeries, SeriesPoint};
pub use target::{BudgetTarget, TargetValidationError};
pub use transaction::{Transaction, TransactionKind, TransactionValidationError};
