//! Reports module for fintrack
//!
//! Category and monthly aggregation, budget target evaluation, chart series
//! and the monthly dashboard summary. Every report is computed from a
//! borrowed snapshot and returned fresh.

pub mod budget_check;
pub mod category;
pub mod dashboard;
pub mod monthly;
pub mod series;

pub use budget_check::{assess_targets, evaluate, BudgetWarning, TargetProgress};
pub use category::{CategoryOrder, CategoryTotal, CategoryTotals};
pub use dashboard::{CategoryHighlight, DashboardSummary};
pub use monthly::{MonthTotal, MonthlyTotals};
pub use series::{bar_series, pie_series, MonthLabel};
