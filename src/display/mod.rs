//! Display formatting for terminal output
//!
//! Text helpers, chart rendering and the tables used by the CLI.

pub mod report;
pub mod target;
pub mod transaction;

pub use report::format_series_chart;
pub use target::{format_target_table, format_warning_table};
pub use transaction::format_transaction_register;
