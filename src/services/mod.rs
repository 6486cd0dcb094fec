//! Service layer for fintrack
//!
//! Filtering of transaction snapshots and guarded budget target mutations.

pub mod filter;
pub mod target;

pub use filter::{DateRange, TransactionFilter, ValueRange};
pub use target::{ensure_unique_target, target_exists, TargetService};
