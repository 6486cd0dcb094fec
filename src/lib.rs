//! fintrack - personal finance aggregation and budget checks
//!
//! This library turns a ledger of income and expense transactions into
//! chart-ready summaries and checks monthly budget targets against what
//! was actually spent.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Transactions, budget targets, money and month keys
//! - `services`: Range filtering and guarded budget target mutations
//! - `reports`: Category/monthly aggregation, budget evaluation, chart series
//! - `storage`: Source/store traits and their JSON file implementations
//! - `export`: CSV, JSON and YAML export of filtered selections
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `fintrack` binary
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::reports::{pie_series, CategoryOrder, CategoryTotals};
//! use fintrack::services::TransactionFilter;
//!
//! let selected = TransactionFilter::new().within_month(month).apply(&transactions);
//! let series = pie_series(&CategoryTotals::aggregate(selected), CategoryOrder::LargestFirst);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FintrackError, FintrackResult};
