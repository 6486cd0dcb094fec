//! Configuration module for fintrack
//!
//! Path resolution for the data directory and persisted user settings.

pub mod paths;
pub mod settings;

pub use paths::FintrackPaths;
pub use settings::Settings;
