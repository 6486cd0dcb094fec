//! User settings for fintrack
//!
//! Display preferences (currency symbol, date format, report ordering and
//! month labels) plus an optional log filter.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::FintrackPaths;
use crate::error::FintrackError;
use crate::reports::{CategoryOrder, MonthLabel};

/// User settings for fintrack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Prefix used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Default order for category reports and pie slices
    #[serde(default)]
    pub category_order: CategoryOrder,

    /// Default label style for monthly bar charts
    #[serde(default)]
    pub month_label: MonthLabel,

    /// Log filter directive used when `RUST_LOG` is not set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

/// Reject strftime patterns chrono cannot render
fn check_date_format(format: &str) -> Result<(), FintrackError> {
    if format.trim().is_empty() {
        return Err(FintrackError::Config("Date format cannot be empty".into()));
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(FintrackError::Config(format!(
            "Invalid date format '{}'",
            format
        )));
    }
    Ok(())
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            category_order: CategoryOrder::default(),
            month_label: MonthLabel::default(),
            log_filter: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &FintrackPaths) -> Result<Self, FintrackError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FintrackError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FintrackError::Config(format!("Failed to parse settings file: {}", e))
            })?;
            check_date_format(&settings.date_format)?;

            Ok(settings)
        } else {
            // Not persisted until the caller saves
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FintrackPaths) -> Result<(), FintrackError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FintrackError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            FintrackError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Update one setting by its key
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), FintrackError> {
        match key {
            "currency_symbol" | "currency" => self.currency_symbol = value.to_string(),
            "date_format" => {
                check_date_format(value)?;
                self.date_format = value.to_string();
            }
            "category_order" => {
                self.category_order = value.parse().map_err(FintrackError::Config)?;
            }
            "month_label" => {
                self.month_label = value.parse().map_err(FintrackError::Config)?;
            }
            "log_filter" => {
                self.log_filter = if value.trim().is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            other => {
                return Err(FintrackError::Config(format!(
                    "Unknown setting '{}' (expected currency_symbol, date_format, category_order, month_label or log_filter)",
                    other
                )))
            }
        }
        Ok(())
    }
}
