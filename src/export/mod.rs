//! Export module for fintrack
//!
//! Writes a filtered selection in one of three formats:
//! - CSV: one row per transaction (spreadsheet-compatible)
//! - JSON: selection plus category and monthly aggregates
//! - YAML: the same content as JSON, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use json::{export_report_json, ExportMetadata, ReportExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_report_yaml;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::FintrackResult;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Guess the format from a file extension
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!(
                "Unknown export format '{}' (expected csv, json or yaml)",
                other
            )),
        }
    }
}

/// Write `export` in the requested format
pub fn write_export<W: Write>(
    format: ExportFormat,
    export: &ReportExport<'_>,
    writer: &mut W,
) -> FintrackResult<()> {
    match format {
        ExportFormat::Csv => export_transactions_csv(&export.transactions, writer),
        ExportFormat::Json => export_report_json(export, writer),
        ExportFormat::Yaml => export_report_yaml(export, writer),
    }
}
