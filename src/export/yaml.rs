//! YAML Export functionality
//!
//! Same content as the JSON export, for reading by humans.

use std::io::Write;

use crate::error::{FintrackError, FintrackResult};
use crate::export::json::ReportExport;

/// Write the export as YAML with a short comment header
pub fn export_report_yaml<W: Write>(export: &ReportExport<'_>, writer: &mut W) -> FintrackResult<()> {
    writeln!(writer, "# fintrack report export")
        .map_err(|e| FintrackError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| FintrackError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| FintrackError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FintrackError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| FintrackError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction};
    use crate::services::TransactionFilter;
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_export() {
        let txns = vec![Transaction::income(
            NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            "Salário",
            Money::from_units(5000),
        )];
        let selected: Vec<&Transaction> = txns.iter().collect();
        let export = ReportExport::new(&TransactionFilter::new(), &selected);

        let mut buf = Vec::new();
        export_report_yaml(&export, &mut buf).unwrap();
        let yaml = String::from_utf8(buf).unwrap();

        assert!(yaml.starts_with("# fintrack report export"));
        assert!(yaml.contains("category: Salário"));

        let body: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(body["schema_version"].as_str(), Some("1.0.0"));
        assert_eq!(body["metadata"]["transaction_count"].as_u64(), Some(1));
    }
}
