//! CSV Export functionality
//!
//! One row per selected transaction, in the order given.

use std::io::Write;

use crate::error::{FintrackError, FintrackResult};
use crate::models::Transaction;

const HEADER: [&str; 7] = ["ID", "Date", "Kind", "Category", "Amount", "Counterparty", "Notes"];

/// Export a transaction selection to CSV
pub fn export_transactions_csv<W: Write>(
    transactions: &[&Transaction],
    writer: W,
) -> FintrackResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)
        .map_err(|e| FintrackError::Export(e.to_string()))?;

    for txn in transactions {
        wtr.write_record([
            txn.id.to_string(),
            txn.date.map(|d| d.to_string()).unwrap_or_default(),
            txn.kind.to_string(),
            txn.category_key().to_string(),
            txn.amount.to_string(),
            txn.counterparty.clone(),
            txn.notes.clone(),
        ])
        .map_err(|e| FintrackError::Export(e.to_string()))?;
    }

    wtr.flush()
        .map_err(|e| FintrackError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionId};
    use chrono::NaiveDate;

    #[test]
    fn test_export_transactions_csv() {
        let mut txn = Transaction::expense(
            NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
            "Alimentação",
            Money::from_cents(30050),
        )
        .with_counterparty("Mercado, Centro")
        .with_notes("weekly");
        txn.id = TransactionId::from("t-1");

        let mut buf = Vec::new();
        export_transactions_csv(&[&txn], &mut buf).unwrap();

        let csv = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "ID,Date,Kind,Category,Amount,Counterparty,Notes");
        assert_eq!(
            lines[1],
            "t-1,2025-03-04,Expense,Alimentação,300.50,\"Mercado, Centro\",weekly"
        );
    }

    #[test]
    fn test_undated_row_has_blank_date() {
        let mut txn = Transaction::expense(
            NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
            "Lazer",
            Money::from_units(1),
        );
        txn.date = None;

        let mut buf = Vec::new();
        export_transactions_csv(&[&txn], &mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();
        assert!(csv.lines().nth(1).unwrap().contains(",,Expense,"));
    }
}
