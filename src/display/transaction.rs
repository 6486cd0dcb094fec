//! Transaction display formatting

use crate::display::report::truncate;
use crate::models::Transaction;

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction, date_format: &str, currency: &str) -> String {
    let date = txn
        .date
        .map(|d| d.format(date_format).to_string())
        .unwrap_or_else(|| "(no date)".to_string());
    let sign = if txn.is_income() { "+" } else { "-" };

    format!(
        "{:<12} {:<20} {:<20} {}{:>13}",
        date,
        truncate(txn.category_key().as_str(), 20),
        truncate(&txn.counterparty, 20),
        sign,
        txn.amount.format_with_symbol(currency)
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(
    transactions: &[&Transaction],
    date_format: &str,
    currency: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:<20} {:<20} {:>14}\n",
        "Date", "Category", "Counterparty", "Amount"
    ));
    output.push_str(&"-".repeat(69));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, date_format, currency));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_row_shows_sign_and_category() {
        let txn = Transaction::income(
            NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            "Salário",
            Money::from_units(5000),
        )
        .with_counterparty("ACME");

        let row = format_transaction_row(&txn, "%d/%m/%Y", "$");
        assert!(row.starts_with("05/01/2025"));
        assert!(row.contains("Salário"));
        assert!(row.contains("ACME"));
        assert!(row.contains("+"));
        assert!(row.ends_with("$5000.00"));
    }

    #[test]
    fn test_empty_register() {
        assert_eq!(
            format_transaction_register(&[], "%Y-%m-%d", "$"),
            "No transactions found.\n"
        );
    }
}
