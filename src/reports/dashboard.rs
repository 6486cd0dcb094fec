//! Monthly dashboard summary
//!
//! Income, expense and balance for one month together with the largest
//! single movements and the leading category on each side.

use serde::Serialize;

use super::category::{CategoryTotal, CategoryTotals};
use crate::display::report::{double_separator, separator};
use crate::models::{CategoryName, Money, Transaction, TransactionKind, YearMonth};
use crate::services::TransactionFilter;

/// A category and its total, used for the "top category" lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryHighlight {
    pub category: CategoryName,
    pub total: Money,
}

/// Summary of one calendar month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub month: YearMonth,
    pub total_income: Money,
    pub total_expense: Money,
    /// Income minus expense; negative when more went out than came in
    pub balance: Money,
    pub largest_income: Option<Transaction>,
    pub largest_expense: Option<Transaction>,
    pub top_income_category: Option<CategoryHighlight>,
    pub top_expense_category: Option<CategoryHighlight>,
    pub transaction_count: usize,
}

/// Leading category by total; ties go to the category seen first
fn top_category(totals: &CategoryTotals) -> Option<CategoryHighlight> {
    totals
        .entries()
        .iter()
        .filter(|e| e.total.is_positive())
        .fold(None::<&CategoryTotal>, |best, e| match best {
            Some(b) if b.total >= e.total => Some(b),
            _ => Some(e),
        })
        .map(|e| CategoryHighlight {
            category: e.category.clone(),
            total: e.total,
        })
}

/// Largest single transaction; ties go to the earlier record
fn largest<'a>(transactions: &[&'a Transaction]) -> Option<&'a Transaction> {
    transactions
        .iter()
        .copied()
        .fold(None::<&Transaction>, |best, t| match best {
            Some(b) if b.amount >= t.amount => Some(b),
            _ => Some(t),
        })
}

impl DashboardSummary {
    /// Build the summary for `month` from a transaction snapshot
    pub fn generate(transactions: &[Transaction], month: YearMonth) -> Self {
        let in_month = TransactionFilter::new().within_month(month);
        let income: Vec<&Transaction> = in_month
            .clone()
            .of_kind(TransactionKind::Income)
            .apply(transactions);
        let expense: Vec<&Transaction> = in_month
            .of_kind(TransactionKind::Expense)
            .apply(transactions);

        let total_income: Money = income.iter().map(|t| t.amount).sum();
        let total_expense: Money = expense.iter().map(|t| t.amount).sum();

        Self {
            month,
            total_income,
            total_expense,
            balance: total_income - total_expense,
            largest_income: largest(&income).cloned(),
            largest_expense: largest(&expense).cloned(),
            top_income_category: top_category(&CategoryTotals::aggregate(income.iter().copied())),
            top_expense_category: top_category(&CategoryTotals::aggregate(expense.iter().copied())),
            transaction_count: income.len() + expense.len(),
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();
        let money = |m: Money| m.format_with_symbol(currency);

        output.push_str(&format!("Dashboard: {} ({})\n", self.month.short_label(), self.month));
        output.push_str(&double_separator(48));
        output.push('\n');
        output.push_str(&format!("{:<24} {:>20}\n", "Income", money(self.total_income)));
        output.push_str(&format!("{:<24} {:>20}\n", "Expenses", money(self.total_expense)));
        output.push_str(&separator(48));
        output.push('\n');
        output.push_str(&format!("{:<24} {:>20}\n", "Balance", money(self.balance)));
        output.push('\n');

        let describe = |txn: &Option<Transaction>| match txn {
            Some(t) => format!("{} ({})", money(t.amount), t.category_key()),
            None => "-".to_string(),
        };
        let highlight = |h: &Option<CategoryHighlight>| match h {
            Some(h) => format!("{} ({})", h.category, money(h.total)),
            None => "-".to_string(),
        };

        output.push_str(&format!("{:<24} {}\n", "Largest income", describe(&self.largest_income)));
        output.push_str(&format!("{:<24} {}\n", "Largest expense", describe(&self.largest_expense)));
        output.push_str(&format!("{:<24} {}\n", "Top income category", highlight(&self.top_income_category)));
        output.push_str(&format!("{:<24} {}\n", "Top expense category", highlight(&self.top_expense_category)));
        output.push_str(&format!("{:<24} {}\n", "Transactions", self.transaction_count));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn jan() -> YearMonth {
        YearMonth::new(2025, 1).unwrap()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::income(date(2025, 1, 5), "Salário", Money::from_units(5000)),
            Transaction::income(date(2025, 1, 20), "Freelance", Money::from_units(800)),
            Transaction::expense(date(2025, 1, 10), "Moradia", Money::from_units(1500)),
            Transaction::expense(date(2025, 1, 11), "Alimentação", Money::from_units(300)),
            Transaction::expense(date(2025, 1, 25), "Alimentação", Money::from_units(1400)),
            Transaction::expense(date(2025, 2, 1), "Moradia", Money::from_units(9999)),
        ]
    }

    #[test]
    fn test_month_summary() {
        let summary = DashboardSummary::generate(&sample(), jan());

        assert_eq!(summary.total_income, Money::from_units(5800));
        assert_eq!(summary.total_expense, Money::from_units(3200));
        assert_eq!(summary.balance, Money::from_units(2600));
        assert_eq!(summary.transaction_count, 5);

        assert_eq!(summary.largest_income.unwrap().amount, Money::from_units(5000));
        assert_eq!(summary.largest_expense.unwrap().category.as_str(), "Moradia");

        let top_expense = summary.top_expense_category.unwrap();
        assert_eq!(top_expense.category.as_str(), "Alimentação");
        assert_eq!(top_expense.total, Money::from_units(1700));
        assert_eq!(
            summary.top_income_category.unwrap().category.as_str(),
            "Salário"
        );
    }

    #[test]
    fn test_negative_balance() {
        let txns = vec![
            Transaction::income(date(2025, 1, 1), "Salário", Money::from_units(100)),
            Transaction::expense(date(2025, 1, 2), "Moradia", Money::from_units(250)),
        ];
        let summary = DashboardSummary::generate(&txns, jan());
        assert_eq!(summary.balance, Money::from_units(-150));
    }

    #[test]
    fn test_empty_month() {
        let summary = DashboardSummary::generate(&sample(), YearMonth::new(2024, 6).unwrap());

        assert_eq!(summary.total_income, Money::zero());
        assert_eq!(summary.total_expense, Money::zero());
        assert_eq!(summary.balance, Money::zero());
        assert!(summary.largest_income.is_none());
        assert!(summary.largest_expense.is_none());
        assert!(summary.top_income_category.is_none());
        assert!(summary.top_expense_category.is_none());
        assert!(summary.format_terminal("$").contains("Largest income"));
    }
}
