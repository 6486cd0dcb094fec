//! Budget target evaluation
//!
//! Compares each budget target with the actual amount recorded for its
//! category in its calendar month. Spending is indexed once per call by
//! `(category, month)`, so evaluation is linear in targets plus
//! transactions.

use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::models::{BudgetTarget, BudgetTargetId, CategoryName, Money, Transaction, YearMonth};

/// How a single target stands against actual spending
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetProgress {
    pub target_id: BudgetTargetId,
    pub category: CategoryName,
    pub period: YearMonth,
    pub limit: Money,
    pub spent: Money,
    /// `limit - spent`; negative once the target is exceeded
    pub remaining: Money,
    /// Spent as a share of the limit, 0.0 for a zero limit
    pub percent_used: f64,
}

impl TargetProgress {
    /// Strictly over the limit; spending exactly the limit is not an overrun
    pub fn is_over(&self) -> bool {
        self.spent > self.limit
    }

    pub fn to_warning(&self) -> Option<BudgetWarning> {
        self.is_over().then(|| BudgetWarning {
            target_id: self.target_id.clone(),
            category: self.category.clone(),
            period: self.period,
            spent: self.spent,
            limit: self.limit,
        })
    }
}

/// A target whose month spending exceeded its limit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetWarning {
    pub target_id: BudgetTargetId,
    pub category: CategoryName,
    pub period: YearMonth,
    pub spent: Money,
    pub limit: Money,
}

impl BudgetWarning {
    /// Amount by which the limit was exceeded
    pub fn excess(&self) -> Money {
        self.spent - self.limit
    }

    /// One-line human readable message
    pub fn message(&self, currency: &str) -> String {
        format!(
            "Budget exceeded for {} in {}: spent {} of {} (over by {})",
            self.category,
            self.period,
            self.spent.format_with_symbol(currency),
            self.limit.format_with_symbol(currency),
            self.excess().format_with_symbol(currency)
        )
    }
}

/// Sum amounts per (category, month); undated records are ignored
fn spending_index<'a, I>(transactions: I) -> HashMap<(CategoryName, YearMonth), Money>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut index: HashMap<(CategoryName, YearMonth), Money> = HashMap::new();
    for txn in transactions {
        if let Some(month) = txn.month() {
            *index.entry((txn.category_key(), month)).or_default() += txn.amount;
        }
    }
    index
}

/// Progress for every target, in target order
pub fn assess_targets<'a, I>(targets: &[BudgetTarget], transactions: I) -> Vec<TargetProgress>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let index = spending_index(transactions);

    let progress: Vec<TargetProgress> = targets
        .iter()
        .map(|target| {
            let spent = index
                .get(&(target.category.clone(), target.period))
                .copied()
                .unwrap_or_default();
            TargetProgress {
                target_id: target.id.clone(),
                category: target.category.clone(),
                period: target.period,
                limit: target.limit,
                spent,
                remaining: target.limit - spent,
                percent_used: spent.percentage_of(target.limit),
            }
        })
        .collect();

    debug!(
        targets = targets.len(),
        buckets = index.len(),
        "assessed budget targets"
    );
    progress
}

/// Warnings for every target whose month spending exceeds its limit
///
/// Returned in target order; an empty vector means nothing is over.
pub fn evaluate<'a, I>(targets: &[BudgetTarget], transactions: I) -> Vec<BudgetWarning>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let warnings: Vec<BudgetWarning> = assess_targets(targets, transactions)
        .iter()
        .filter_map(TargetProgress::to_warning)
        .collect();

    for warning in &warnings {
        warn!(
            target = %warning.target_id,
            category = %warning.category,
            period = %warning.period,
            spent = %warning.spent,
            limit = %warning.limit,
            "budget target exceeded"
        );
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ym(y: i32, m: u32) -> YearMonth {
        YearMonth::new(y, m).unwrap()
    }

    #[test]
    fn test_overrun_in_target_month() {
        let targets = vec![BudgetTarget::with_id(
            "food-mar",
            "Alimentação",
            ym(2025, 3),
            Money::from_units(500),
        )];
        let txns = vec![
            Transaction::expense(date(2025, 3, 4), "Alimentação", Money::from_units(300)),
            Transaction::expense(date(2025, 3, 18), "alimentação", Money::from_units(250)),
        ];

        let warnings = evaluate(&targets, &txns);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].target_id.as_str(), "food-mar");
        assert_eq!(warnings[0].spent, Money::from_units(550));
        assert_eq!(warnings[0].limit, Money::from_units(500));
        assert_eq!(warnings[0].excess(), Money::from_units(50));
    }

    #[test]
    fn test_no_warning_for_other_month() {
        let targets = vec![BudgetTarget::with_id(
            "food-apr",
            "Alimentação",
            ym(2025, 4),
            Money::from_units(500),
        )];
        let txns = vec![
            Transaction::expense(date(2025, 3, 4), "Alimentação", Money::from_units(300)),
            Transaction::expense(date(2025, 3, 18), "Alimentação", Money::from_units(250)),
        ];

        assert!(evaluate(&targets, &txns).is_empty());
        let progress = assess_targets(&targets, &txns);
        assert_eq!(progress[0].spent, Money::zero());
        assert_eq!(progress[0].remaining, Money::from_units(500));
    }

    #[test]
    fn test_same_month_other_year_does_not_count() {
        let targets = vec![BudgetTarget::with_id("t", "Lazer", ym(2025, 3), Money::from_units(10))];
        let txns = vec![Transaction::expense(date(2024, 3, 1), "Lazer", Money::from_units(99))];
        assert!(evaluate(&targets, &txns).is_empty());
    }

    #[test]
    fn test_exactly_at_limit_is_not_a_warning() {
        let targets = vec![BudgetTarget::with_id("t", "Lazer", ym(2025, 1), Money::from_units(100))];
        let txns = vec![Transaction::expense(date(2025, 1, 1), "Lazer", Money::from_units(100))];

        assert!(evaluate(&targets, &txns).is_empty());
        let progress = assess_targets(&targets, &txns);
        assert!((progress[0].percent_used - 100.0).abs() < 1e-9);
        assert_eq!(progress[0].remaining, Money::zero());
    }

    #[test]
    fn test_warnings_follow_target_order() {
        let targets = vec![
            BudgetTarget::with_id("b", "Lazer", ym(2025, 1), Money::from_units(1)),
            BudgetTarget::with_id("skip", "Saúde", ym(2025, 1), Money::from_units(1000)),
            BudgetTarget::with_id("a", "Moradia", ym(2025, 1), Money::from_units(1)),
        ];
        let txns = vec![
            Transaction::expense(date(2025, 1, 2), "Moradia", Money::from_units(5)),
            Transaction::expense(date(2025, 1, 3), "Lazer", Money::from_units(5)),
            Transaction::expense(date(2025, 1, 3), "Saúde", Money::from_units(5)),
        ];

        let ids: Vec<String> = evaluate(&targets, &txns)
            .into_iter()
            .map(|w| w.target_id.to_string())
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_empty_inputs() {
        let targets = vec![BudgetTarget::with_id("t", "Lazer", ym(2025, 1), Money::from_units(1))];
        assert!(evaluate(&targets, std::iter::empty()).is_empty());
        assert!(evaluate(&[], &[Transaction::expense(
            date(2025, 1, 1),
            "Lazer",
            Money::from_units(5)
        )])
        .is_empty());
    }

    #[test]
    fn test_zero_limit_percent_is_guarded() {
        let mut target = BudgetTarget::with_id("t", "Lazer", ym(2025, 1), Money::from_units(1));
        target.limit = Money::zero();
        let txns = vec![Transaction::expense(date(2025, 1, 1), "Lazer", Money::from_units(5))];

        let progress = assess_targets(std::slice::from_ref(&target), &txns);
        assert_eq!(progress[0].percent_used, 0.0);
        assert!(progress[0].is_over());
    }

    #[test]
    fn test_undated_transactions_are_ignored() {
        let targets = vec![BudgetTarget::with_id("t", "Lazer", ym(2025, 1), Money::from_units(1))];
        let mut txn = Transaction::expense(date(2025, 1, 1), "Lazer", Money::from_units(5));
        txn.date = None;
        assert!(evaluate(&targets, std::iter::once(&txn)).is_empty());
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let targets = vec![BudgetTarget::with_id("t", "Lazer", ym(2025, 1), Money::from_units(1))];
        let txns = vec![Transaction::expense(date(2025, 1, 1), "Lazer", Money::from_units(5))];
        assert_eq!(evaluate(&targets, &txns), evaluate(&targets, &txns));
    }

    #[test]
    fn test_warning_message() {
        let warning = BudgetWarning {
            target_id: BudgetTargetId::from("t"),
            category: CategoryName::new("lazer"),
            period: ym(2025, 1),
            spent: Money::from_units(120),
            limit: Money::from_units(100),
        };
        assert_eq!(
            warning.message("R$ "),
            "Budget exceeded for Lazer in 2025-01: spent R$ 120.00 of R$ 100.00 (over by R$ 20.00)"
        );
    }
}
