//! Budget target tables

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::display::report::format_percentage;
use crate::models::BudgetTarget;
use crate::reports::{BudgetWarning, TargetProgress};

#[derive(Tabled)]
struct TargetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
}

#[derive(Tabled)]
struct WarningRow {
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Over by")]
    excess: String,
}

/// Table of targets with their current progress
///
/// `progress` must be in the same order as `targets`.
pub fn format_target_table(
    targets: &[BudgetTarget],
    progress: &[TargetProgress],
    currency: &str,
) -> String {
    if targets.is_empty() {
        return "No budget targets.\n".to_string();
    }

    let rows = targets.iter().zip(progress).map(|(target, p)| TargetRow {
        id: target.id.to_string(),
        period: target.period.to_string(),
        category: target.category.to_string(),
        limit: target.limit.format_with_symbol(currency),
        spent: p.spent.format_with_symbol(currency),
        remaining: p.remaining.format_with_symbol(currency),
        used: if p.is_over() {
            format!("{} !", format_percentage(p.percent_used))
        } else {
            format_percentage(p.percent_used)
        },
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Table of exceeded targets
pub fn format_warning_table(warnings: &[BudgetWarning], currency: &str) -> String {
    if warnings.is_empty() {
        return "All budget targets are within their limits.\n".to_string();
    }

    let rows = warnings.iter().map(|w| WarningRow {
        period: w.period.to_string(),
        category: w.category.to_string(),
        spent: w.spent.format_with_symbol(currency),
        limit: w.limit.format_with_symbol(currency),
        excess: w.excess().format_with_symbol(currency),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}
