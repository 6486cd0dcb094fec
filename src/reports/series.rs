//! Chart series builders
//!
//! Turn category and monthly totals into renderer-agnostic series. A new
//! series is built on every call; nothing here holds on to a renderer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::{CategoryOrder, CategoryTotals};
use super::monthly::MonthlyTotals;
use crate::models::{ChartSeries, SeriesPoint};

/// How bar chart months are labelled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MonthLabel {
    /// The numeric `YYYY-MM` key
    #[default]
    Key,
    /// A short label such as "Jan 2025"
    Short,
}

impl fmt::Display for MonthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key => write!(f, "key"),
            Self::Short => write!(f, "short"),
        }
    }
}

impl FromStr for MonthLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "key" | "numeric" => Ok(Self::Key),
            "short" | "name" => Ok(Self::Short),
            other => Err(format!(
                "Unknown month label '{}' (expected key or short)",
                other
            )),
        }
    }
}

/// Pie chart slices, one per category with a positive total
pub fn pie_series(totals: &CategoryTotals, order: CategoryOrder) -> ChartSeries {
    totals
        .ordered(order)
        .into_iter()
        .filter(|entry| entry.total.is_positive())
        .map(|entry| SeriesPoint {
            label: entry.category.to_string(),
            value: entry.total.as_decimal(),
        })
        .collect()
}

/// Bar chart points, one per month in chronological order
pub fn bar_series(totals: &MonthlyTotals, label: MonthLabel) -> ChartSeries {
    totals
        .iter()
        .map(|(month, entry)| SeriesPoint {
            label: match label {
                MonthLabel::Key => month.to_string(),
                MonthLabel::Short => month.short_label(),
            },
            value: entry.total.as_decimal(),
        })
        .collect()
}
