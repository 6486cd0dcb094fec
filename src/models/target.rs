//! Budget target model
//!
//! A budget target is a spending ceiling for one category in one calendar
//! month. At most one target may exist per (category, period) pair; that
//! rule is enforced by `services::target` before anything reaches a store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::CategoryName;
use super::ids::BudgetTargetId;
use super::money::Money;
use super::month::YearMonth;

/// A spending ceiling for a category in a given month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetTarget {
    #[serde(default)]
    pub id: BudgetTargetId,
    pub category: CategoryName,
    pub period: YearMonth,
    pub limit: Money,
    #[serde(default)]
    pub notes: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl BudgetTarget {
    pub fn new(category: impl Into<CategoryName>, period: YearMonth, limit: Money) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetTargetId::new(),
            category: category.into(),
            period,
            limit,
            notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a target with a caller-chosen ID
    pub fn with_id(
        id: impl Into<BudgetTargetId>,
        category: impl Into<CategoryName>,
        period: YearMonth,
        limit: Money,
    ) -> Self {
        let mut target = Self::new(category, period, limit);
        target.id = id.into();
        target
    }

    /// Whether this target occupies the given (category, period) slot
    pub fn occupies(&self, category: &CategoryName, period: YearMonth) -> bool {
        self.period == period && &self.category == category
    }

    /// Replace the editable fields, keeping ID and creation time
    pub fn apply_edit(&mut self, category: CategoryName, period: YearMonth, limit: Money) {
        self.category = category;
        self.period = period;
        self.limit = limit;
        self.updated_at = Utc::now();
    }

    pub fn validate(&self) -> Result<(), TargetValidationError> {
        if self.category.is_empty() {
            return Err(TargetValidationError::EmptyCategory);
        }

        if !self.limit.is_positive() {
            return Err(TargetValidationError::NonPositiveLimit(self.limit));
        }

        Ok(())
    }
}

impl fmt::Display for BudgetTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (limit {})", self.category, self.period, self.limit)
    }
}

/// Validation errors for budget targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetValidationError {
    EmptyCategory,
    NonPositiveLimit(Money),
}

impl fmt::Display for TargetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Target category cannot be empty"),
            Self::NonPositiveLimit(limit) => {
                write!(f, "Target limit must be greater than zero (got {})", limit)
            }
        }
    }
}

impl std::error::Error for TargetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn march() -> YearMonth {
        YearMonth::new(2025, 3).unwrap()
    }

    #[test]
    fn test_new_target() {
        let target = BudgetTarget::new("alimentação", march(), Money::from_units(500));
        assert_eq!(target.category.as_str(), "Alimentação");
        assert_eq!(target.period.to_string(), "2025-03");
        assert!(target.validate().is_ok());
    }

    #[test]
    fn test_occupies_is_case_insensitive() {
        let target = BudgetTarget::with_id("t1", "Moradia", march(), Money::from_units(100));
        assert!(target.occupies(&CategoryName::new("MORADIA"), march()));
        assert!(!target.occupies(&CategoryName::new("Moradia"), march().next()));
    }

    #[test]
    fn test_validate_limit() {
        let target = BudgetTarget::new("Lazer", march(), Money::zero());
        assert_eq!(
            target.validate(),
            Err(TargetValidationError::NonPositiveLimit(Money::zero()))
        );

        let target = BudgetTarget::new(" ", march(), Money::from_units(1));
        assert_eq!(target.validate(), Err(TargetValidationError::EmptyCategory));
    }

    #[test]
    fn test_apply_edit_keeps_identity() {
        let mut target = BudgetTarget::with_id("t1", "Lazer", march(), Money::from_units(100));
        let created = target.created_at;
        target.apply_edit(CategoryName::new("Transporte"), march().next(), Money::from_units(80));

        assert_eq!(target.id.as_str(), "t1");
        assert_eq!(target.created_at, created);
        assert_eq!(target.category.as_str(), "Transporte");
        assert_eq!(target.limit, Money::from_units(80));
    }

    #[test]
    fn test_deserialize_minimal() {
        let json = r#"{"id": "t1", "category": "moradia", "period": "2025-01", "limit": 1500.0}"#;
        let target: BudgetTarget = serde_json::from_str(json).unwrap();
        assert_eq!(target.id.as_str(), "t1");
        assert_eq!(target.category.as_str(), "Moradia");
        assert_eq!(target.limit, Money::from_units(1500));
    }
}
