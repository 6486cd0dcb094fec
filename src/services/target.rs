//! Budget target service
//!
//! Wraps a [`TargetStore`] so that every create and update first passes the
//! duplicate guard: a (category, period) pair may be occupied by at most one
//! target. A rejected mutation never reaches the store.

use tracing::{info, warn};

use crate::error::{FintrackError, FintrackResult};
use crate::models::{BudgetTarget, BudgetTargetId, CategoryName, Money, YearMonth};
use crate::storage::TargetStore;

/// Check whether another target already occupies `(category, period)`
///
/// The category comparison is case-insensitive. `exclude_id` names the
/// target being edited so it does not collide with itself.
pub fn target_exists(
    targets: &[BudgetTarget],
    category: &CategoryName,
    period: YearMonth,
    exclude_id: Option<&BudgetTargetId>,
) -> bool {
    targets
        .iter()
        .filter(|t| exclude_id.map_or(true, |id| &t.id != id))
        .any(|t| t.occupies(category, period))
}

/// Like [`target_exists`], but returns a `Duplicate` error on collision
pub fn ensure_unique_target(
    targets: &[BudgetTarget],
    category: &CategoryName,
    period: YearMonth,
    exclude_id: Option<&BudgetTargetId>,
) -> FintrackResult<()> {
    if target_exists(targets, category, period, exclude_id) {
        warn!(%category, %period, "rejected duplicate budget target");
        return Err(FintrackError::duplicate_target(category, period));
    }
    Ok(())
}

/// Service for budget target management
pub struct TargetService<'a, S: TargetStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: TargetStore + ?Sized> TargetService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// All targets, ordered by period then category
    pub fn list(&self) -> FintrackResult<Vec<BudgetTarget>> {
        let mut targets = self.store.list()?;
        targets.sort_by(|a, b| a.period.cmp(&b.period).then(a.category.cmp(&b.category)));
        Ok(targets)
    }

    /// Targets for a single month
    pub fn list_for_period(&self, period: YearMonth) -> FintrackResult<Vec<BudgetTarget>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|t| t.period == period)
            .collect())
    }

    pub fn get(&self, id: &BudgetTargetId) -> FintrackResult<BudgetTarget> {
        self.store
            .list()?
            .into_iter()
            .find(|t| &t.id == id)
            .ok_or_else(|| FintrackError::target_not_found(id.as_str()))
    }

    /// Create a target after validating it and checking for duplicates
    pub fn create(
        &self,
        category: impl Into<CategoryName>,
        period: YearMonth,
        limit: Money,
    ) -> FintrackResult<BudgetTarget> {
        let target = BudgetTarget::new(category, period, limit);
        target
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        let existing = self.store.list()?;
        ensure_unique_target(&existing, &target.category, target.period, None)?;

        self.store.create(target.clone())?;
        info!(id = %target.id, category = %target.category, period = %target.period, "created budget target");
        Ok(target)
    }

    /// Update a target's category, period and limit
    ///
    /// The edited target is excluded from the duplicate check so saving it
    /// unchanged is allowed.
    pub fn update(
        &self,
        id: &BudgetTargetId,
        category: impl Into<CategoryName>,
        period: YearMonth,
        limit: Money,
    ) -> FintrackResult<BudgetTarget> {
        let existing = self.store.list()?;
        let mut target = existing
            .iter()
            .find(|t| &t.id == id)
            .cloned()
            .ok_or_else(|| FintrackError::target_not_found(id.as_str()))?;

        let category = category.into();
        ensure_unique_target(&existing, &category, period, Some(id))?;

        target.apply_edit(category, period, limit);
        target
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.store.update(id, target.clone())?;
        info!(id = %target.id, category = %target.category, period = %target.period, "updated budget target");
        Ok(target)
    }

    pub fn delete(&self, id: &BudgetTargetId) -> FintrackResult<()> {
        if !self.store.delete(id)? {
            return Err(FintrackError::target_not_found(id.as_str()));
        }
        info!(%id, "deleted budget target");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::TargetRepository;
    use tempfile::TempDir;

    fn jan() -> YearMonth {
        YearMonth::new(2025, 1).unwrap()
    }

    fn create_test_store() -> (TempDir, TargetRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = TargetRepository::new(temp_dir.path().join("targets.json"));
        repo.load().unwrap();
        (temp_dir, repo)
    }

    #[test]
    fn test_duplicate_guard_scenario() {
        let targets = vec![BudgetTarget::with_id(
            "t1",
            "Moradia",
            jan(),
            Money::from_units(1500),
        )];
        let moradia = CategoryName::new("Moradia");

        assert!(target_exists(&targets, &moradia, jan(), None));
        assert!(!target_exists(
            &targets,
            &moradia,
            jan(),
            Some(&BudgetTargetId::from("t1"))
        ));
    }

    #[test]
    fn test_duplicate_guard_is_case_insensitive_and_period_exact() {
        let targets = vec![BudgetTarget::with_id(
            "t1",
            "Moradia",
            jan(),
            Money::from_units(1500),
        )];

        assert!(target_exists(&targets, &CategoryName::new("  moRADia"), jan(), None));
        assert!(!target_exists(&targets, &CategoryName::new("Moradia"), jan().next(), None));
        assert!(!target_exists(&targets, &CategoryName::new("Lazer"), jan(), None));
        assert!(!target_exists(&[], &CategoryName::new("Moradia"), jan(), None));
    }

    #[test]
    fn test_create_rejects_duplicate_without_writing() {
        let (_temp_dir, store) = create_test_store();
        let service = TargetService::new(&store);

        service.create("Moradia", jan(), Money::from_units(1500)).unwrap();
        let err = service
            .create("MORADIA", jan(), Money::from_units(900))
            .unwrap_err();

        assert!(err.is_duplicate());
        let targets = service.list().unwrap();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].limit, Money::from_units(1500));
    }

    #[test]
    fn test_create_validates_limit() {
        let (_temp_dir, store) = create_test_store();
        let service = TargetService::new(&store);

        let err = service.create("Lazer", jan(), Money::zero()).unwrap_err();
        assert!(err.is_validation());
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_update_allows_editing_itself() {
        let (_temp_dir, store) = create_test_store();
        let service = TargetService::new(&store);

        let target = service.create("Moradia", jan(), Money::from_units(1500)).unwrap();
        let updated = service
            .update(&target.id, "moradia", jan(), Money::from_units(1600))
            .unwrap();

        assert_eq!(updated.id, target.id);
        assert_eq!(updated.limit, Money::from_units(1600));
        assert_eq!(service.get(&target.id).unwrap().limit, Money::from_units(1600));
    }

    #[test]
    fn test_update_into_occupied_slot_is_rejected() {
        let (_temp_dir, store) = create_test_store();
        let service = TargetService::new(&store);

        service.create("Moradia", jan(), Money::from_units(1500)).unwrap();
        let lazer = service.create("Lazer", jan(), Money::from_units(200)).unwrap();

        let err = service
            .update(&lazer.id, "Moradia", jan(), Money::from_units(200))
            .unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(service.get(&lazer.id).unwrap().category.as_str(), "Lazer");
    }

    #[test]
    fn test_update_and_delete_missing_target() {
        let (_temp_dir, store) = create_test_store();
        let service = TargetService::new(&store);
        let missing = BudgetTargetId::from("nope");

        assert!(service
            .update(&missing, "Lazer", jan(), Money::from_units(1))
            .unwrap_err()
            .is_not_found());
        assert!(service.delete(&missing).unwrap_err().is_not_found());
    }

    #[test]
    fn test_list_for_period() {
        let (_temp_dir, store) = create_test_store();
        let service = TargetService::new(&store);

        service.create("Moradia", jan(), Money::from_units(1500)).unwrap();
        service.create("Moradia", jan().next(), Money::from_units(1500)).unwrap();
        service.create("Lazer", jan(), Money::from_units(200)).unwrap();

        let january = service.list_for_period(jan()).unwrap();
        let names: Vec<&str> = january.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(names, vec!["Lazer", "Moradia"]);
    }
}
