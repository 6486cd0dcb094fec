//! Budget target repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use super::file_io::{read_json, write_json_atomic};
use super::TargetStore;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{BudgetTarget, BudgetTargetId};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TargetData {
    #[serde(default)]
    targets: Vec<BudgetTarget>,
}

/// JSON-backed budget target store
///
/// Mutations write through to disk. Duplicate (category, period) checks are
/// not done here; go through `TargetService` for that.
pub struct TargetRepository {
    path: PathBuf,
    targets: RwLock<HashMap<BudgetTargetId, BudgetTarget>>,
}

impl TargetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            targets: RwLock::new(HashMap::new()),
        }
    }

    pub fn load(&self) -> FintrackResult<()> {
        let file_data: TargetData = read_json(&self.path)?;

        let mut targets = self
            .targets
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        targets.clear();
        for target in file_data.targets {
            targets.insert(target.id.clone(), target);
        }

        Ok(())
    }

    pub fn save(&self) -> FintrackResult<()> {
        let file_data = TargetData {
            targets: self.list()?,
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: &BudgetTargetId) -> FintrackResult<Option<BudgetTarget>> {
        let targets = self
            .targets
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(targets.get(id).cloned())
    }

    pub fn count(&self) -> FintrackResult<usize> {
        let targets = self
            .targets
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(targets.len())
    }
}

impl TargetStore for TargetRepository {
    /// Targets in creation order
    fn list(&self) -> FintrackResult<Vec<BudgetTarget>> {
        let targets = self
            .targets
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = targets.values().cloned().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(list)
    }

    fn create(&self, target: BudgetTarget) -> FintrackResult<()> {
        {
            let mut targets = self.targets.write().map_err(|e| {
                FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;

            if targets.contains_key(&target.id) {
                return Err(FintrackError::Storage(format!(
                    "Budget target ID {} is already in use",
                    target.id
                )));
            }
            targets.insert(target.id.clone(), target);
        }
        self.save()
    }

    fn update(&self, id: &BudgetTargetId, target: BudgetTarget) -> FintrackResult<()> {
        {
            let mut targets = self.targets.write().map_err(|e| {
                FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;

            let slot = targets
                .get_mut(id)
                .ok_or_else(|| FintrackError::target_not_found(id.as_str()))?;
            *slot = target;
        }
        self.save()
    }

    fn delete(&self, id: &BudgetTargetId) -> FintrackResult<bool> {
        let removed = {
            let mut targets = self.targets.write().map_err(|e| {
                FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            targets.remove(id).is_some()
        };

        if removed {
            self.save()?;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, YearMonth};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TargetRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = TargetRepository::new(temp_dir.path().join("targets.json"));
        repo.load().unwrap();
        (temp_dir, repo)
    }

    fn target(id: &str, category: &str) -> BudgetTarget {
        BudgetTarget::with_id(id, category, YearMonth::new(2025, 1).unwrap(), Money::from_units(100))
    }

    #[test]
    fn test_create_persists_to_disk() {
        let (temp_dir, repo) = create_test_repo();
        repo.create(target("t1", "Moradia")).unwrap();

        let reloaded = TargetRepository::new(temp_dir.path().join("targets.json"));
        reloaded.load().unwrap();
        assert_eq!(reloaded.count().unwrap(), 1);
        assert_eq!(
            reloaded.get(&BudgetTargetId::from("t1")).unwrap().unwrap().category.as_str(),
            "Moradia"
        );
    }

    #[test]
    fn test_create_rejects_reused_id() {
        let (_temp_dir, repo) = create_test_repo();
        repo.create(target("t1", "Moradia")).unwrap();
        assert!(repo.create(target("t1", "Lazer")).is_err());
    }

    #[test]
    fn test_update_and_delete() {
        let (_temp_dir, repo) = create_test_repo();
        let id = BudgetTargetId::from("t1");
        repo.create(target("t1", "Moradia")).unwrap();

        let mut edited = repo.get(&id).unwrap().unwrap();
        edited.limit = Money::from_units(250);
        repo.update(&id, edited).unwrap();
        assert_eq!(repo.get(&id).unwrap().unwrap().limit, Money::from_units(250));

        assert!(repo.delete(&id).unwrap());
        assert!(!repo.delete(&id).unwrap());
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn test_update_missing_target() {
        let (_temp_dir, repo) = create_test_repo();
        let err = repo
            .update(&BudgetTargetId::from("nope"), target("nope", "Lazer"))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_loads_file_without_timestamps_or_ids() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("targets.json");
        std::fs::write(
            &path,
            r#"{"targets": [{"id": "t1", "category": "moradia", "period": "2025-01", "limit": 1500}]}"#,
        )
        .unwrap();

        let repo = TargetRepository::new(path);
        repo.load().unwrap();
        let targets = repo.list().unwrap();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].category.as_str(), "Moradia");
        assert_eq!(targets[0].limit, Money::from_units(1500));
    }
}
