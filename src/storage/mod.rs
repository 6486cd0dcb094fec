//! Storage layer for fintrack
//!
//! The engine only sees two seams: a [`TransactionSource`] that yields the
//! current transaction snapshot, and a [`TargetStore`] for budget targets.
//! The JSON repositories below implement them with atomic file writes.

pub mod file_io;
pub mod targets;
pub mod transactions;

pub use file_io::{read_json, write_json_atomic};
pub use targets::TargetRepository;
pub use transactions::TransactionRepository;

use crate::config::paths::FintrackPaths;
use crate::error::FintrackResult;
use crate::models::{BudgetTarget, BudgetTargetId, Transaction};

/// Something that can hand out the current list of transactions
pub trait TransactionSource {
    fn list(&self) -> FintrackResult<Vec<Transaction>>;
}

/// Persistence for budget targets
///
/// Implementations do not check for duplicate (category, period) pairs.
/// Mutations are expected to go through `services::TargetService`.
pub trait TargetStore {
    fn list(&self) -> FintrackResult<Vec<BudgetTarget>>;
    fn create(&self, target: BudgetTarget) -> FintrackResult<()>;
    fn update(&self, id: &BudgetTargetId, target: BudgetTarget) -> FintrackResult<()>;
    /// Returns `false` when no target had that ID
    fn delete(&self, id: &BudgetTargetId) -> FintrackResult<bool>;
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    pub transactions: TransactionRepository,
    pub targets: TargetRepository,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: &FintrackPaths) -> FintrackResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            targets: TargetRepository::new(paths.targets_file()),
        })
    }

    /// Load all data from disk
    pub fn load_all(&self) -> FintrackResult<()> {
        self.transactions.load()?;
        self.targets.load()?;
        Ok(())
    }
}
