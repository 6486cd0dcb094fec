//! Transaction repository for JSON storage
//!
//! Records are kept in file order, which is the "first seen" order used by
//! the category report. New records are appended.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::file_io::{read_json, write_json_atomic};
use super::TransactionSource;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Transaction, TransactionId};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TransactionData {
    #[serde(default)]
    transactions: Vec<Transaction>,
}

pub struct TransactionRepository {
    path: PathBuf,
    transactions: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            transactions: RwLock::new(Vec::new()),
        }
    }

    /// Load transactions from disk
    ///
    /// Records with an unusable date or amount still load; they carry
    /// `None` / zero and are left out of period-based reports.
    pub fn load(&self) -> FintrackResult<()> {
        let file_data: TransactionData = read_json(&self.path)?;

        let undated = file_data
            .transactions
            .iter()
            .filter(|t| t.date.is_none())
            .count();
        if undated > 0 {
            warn!(undated, path = %self.path.display(), "loaded transactions without a usable date");
        }

        let mut transactions = self
            .transactions
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *transactions = file_data.transactions;
        debug!(count = transactions.len(), "loaded transactions");
        Ok(())
    }

    pub fn save(&self) -> FintrackResult<()> {
        let file_data = TransactionData {
            transactions: self.list()?,
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: &TransactionId) -> FintrackResult<Option<Transaction>> {
        let transactions = self
            .transactions
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(transactions.iter().find(|t| &t.id == id).cloned())
    }

    /// Validate and append a transaction, then persist
    pub fn add(&self, txn: Transaction) -> FintrackResult<()> {
        txn.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        {
            let mut transactions = self.transactions.write().map_err(|e| {
                FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;

            if transactions.iter().any(|t| t.id == txn.id) {
                return Err(FintrackError::Storage(format!(
                    "Transaction ID {} is already in use",
                    txn.id
                )));
            }
            transactions.push(txn);
        }
        self.save()
    }

    /// Replace a stored transaction in place, keeping its position
    pub fn update(&self, id: &TransactionId, txn: Transaction) -> FintrackResult<()> {
        txn.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        {
            let mut transactions = self.transactions.write().map_err(|e| {
                FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;

            let slot = transactions
                .iter_mut()
                .find(|t| &t.id == id)
                .ok_or_else(|| FintrackError::transaction_not_found(id.as_str()))?;
            *slot = txn;
        }
        self.save()
    }

    pub fn delete(&self, id: &TransactionId) -> FintrackResult<bool> {
        let removed = {
            let mut transactions = self.transactions.write().map_err(|e| {
                FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            let before = transactions.len();
            transactions.retain(|t| &t.id != id);
            transactions.len() != before
        };

        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    pub fn count(&self) -> FintrackResult<usize> {
        let transactions = self
            .transactions
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(transactions.len())
    }
}

impl TransactionSource for TransactionRepository {
    fn list(&self) -> FintrackResult<Vec<Transaction>> {
        let transactions = self
            .transactions
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(transactions.clone())
    }
}
