use serde::{Deserialize, Serialize};

use crate::domain::Transaction;

/// Snapshot of everything the store persists.
///
/// Insertion order of `transactions` is chronological order; the list is
/// append-only. `Default` doubles as the fallback when persisted data is
/// absent or unreadable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetState {
    pub transactions: Vec<Transaction>,
    pub initial_budget: f64,
}

impl BudgetState {
    pub fn new(transactions: Vec<Transaction>, initial_budget: f64) -> Self {
        Self {
            transactions,
            initial_budget,
        }
    }
}
