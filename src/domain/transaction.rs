//! Domain model for a single signed monetary event.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single credit or debit against the running balance.
///
/// The magnitude never encodes the sign; `is_addition` decides whether the
/// amount counts for or against the balance. Transactions are immutable once
/// created and are never edited or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub amount: f64,
    pub is_addition: bool,
}

impl Transaction {
    /// Creates a transaction with a freshly generated identifier.
    ///
    /// Performs no validation; the store rejects invalid magnitudes at its
    /// own boundary.
    pub fn new(amount: f64, is_addition: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            is_addition,
        }
    }

    /// The amount with the credit/debit sign applied.
    pub fn signed_amount(&self) -> f64 {
        if self.is_addition {
            self.amount
        } else {
            -self.amount
        }
    }
}
