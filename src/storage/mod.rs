//! Persistence seam and backends.

pub mod json_backend;

use std::sync::{Arc, Mutex};

use crate::{domain::BudgetState, errors::BudgetError};

pub type Result<T> = std::result::Result<T, BudgetError>;

/// Abstraction over persistence backends capable of storing the full budget
/// state.
///
/// `load` is infallible by contract: an entry that is missing or unreadable
/// degrades to its default rather than surfacing an error, so a fresh or
/// corrupted data directory always yields a usable state.
pub trait StateStore: Send + Sync {
    fn save(&self, state: &BudgetState) -> Result<()>;
    fn load(&self) -> BudgetState;
}

pub use json_backend::JsonStateStore;

/// In-memory backend for tests and embedding.
#[derive(Clone, Default)]
pub struct MemoryStateStore {
    state: Arc<Mutex<BudgetState>>,
}

impl StateStore for MemoryStateStore {
    fn save(&self, state: &BudgetState) -> Result<()> {
        let mut slot = self
            .state
            .lock()
            .map_err(|_| {
                BudgetError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "state mutex poisoned",
                ))
            })?;
        *slot = state.clone();
        Ok(())
    }

    fn load(&self) -> BudgetState {
        self.state
            .lock()
            .map(|slot| slot.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Transaction;

    #[test]
    fn memory_store_roundtrips_state() {
        let store = MemoryStateStore::default();
        assert_eq!(store.load(), BudgetState::default());

        let state = BudgetState::new(vec![Transaction::new(5.0, true)], 42.0);
        store.save(&state).expect("save state");
        assert_eq!(store.load(), state);
    }

    #[test]
    fn clones_share_the_same_state() {
        let store = MemoryStateStore::default();
        let alias = store.clone();

        let state = BudgetState::new(Vec::new(), 7.0);
        store.save(&state).expect("save state");
        assert_eq!(alias.load(), state);
    }
}
