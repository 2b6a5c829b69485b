//! Filesystem-backed JSON persistence.
//!
//! The state lives in a data directory as two entries, one file per key:
//! `transactions.json` holds the ledger as a JSON array of camelCase records
//! and `initialBudget.json` holds the starting budget as a bare number.
//! Writes are staged to a `.tmp` sibling and renamed into place; reads fall
//! back per entry, so a corrupt ledger file never discards a readable budget.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::warn;

use crate::{
    domain::{BudgetState, Transaction},
    utils::{app_data_dir, ensure_dir},
};

use super::{Result, StateStore};

const TRANSACTIONS_KEY: &str = "transactions";
const INITIAL_BUDGET_KEY: &str = "initialBudget";
const ENTRY_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// JSON key-value persistence rooted in a data directory.
#[derive(Debug, Clone)]
pub struct JsonStateStore {
    root: PathBuf,
}

impl JsonStateStore {
    /// Opens (creating if needed) a store rooted at `root`, defaulting to the
    /// shared application data directory.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.{ENTRY_EXTENSION}"))
    }

    fn load_transactions(&self) -> Vec<Transaction> {
        read_entry(&self.entry_path(TRANSACTIONS_KEY), TRANSACTIONS_KEY).unwrap_or_default()
    }

    fn load_initial_budget(&self) -> f64 {
        read_entry(&self.entry_path(INITIAL_BUDGET_KEY), INITIAL_BUDGET_KEY).unwrap_or_default()
    }
}

impl StateStore for JsonStateStore {
    fn save(&self, state: &BudgetState) -> Result<()> {
        ensure_dir(&self.root)?;
        write_entry(&self.entry_path(TRANSACTIONS_KEY), &state.transactions)?;
        write_entry(&self.entry_path(INITIAL_BUDGET_KEY), &state.initial_budget)?;
        Ok(())
    }

    fn load(&self) -> BudgetState {
        BudgetState::new(self.load_transactions(), self.load_initial_budget())
    }
}

/// Decodes one entry, degrading to `None` on absence or failure.
fn read_entry<T: serde::de::DeserializeOwned>(path: &Path, key: &str) -> Option<T> {
    if !path.exists() {
        return None;
    }
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            warn!("failed to read `{key}` entry, falling back to default: {err}");
            return None;
        }
    };
    match serde_json::from_str(&data) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("failed to decode `{key}` entry, falling back to default: {err}");
            None
        }
    }
}

/// Writes one entry atomically by staging to a temporary file.
fn write_entry<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    let tmp = tmp_path(path);
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
