use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use budget_pad::{config::ConfigManager, storage::JsonStateStore};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the
/// test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Reserves an isolated base directory for a single test.
pub fn test_base_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Creates an isolated JSON backend rooted in a fresh directory.
pub fn json_store_in(base: &Path) -> JsonStateStore {
    JsonStateStore::new(Some(base.join("state"))).expect("create json state store")
}

/// Creates an isolated config manager rooted in a fresh directory.
#[allow(dead_code)]
pub fn config_manager_in(base: &Path) -> ConfigManager {
    ConfigManager::from_base(base.to_path_buf()).expect("create config manager")
}
