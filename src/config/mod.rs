//! Persistent user preferences.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    core::payday::{validate_payday_day, DEFAULT_PAYDAY_DAY},
    errors::BudgetError,
    utils::{app_data_dir, ensure_dir},
};

const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Stores user-configurable preferences and metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default = "Config::default_payday_day")]
    pub payday_day: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for persisted state. Defaults to the
    /// shared application data directory.
    pub data_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "cs-CZ".into(),
            currency: "CZK".into(),
            payday_day: Self::default_payday_day(),
            data_root: None,
        }
    }
}

impl Config {
    pub fn default_payday_day() -> u32 {
        DEFAULT_PAYDAY_DAY
    }

    /// Validated payday day, rejecting values outside `1..=28`.
    pub fn validated_payday_day(&self) -> Result<u32, BudgetError> {
        validate_payday_day(self.payday_day)
    }

    pub fn resolve_data_root(&self) -> PathBuf {
        self.data_root.clone().unwrap_or_else(app_data_dir)
    }
}

/// Handles disk persistence for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, BudgetError> {
        Self::from_base(app_data_dir())
    }

    pub fn from_base(base: PathBuf) -> Result<Self, BudgetError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored configuration, defaulting when no file exists yet.
    pub fn load(&self) -> Result<Config, BudgetError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the configuration atomically by staging to a temporary file.
    pub fn save(&self, config: &Config) -> Result<(), BudgetError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension(TMP_SUFFIX);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn defaults_match_the_original_tool() {
        let config = Config::default();
        assert_eq!(config.currency, "CZK");
        assert_eq!(config.payday_day, DEFAULT_PAYDAY_DAY);
        assert!(config.data_root.is_none());
    }

    #[test]
    fn load_without_a_file_yields_defaults() {
        let temp = TempDir::new().expect("create temp dir");
        let manager = ConfigManager::from_base(temp.path().to_path_buf()).expect("config manager");

        assert_eq!(manager.load().expect("load config"), Config::default());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let temp = TempDir::new().expect("create temp dir");
        let manager = ConfigManager::from_base(temp.path().to_path_buf()).expect("config manager");

        let mut config = Config::default();
        config.payday_day = 20;
        config.data_root = Some(temp.path().join("state"));
        manager.save(&config).expect("save config");

        assert_eq!(manager.load().expect("load config"), config);
    }

    #[test]
    fn missing_payday_day_falls_back_to_the_default() {
        let config: Config =
            serde_json::from_str(r#"{"locale":"en-US","currency":"EUR"}"#).expect("decode config");
        assert_eq!(config.payday_day, DEFAULT_PAYDAY_DAY);
    }

    #[test]
    fn validated_payday_day_rejects_out_of_range_values() {
        let mut config = Config::default();
        config.payday_day = 30;
        assert!(config.validated_payday_day().is_err());
    }

    #[test]
    fn data_root_resolution_prefers_the_override() {
        let mut config = Config::default();
        assert_eq!(config.resolve_data_root(), app_data_dir());

        config.data_root = Some(PathBuf::from("/tmp/elsewhere"));
        assert_eq!(config.resolve_data_root(), PathBuf::from("/tmp/elsewhere"));
    }
}
