use std::{env, fs, io, path::Path, path::PathBuf, sync::Once};

const DEFAULT_DIR_NAME: &str = ".budget_pad";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("budget_pad=info".parse().expect("static directive parses"));

        fmt().with_env_filter(filter).init();
    });
}

/// Returns the application-specific data directory, defaulting to
/// `~/.budget_pad`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("BUDGET_PAD_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Creates the directory (and parents) when it does not already exist.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn ensure_dir_creates_nested_directories() {
        let temp = TempDir::new().expect("create temp dir");
        let nested = temp.path().join("a/b/c");

        ensure_dir(&nested).expect("create nested dirs");
        assert!(nested.is_dir());
        // Idempotent on an existing directory.
        ensure_dir(&nested).expect("existing dir is fine");
    }

    #[test]
    fn app_data_dir_is_not_empty() {
        assert!(!app_data_dir().as_os_str().is_empty());
    }
}
