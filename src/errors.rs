use thiserror::Error;

/// Error type that captures common store failures.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Calendar error: {0}")]
    Calendar(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),
    #[error("Payday day must be between 1 and 28, got {0}")]
    InvalidPaydayDay(u32),
}
