//! Pure domain models. No I/O, no storage. Only data types.

pub mod state;
pub mod transaction;

pub use state::BudgetState;
pub use transaction::Transaction;
