//! Store logic: balance computation, payday math, and change notification.

pub mod clock;
pub mod events;
pub mod payday;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use events::{StoreEvent, SubscriberId};
pub use payday::{days_until_payday, next_payday, DEFAULT_PAYDAY_DAY};
pub use store::BudgetStore;
