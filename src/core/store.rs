//! Facade that owns the ledger, the starting budget, and the persistence
//! backend.

use chrono::NaiveDate;
use tracing::warn;

use crate::{
    core::{
        events::{StoreEvent, SubscriberId, Subscribers},
        payday::{self, DEFAULT_PAYDAY_DAY},
        Clock,
    },
    domain::{BudgetState, Transaction},
    errors::BudgetError,
    storage::StateStore,
};

/// Owns the transaction ledger and starting budget, computes derived values,
/// and flushes the full state to the backend after every mutation.
///
/// Derived values are recomputed from scratch on every read; nothing is
/// cached. Constructing a store restores whatever state the backend holds,
/// with unreadable entries degrading to their defaults.
pub struct BudgetStore {
    transactions: Vec<Transaction>,
    initial_budget: f64,
    payday_day: u32,
    storage: Box<dyn StateStore>,
    subscribers: Subscribers,
}

impl BudgetStore {
    /// Restores a store from the backend using the default payday day.
    pub fn new(storage: Box<dyn StateStore>) -> Self {
        Self::restore(storage, DEFAULT_PAYDAY_DAY)
    }

    /// Restores a store from the backend with a configured payday day.
    pub fn with_payday_day(storage: Box<dyn StateStore>, day: u32) -> Result<Self, BudgetError> {
        let day = payday::validate_payday_day(day)?;
        Ok(Self::restore(storage, day))
    }

    fn restore(storage: Box<dyn StateStore>, day: u32) -> Self {
        let BudgetState {
            transactions,
            initial_budget,
        } = storage.load();
        Self {
            transactions,
            initial_budget,
            payday_day: day,
            storage,
            subscribers: Subscribers::new(),
        }
    }

    /// The ledger in chronological (insertion) order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn initial_budget(&self) -> f64 {
        self.initial_budget
    }

    pub fn payday_day(&self) -> u32 {
        self.payday_day
    }

    /// The starting budget plus the signed sum over all transactions.
    ///
    /// Folded left-to-right in insertion order so floating-point rounding is
    /// deterministic.
    pub fn current_balance(&self) -> f64 {
        self.transactions
            .iter()
            .fold(self.initial_budget, |balance, txn| {
                balance + txn.signed_amount()
            })
    }

    /// Appends a transaction to the ledger and flushes the full state.
    ///
    /// Rejects non-finite and negative magnitudes; zero is accepted. The
    /// flush itself is best-effort: a failed write is logged, not returned.
    pub fn add_transaction(&mut self, transaction: Transaction) -> Result<(), BudgetError> {
        if !transaction.amount.is_finite() || transaction.amount < 0.0 {
            return Err(BudgetError::InvalidAmount(transaction.amount));
        }
        let id = transaction.id;
        self.transactions.push(transaction);
        self.flush();
        self.subscribers.notify(&StoreEvent::TransactionAdded { id });
        Ok(())
    }

    /// Overwrites the starting budget (not additive) and flushes.
    pub fn set_initial_budget(&mut self, amount: f64) -> Result<(), BudgetError> {
        if !amount.is_finite() {
            return Err(BudgetError::InvalidAmount(amount));
        }
        self.initial_budget = amount;
        self.flush();
        self.subscribers
            .notify(&StoreEvent::InitialBudgetChanged { amount });
        Ok(())
    }

    /// Whole days from `reference` to the next payday, floored to 1.
    pub fn days_until_payday(&self, reference: NaiveDate) -> Result<i64, BudgetError> {
        payday::days_until_payday(reference, self.payday_day)
    }

    /// Current balance spread over the days remaining until payday.
    ///
    /// The day count is floored to 1, so the division is always defined.
    pub fn daily_budget(&self, clock: &dyn Clock) -> Result<f64, BudgetError> {
        let days = self.days_until_payday(clock.today())?;
        Ok(self.current_balance() / days as f64)
    }

    /// Registers a change subscriber; the callback fires after every
    /// successful mutation.
    pub fn subscribe(
        &mut self,
        callback: impl Fn(&StoreEvent) + Send + Sync + 'static,
    ) -> SubscriberId {
        self.subscribers.subscribe(Box::new(callback))
    }

    /// Unregisters a subscriber. Returns false for unknown ids.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn flush(&self) {
        let state = BudgetState::new(self.transactions.clone(), self.initial_budget);
        if let Err(err) = self.storage.save(&state) {
            warn!("failed to persist budget state: {err}");
        }
    }
}

impl std::fmt::Debug for BudgetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BudgetStore")
            .field("transactions", &self.transactions.len())
            .field("initial_budget", &self.initial_budget)
            .field("payday_day", &self.payday_day)
            .finish()
    }
}
