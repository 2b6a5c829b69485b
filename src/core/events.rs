//! Change notification for store mutations.
//!
//! Display layers register callbacks instead of watching the store's fields;
//! the store emits an event after every successful mutation.

use uuid::Uuid;

/// Emitted by the store once a mutation has been applied and flushed.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    TransactionAdded { id: Uuid },
    InitialBudgetChanged { amount: f64 },
}

/// Handle returned by `subscribe`, used to unregister the callback later.
pub type SubscriberId = u64;

type Callback = Box<dyn Fn(&StoreEvent) + Send + Sync>;

/// Registry of change subscribers.
pub(crate) struct Subscribers {
    next_id: SubscriberId,
    callbacks: Vec<(SubscriberId, Callback)>,
}

impl Subscribers {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            callbacks: Vec::new(),
        }
    }

    pub(crate) fn subscribe(&mut self, callback: Callback) -> SubscriberId {
        let id = self.next_id;
        self.next_id += 1;
        self.callbacks.push((id, callback));
        id
    }

    /// Returns true when the id was registered.
    pub(crate) fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(registered, _)| *registered != id);
        self.callbacks.len() != before
    }

    pub(crate) fn notify(&self, event: &StoreEvent) {
        for (_, callback) in &self.callbacks {
            callback(event);
        }
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.callbacks.len())
            .finish()
    }
}
