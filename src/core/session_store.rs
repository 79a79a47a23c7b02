//! In-memory session history
//!
//! The store keeps every accepted entry for the lifetime of the process, in
//! insertion order, and signals subscribers once per append. Signals carry no
//! payload; subscribers read [`SessionStore::latest`] or
//! [`SessionStore::snapshot`] after being woken.

use super::session_entry::SessionEntry;
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TryRecvError, TrySendError};
use once_cell::sync::Lazy;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::time::Duration;

static GLOBAL_STORE: Lazy<Arc<SessionStore>> = Lazy::new(|| Arc::new(SessionStore::new()));

#[derive(Debug, Default)]
pub struct SessionStore {
    entries: RwLock<Vec<SessionEntry>>,
    subscribers: Mutex<Vec<Sender<()>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide store shared by loggers that were not given their own
    pub fn global() -> Arc<SessionStore> {
        Arc::clone(&GLOBAL_STORE)
    }

    /// Append an entry and signal every subscriber.
    ///
    /// The entry lock is released before subscribers are signalled, and
    /// signalling never waits on a subscriber.
    pub fn append(&self, entry: SessionEntry) {
        self.entries.write().push(entry);
        self.notify();
    }

    fn notify(&self) {
        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|sender| match sender.try_send(()) {
            // A pending signal already covers this append
            Ok(()) | Err(TrySendError::Full(())) => true,
            Err(TrySendError::Disconnected(())) => false,
        });
    }

    pub fn latest(&self) -> Option<SessionEntry> {
        self.entries.read().last().cloned()
    }

    /// Copy of the full history at call time
    pub fn snapshot(&self) -> Vec<SessionEntry> {
        self.entries.read().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Receive a signal for every append made after this call
    pub fn subscribe(&self) -> Subscription {
        let (sender, receiver) = bounded(1);
        self.subscribers.lock().push(sender);
        Subscription { receiver }
    }

    /// Number of live subscriptions as of the last append
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }
}

/// Change signal for a [`SessionStore`].
///
/// Holds at most one pending signal; appends made while a signal is pending
/// coalesce into it. Dropping the subscription unregisters it on the next
/// append.
#[derive(Debug)]
pub struct Subscription {
    receiver: Receiver<()>,
}

impl Subscription {
    /// Consume a pending signal without blocking
    pub fn try_recv(&self) -> bool {
        match self.receiver.try_recv() {
            Ok(()) => true,
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => false,
        }
    }

    /// Block until the store changes; `false` once the store is gone
    pub fn recv(&self) -> bool {
        self.receiver.recv().is_ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> bool {
        match self.receiver.recv_timeout(timeout) {
            Ok(()) => true,
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }
}
