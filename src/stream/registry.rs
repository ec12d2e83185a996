//! # Listener registry - ordered, copy-on-write listener list.
//!
//! Backs both [`EventStream::subscribe`](crate::EventStream::subscribe) and the
//! [`Observable`](crate::Observable) adapter, so the two paths behave identically.
//!
//! ## Rules
//! - Insertion order is dispatch order.
//! - Duplicates are allowed; each `subscribe` adds one entry.
//! - Removal targets the **first** entry pointing at the same allocation (identity).
//! - `snapshot()` clones the inner `Arc` under the lock; mutations made while a
//!   snapshot is alive copy the list instead of touching it.
//! - Listeners are never called or dropped while the lock is held.

use std::borrow::Cow;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::listeners::{Listener, ListenerRef};
use crate::stream::subscription::Subscription;

type ListenerList<T> = Arc<Vec<ListenerRef<T>>>;

/// Ordered set of subscribed listeners.
pub(crate) struct ListenerRegistry<T> {
    listeners: Mutex<ListenerList<T>>,
    stream: Cow<'static, str>,
}

impl<T: 'static> ListenerRegistry<T> {
    /// Creates an empty registry labelled with the owning stream's name.
    pub(crate) fn new(stream: Cow<'static, str>) -> Arc<Self> {
        Arc::new(Self {
            listeners: Mutex::new(Arc::new(Vec::new())),
            stream,
        })
    }

    fn lock(&self) -> MutexGuard<'_, ListenerList<T>> {
        // The list is replaced or mutated in a single step, so a poisoned guard still holds a valid list.
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends a listener and returns the handle that detaches it.
    #[must_use = "dropping the subscription leaves no way to unsubscribe"]
    pub(crate) fn subscribe(self: &Arc<Self>, listener: ListenerRef<T>) -> Subscription<T> {
        let handle = Subscription::new(Arc::downgrade(self), Arc::downgrade(&listener));
        let name = listener.name().to_string();

        let total = {
            let mut guard = self.lock();
            let list = Arc::make_mut(&mut *guard);
            list.push(listener);
            list.len()
        };
        tracing::debug!(stream = %self.stream, listener = %name, total, "listener subscribed");
        handle
    }

    /// Removes the first entry that points at `target`.
    ///
    /// Returns `false` if no entry matches.
    pub(crate) fn remove(&self, target: *const dyn Listener<T>) -> bool {
        let (removed, total) = {
            let mut guard = self.lock();
            let Some(idx) = guard
                .iter()
                .position(|l| std::ptr::addr_eq(Arc::as_ptr(l), target))
            else {
                return false;
            };
            let list = Arc::make_mut(&mut *guard);
            (list.remove(idx), list.len())
        };
        tracing::debug!(stream = %self.stream, listener = %removed.name(), total, "listener unsubscribed");
        drop(removed);
        true
    }

    /// Returns the current listener list for one dispatch pass.
    pub(crate) fn snapshot(&self) -> ListenerList<T> {
        Arc::clone(&self.lock())
    }

    /// Number of subscribed entries (duplicates counted).
    pub(crate) fn len(&self) -> usize {
        self.lock().len()
    }

    pub(crate) fn stream_name(&self) -> &str {
        &self.stream
    }
}
