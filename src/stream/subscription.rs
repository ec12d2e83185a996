//! # Unsubscribe handle.
//!
//! [`Subscription`] is returned by every `subscribe` call and detaches exactly one
//! registration when [`unsubscribe`](Subscription::unsubscribe) is called.
//!
//! ## Rules
//! - Idempotent: the second and later calls are no-ops.
//! - Cancels **future** deliveries only; an in-flight `push` finishes with its snapshot.
//! - Dropping the handle does not unsubscribe; the listener stays until detached.
//! - Holds weak references only, so it never keeps the stream or the listener alive.
//! - Subscribing through an [`Observable`](crate::Observable) whose stream was dropped
//!   returns an already inactive handle.

use std::fmt;
use std::sync::{Arc, Weak};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::listeners::{Listener, ListenerRef};
use crate::stream::registry::ListenerRegistry;

/// Handle that detaches one listener registration.
pub struct Subscription<T> {
    registry: Weak<ListenerRegistry<T>>,
    listener: Weak<dyn Listener<T>>,
    active: AtomicBool,
}

impl<T: 'static> Subscription<T> {
    pub(crate) fn new(registry: Weak<ListenerRegistry<T>>, listener: Weak<dyn Listener<T>>) -> Self {
        Self {
            registry,
            listener,
            active: AtomicBool::new(true),
        }
    }

    /// Handle for a listener that was never added (its stream is gone).
    pub(crate) fn detached(listener: &ListenerRef<T>) -> Self {
        tracing::debug!(listener = %listener.name(), "subscribe on dropped stream ignored");
        Self {
            registry: Weak::new(),
            listener: Arc::downgrade(listener),
            active: AtomicBool::new(false),
        }
    }

    /// Removes the listener from the stream, if still present.
    ///
    /// The first entry pointing at the same listener is removed; if the listener was
    /// subscribed several times, each registration needs its own `unsubscribe`.
    /// Never fails, including after the stream was dropped.
    pub fn unsubscribe(&self) {
        if !self.active.swap(false, Ordering::AcqRel) {
            return;
        }
        if let Some(registry) = self.registry.upgrade() {
            registry.remove(self.listener.as_ptr());
        }
    }

    /// True until [`unsubscribe`](Self::unsubscribe) is called.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}

impl<T> fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.active.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}
