//! # Observable adapter.
//!
//! [`Observable`] is a subscribe-only view: it is constructed from a subscribe
//! function and exposes that capability back out, nothing else. It cannot push
//! events and cannot see the listener list.
//!
//! [`Subscribable`] is the shared capability trait, implemented by both
//! [`EventStream`](crate::EventStream) and [`Observable`], so consumers can accept
//! either without caring which one they got.

use std::fmt;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::error::ListenerError;
use crate::events::Event;
use crate::listeners::{Listener, ListenerRef};
use crate::stream::receiver::EventReceiver;
use crate::stream::subscription::Subscription;

type SubscribeFn<T> = dyn Fn(ListenerRef<T>) -> Subscription<T> + Send + Sync;

/// Anything that accepts listener subscriptions.
pub trait Subscribable<T>
where
    T: Send + Sync + 'static,
{
    /// Appends a listener and returns the handle that detaches it.
    #[must_use = "dropping the subscription leaves no way to unsubscribe"]
    fn subscribe(&self, listener: ListenerRef<T>) -> Subscription<T>;

    /// Subscribes a channel-backed listener and returns its receiving end as a
    /// [`futures::Stream`].
    ///
    /// Each event is cloned into the channel; dropping the receiver unsubscribes.
    #[must_use = "dropping the receiver unsubscribes immediately"]
    fn receiver(&self) -> EventReceiver<T>
    where
        T: Clone,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let subscription = self.subscribe(Arc::new(Forward { tx }));
        EventReceiver::new(rx, subscription)
    }
}

/// Subscribe-only view over a subscribe function.
///
/// Cheap to clone; clones share the same subscribe function.
pub struct Observable<T> {
    subscribe: Arc<SubscribeFn<T>>,
}

impl<T> Observable<T>
where
    T: Send + Sync + 'static,
{
    /// Wraps a subscribe function.
    ///
    /// ## Example
    /// ```rust
    /// use eventvisor::{EventStream, Observable};
    /// use std::sync::Arc;
    ///
    /// let stream = Arc::new(EventStream::<u32>::new());
    /// let s = Arc::clone(&stream);
    /// let view = Observable::new(move |listener| s.subscribe(listener));
    /// # let _ = view;
    /// ```
    pub fn new<F>(subscribe: F) -> Self
    where
        F: Fn(ListenerRef<T>) -> Subscription<T> + Send + Sync + 'static,
    {
        Self {
            subscribe: Arc::new(subscribe),
        }
    }

    /// Appends an observer to the underlying stream.
    ///
    /// If the stream was dropped, the returned handle is already inactive.
    #[must_use = "dropping the subscription leaves no way to unsubscribe"]
    pub fn subscribe(&self, observer: ListenerRef<T>) -> Subscription<T> {
        (self.subscribe)(observer)
    }
}

impl<T> Subscribable<T> for Observable<T>
where
    T: Send + Sync + 'static,
{
    fn subscribe(&self, listener: ListenerRef<T>) -> Subscription<T> {
        Observable::subscribe(self, listener)
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            subscribe: Arc::clone(&self.subscribe),
        }
    }
}

impl<T> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable").finish_non_exhaustive()
    }
}

/// Listener that forwards clones of each event into a channel.
struct Forward<T> {
    tx: mpsc::UnboundedSender<Event<T>>,
}

impl<T> Listener<T> for Forward<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn next(&self, event: &Event<T>) -> Result<(), ListenerError> {
        // A closed channel means the receiver is being dropped and is about to unsubscribe.
        let _ = self.tx.send(event.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "receiver"
    }
}
