//! # Reactive-stream adapter.
//!
//! [`EventReceiver`] turns a subscription into a [`futures::Stream`], for consumers
//! that prefer `while let Some(ev) = rx.next().await` over callbacks.
//!
//! ## Rules
//! - Unbounded: `push` never waits for the consumer.
//! - Dropping the receiver unsubscribes its forwarding listener.
//! - The stream never ends on its own; it yields `None` only if the forwarding
//!   listener is gone (e.g. [`close`](EventReceiver::close) was called and the
//!   buffer is drained).
//!
//! ## Example
//! ```rust
//! use futures::StreamExt;
//! use eventvisor::{EventStream, Subscribable};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let stream: EventStream<u32> = EventStream::new();
//! let mut rx = stream.observable().receiver();
//!
//! stream.push_with("tick", 1);
//! let ev = rx.next().await.unwrap();
//! assert_eq!((ev.kind(), ev.detail), ("tick", Some(1)));
//! # }
//! ```

use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::mpsc;

use crate::events::Event;
use crate::stream::subscription::Subscription;

/// Receiving end of a channel-backed subscription.
pub struct EventReceiver<T: 'static> {
    rx: mpsc::UnboundedReceiver<Event<T>>,
    subscription: Subscription<T>,
}

impl<T: 'static> EventReceiver<T> {
    pub(crate) fn new(rx: mpsc::UnboundedReceiver<Event<T>>, subscription: Subscription<T>) -> Self {
        Self { rx, subscription }
    }

    /// Unsubscribes; events already buffered can still be received.
    pub fn close(&mut self) {
        self.subscription.unsubscribe();
        self.rx.close();
    }

    /// Returns a buffered event without waiting.
    pub fn try_next(&mut self) -> Option<Event<T>> {
        self.rx.try_recv().ok()
    }
}

impl<T: 'static> Stream for EventReceiver<T> {
    type Item = Event<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().rx.poll_recv(cx)
    }
}

impl<T: 'static> Drop for EventReceiver<T> {
    fn drop(&mut self) {
        self.subscription.unsubscribe();
    }
}

impl<T: 'static> fmt::Debug for EventReceiver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventReceiver")
            .field("subscription", &self.subscription)
            .finish_non_exhaustive()
    }
}
