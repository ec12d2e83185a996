//! # Function-backed listener (`ListenerFn`)
//!
//! [`ListenerFn`] wraps a closure `F: Fn(&Event<T>) -> Result<(), ListenerError>`
//! together with a name for logs.
//!
//! ## Example
//! ```rust
//! use eventvisor::{Event, EventStream, ListenerError, ListenerFn, ListenerRef};
//!
//! let stream: EventStream<u32> = EventStream::new();
//! let printer: ListenerRef<u32> = ListenerFn::arc("printer", |ev: &Event<u32>| {
//!     println!("{} {:?}", ev.kind(), ev.detail);
//!     Ok::<_, ListenerError>(())
//! });
//!
//! assert_eq!(printer.name(), "printer");
//! let _sub = stream.subscribe(printer);
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use crate::error::ListenerError;
use crate::events::Event;
use crate::listeners::Listener;

/// Function-backed listener implementation.
#[derive(Debug)]
pub struct ListenerFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> ListenerFn<F> {
    /// Creates a new function-backed listener.
    ///
    /// Prefer [`ListenerFn::arc`] when you immediately need a [`ListenerRef`](crate::ListenerRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { name: name.into(), f }
    }

    /// Creates the listener and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<T, F> Listener<T> for ListenerFn<F>
where
    F: Fn(&Event<T>) -> Result<(), ListenerError> + Send + Sync + 'static,
{
    fn next(&self, event: &Event<T>) -> Result<(), ListenerError> {
        (self.f)(event)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
