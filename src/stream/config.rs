//! # Stream configuration.
//!
//! Provides [`StreamConfig`] - settings applied once when an
//! [`EventStream`](crate::EventStream) is created.
//!
//! ## Sentinel values
//! - `on_error = None` → [`DeferredSink`] (faults are reported asynchronously via `tracing`,
//!   or on stderr when no subscriber is installed)

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::error::ListenerError;
use crate::events::Event;
use crate::stream::sink::{DeferredSink, FaultSink, SinkFn};

/// Configuration for an event stream.
///
/// ## Field semantics
/// - `name`: label attached to the stream's log records
/// - `on_error`: fault sink for listener errors and panics (`None` = [`DeferredSink`])
pub struct StreamConfig<T> {
    /// Stream name used in logs.
    pub name: Cow<'static, str>,

    /// Fault sink; fixed for the lifetime of the stream.
    pub on_error: Option<Arc<dyn FaultSink<T>>>,
}

impl<T> StreamConfig<T> {
    /// Sets the stream name.
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Installs a prepared fault sink.
    pub fn with_sink(mut self, sink: Arc<dyn FaultSink<T>>) -> Self {
        self.on_error = Some(sink);
        self
    }

    /// Installs a closure as the fault sink.
    ///
    /// ## Example
    /// ```rust
    /// use eventvisor::{EventStream, StreamConfig};
    ///
    /// let cfg = StreamConfig::<u32>::default()
    ///     .named("clicks")
    ///     .with_on_error(|err, ev| eprintln!("{} on {}", err, ev.kind()));
    /// let stream = EventStream::with_config(cfg);
    /// assert_eq!(stream.name(), "clicks");
    /// ```
    pub fn with_on_error<F>(self, f: F) -> Self
    where
        T: 'static,
        F: Fn(ListenerError, Arc<Event<T>>) + Send + Sync + 'static,
    {
        self.with_sink(Arc::new(SinkFn(f)))
    }

    /// Resolves the configured sink, falling back to [`DeferredSink`].
    pub(crate) fn sink(&self) -> Arc<dyn FaultSink<T>>
    where
        T: Send + Sync + 'static,
    {
        match &self.on_error {
            Some(sink) => Arc::clone(sink),
            None => Arc::new(DeferredSink),
        }
    }
}

impl<T> Default for StreamConfig<T> {
    /// Default configuration:
    ///
    /// - `name = "event-stream"`
    /// - `on_error = None` ([`DeferredSink`])
    fn default() -> Self {
        Self {
            name: Cow::Borrowed("event-stream"),
            on_error: None,
        }
    }
}

impl<T> Clone for StreamConfig<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            on_error: self.on_error.clone(),
        }
    }
}

impl<T> fmt::Debug for StreamConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamConfig")
            .field("name", &self.name)
            .field("on_error", &self.on_error.as_ref().map_or("default", |_| "custom"))
            .finish()
    }
}
