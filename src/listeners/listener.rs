//! # Listener contract.
//!
//! A listener is anything with a `next(&Event<T>)` capability. The stream keeps
//! listeners as [`ListenerRef`] (`Arc<dyn Listener<T>>`); identity for
//! unsubscription is the `Arc` allocation, not value equality.

use std::sync::Arc;

use crate::error::ListenerError;
use crate::events::Event;

/// Event listener invoked synchronously for every pushed event.
///
/// ### Implementation requirements
/// - Return quickly; dispatch to later listeners waits for this one.
/// - Report failures with `Err`; panics are caught too, but the panic hook still runs.
/// - Calling `subscribe`/`unsubscribe` on the same stream from inside `next` is allowed.
pub trait Listener<T>: Send + Sync + 'static {
    /// Handles a single event.
    ///
    /// Errors and panics are reported to the stream's fault sink; peers still
    /// receive the event.
    fn next(&self, event: &Event<T>) -> Result<(), ListenerError>;

    /// Returns the listener name used in logs and panic reports.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Shared listener handle.
pub type ListenerRef<T> = Arc<dyn Listener<T>>;
