//! # Fault sinks.
//!
//! A [`FaultSink`] receives every listener fault together with the event being
//! dispatched. It is configured once per stream and never changes afterwards.
//!
//! - [`DeferredSink`] (default) reports the fault on a later scheduler turn so
//!   dispatch is never unwound, while the fault stays visible in the logs (or on
//!   stderr when no `tracing` subscriber is installed).
//! - [`SinkFn`] adapts a closure; see [`StreamConfig::with_on_error`](crate::StreamConfig::with_on_error).

use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::subscriber::NoSubscriber;

use crate::error::ListenerError;
use crate::events::Event;

/// Capability that receives listener faults.
///
/// Called synchronously from `push`, once per faulting listener, in dispatch order.
/// Implementations should not panic: a panic here is not a listener fault and
/// unwinds out of `push`.
pub trait FaultSink<T>: Send + Sync + 'static {
    /// Handles one listener fault for `event`.
    fn on_error(&self, error: ListenerError, event: Arc<Event<T>>);
}

/// Closure-backed fault sink.
pub struct SinkFn<F>(pub F);

impl<T, F> FaultSink<T> for SinkFn<F>
where
    F: Fn(ListenerError, Arc<Event<T>>) + Send + Sync + 'static,
{
    fn on_error(&self, error: ListenerError, event: Arc<Event<T>>) {
        (self.0)(error, event)
    }
}

/// Default sink: surfaces faults as `error`-level `tracing` records.
///
/// Inside a tokio runtime the report is spawned as a separate task and runs on a
/// later scheduler turn. If that task is dropped before it runs (the runtime shuts
/// down first), the report is written while it is dropped. Outside a runtime there
/// is no later turn to defer to, so the record is written immediately.
///
/// With no `tracing` subscriber installed the record would go nowhere, so the
/// report is printed to stderr instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeferredSink;

impl<T> FaultSink<T> for DeferredSink
where
    T: Send + Sync + 'static,
{
    fn on_error(&self, error: ListenerError, event: Arc<Event<T>>) {
        let pending = PendingReport {
            fault: Some((error, Arc::clone(&event.kind), event.seq)),
        };

        match Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move { drop(pending) });
            }
            Err(_) => drop(pending),
        }
    }
}

/// Fault report written exactly once, when dropped.
struct PendingReport {
    fault: Option<(ListenerError, Arc<str>, u64)>,
}

impl Drop for PendingReport {
    fn drop(&mut self) {
        if let Some((error, kind, seq)) = self.fault.take() {
            report(&error, &kind, seq);
        }
    }
}

fn report(error: &ListenerError, kind: &str, seq: u64) {
    if !has_subscriber() {
        eprintln!(
            "[eventvisor] unhandled listener fault: {} event={kind} seq={seq}",
            error.as_message()
        );
        return;
    }
    tracing::error!(
        event = %kind,
        seq,
        label = error.as_label(),
        "unhandled listener fault: {}",
        error.as_message()
    );
}

/// True if the current thread's `tracing` dispatcher records anything.
fn has_subscriber() -> bool {
    tracing::dispatcher::get_default(|d| !d.is::<NoSubscriber>())
}
