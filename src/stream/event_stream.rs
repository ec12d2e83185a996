//! # EventStream - synchronous fan-out to subscribed listeners.
//!
//! ## Dispatch
//! ```text
//! push(event)
//!     │  normalize once ──► Arc<Event<T>>
//!     │  snapshot listener list
//!     ├──► L1.next(&event)
//!     ├──► L2.next(&event) ── Err / panic ──► on_error(err, event)
//!     └──► LN.next(&event)        (dispatch continues)
//! ```
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use eventvisor::{Event, EventStream, ListenerError, ListenerFn, ListenerRef};
//!
//! let stream: EventStream<u32> = EventStream::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let s = Arc::clone(&seen);
//! let l: ListenerRef<u32> = ListenerFn::arc("recorder", move |ev: &Event<u32>| {
//!     s.lock().unwrap().push((ev.kind().to_string(), ev.detail));
//!     Ok::<_, ListenerError>(())
//! });
//!
//! let sub = stream.subscribe(l);
//! stream.push("click");
//! stream.push_with("move", 7);
//! sub.unsubscribe();
//! stream.push("ignored");
//!
//! assert_eq!(
//!     *seen.lock().unwrap(),
//!     vec![("click".to_string(), None), ("move".to_string(), Some(7))]
//! );
//! ```

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::error::ListenerError;
use crate::events::Event;
use crate::listeners::ListenerRef;
use crate::stream::config::StreamConfig;
use crate::stream::observable::{Observable, Subscribable};
use crate::stream::registry::ListenerRegistry;
use crate::stream::sink::FaultSink;
use crate::stream::subscription::Subscription;

/// Push-based notification hub.
///
/// - Listeners are called in subscription order, synchronously, on the pushing thread.
/// - Listener errors and panics go to the configured [`FaultSink`]; `push` never fails.
/// - [`observable`](Self::observable) exposes a subscribe-only view of the stream.
///
/// `EventStream` is `Send + Sync`; concurrent `push` calls each dispatch over their own snapshot.
pub struct EventStream<T> {
    registry: Arc<ListenerRegistry<T>>,
    on_error: Arc<dyn FaultSink<T>>,
    observable: Observable<T>,
}

impl<T> EventStream<T>
where
    T: Send + Sync + 'static,
{
    /// Creates a stream with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StreamConfig::default())
    }

    /// Creates a stream with zero listeners and the given configuration.
    #[must_use]
    pub fn with_config(cfg: StreamConfig<T>) -> Self {
        let on_error = cfg.sink();
        let registry = ListenerRegistry::new(cfg.name);
        let for_adapter = Arc::downgrade(&registry);
        let observable = Observable::new(move |listener| match for_adapter.upgrade() {
            Some(registry) => registry.subscribe(listener),
            None => Subscription::detached(&listener),
        });

        Self {
            registry,
            on_error,
            observable,
        }
    }

    /// Appends a listener and returns the handle that detaches it.
    ///
    /// Subscribing the same listener twice delivers every event to it twice.
    #[must_use = "dropping the subscription leaves no way to unsubscribe"]
    pub fn subscribe(&self, listener: ListenerRef<T>) -> Subscription<T> {
        self.registry.subscribe(listener)
    }

    /// Pushes an event to all current listeners.
    ///
    /// Accepts a prepared [`Event`] or a bare event type (`&str`, `String`), which
    /// becomes an event without detail.
    pub fn push(&self, event: impl Into<Event<T>>) {
        self.push_arc(Arc::new(event.into()));
    }

    /// Pushes an event of type `kind` carrying `detail`.
    pub fn push_with(&self, kind: impl Into<Arc<str>>, detail: T) {
        self.push(Event::new(kind).with_detail(detail));
    }

    /// Pushes a shared event; every listener observes this exact allocation.
    ///
    /// Listeners subscribed during this call do not receive the event; listeners
    /// removed during this call still do if they had not been reached yet.
    pub fn push_arc(&self, event: Arc<Event<T>>) {
        let listeners = self.registry.snapshot();

        for listener in listeners.iter() {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| listener.next(&event)));
            let err = match outcome {
                Ok(Ok(())) => continue,
                Ok(Err(err)) => err,
                Err(payload) => ListenerError::from_panic(listener.name(), payload),
            };

            tracing::debug!(
                stream = %self.registry.stream_name(),
                listener = %listener.name(),
                event = %event.kind(),
                seq = event.seq,
                label = err.as_label(),
                "listener fault"
            );
            self.on_error.on_error(err, Arc::clone(&event));
        }
    }

    /// Subscribe-only view of this stream; the same instance on every call.
    #[inline]
    pub fn observable(&self) -> &Observable<T> {
        &self.observable
    }

    /// Number of subscribed entries (duplicates counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// True if there are no listeners.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stream name from [`StreamConfig::name`].
    pub fn name(&self) -> &str {
        self.registry.stream_name()
    }
}

impl<T> Default for EventStream<T>
where
    T: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Subscribable<T> for EventStream<T>
where
    T: Send + Sync + 'static,
{
    fn subscribe(&self, listener: ListenerRef<T>) -> Subscription<T> {
        EventStream::subscribe(self, listener)
    }
}

impl<T> fmt::Debug for EventStream<T>
where
    T: Send + Sync + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventStream")
            .field("name", &self.name())
            .field("listeners", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::listeners::ListenerFn;

    type Log = Arc<Mutex<Vec<String>>>;

    fn recorder(name: &'static str, log: &Log) -> ListenerRef<u32> {
        let log = Arc::clone(log);
        ListenerFn::arc(name, move |ev: &Event<u32>| -> Result<(), ListenerError> {
            log.lock().unwrap().push(format!("{name}:{}", ev.kind()));
            Ok(())
        })
    }

    fn collecting_stream() -> (EventStream<u32>, Arc<Mutex<Vec<(ListenerError, String)>>>) {
        let faults = Arc::new(Mutex::new(Vec::new()));
        let f = Arc::clone(&faults);
        let cfg = StreamConfig::<u32>::default().with_on_error(move |err, ev: Arc<Event<u32>>| {
            f.lock().unwrap().push((err, ev.kind().to_string()));
        });
        (EventStream::with_config(cfg), faults)
    }

    #[test]
    fn test_delivery_order() {
        let stream: EventStream<u32> = EventStream::new();
        let log: Log = Arc::default();
        let _a = stream.subscribe(recorder("l1", &log));
        let _b = stream.subscribe(recorder("l2", &log));
        let _c = stream.subscribe(recorder("l3", &log));

        stream.push("a");
        stream.push("b");

        assert_eq!(
            *log.lock().unwrap(),
            ["l1:a", "l2:a", "l3:a", "l1:b", "l2:b", "l3:b"]
        );
    }

    #[test]
    fn test_error_is_isolated_and_reported_once() {
        let (stream, faults) = collecting_stream();
        let log: Log = Arc::default();
        let _a = stream.subscribe(recorder("l1", &log));
        let _b = stream.subscribe(ListenerFn::arc("broken", |_: &Event<u32>| -> Result<(), ListenerError> {
            Err(ListenerError::fail("boom"))
        }));
        let _c = stream.subscribe(recorder("l3", &log));

        stream.push("a");

        assert_eq!(*log.lock().unwrap(), ["l1:a", "l3:a"]);
        let faults = faults.lock().unwrap();
        assert_eq!(faults.len(), 1);
        assert_eq!(faults[0], (ListenerError::fail("boom"), "a".to_string()));
    }

    #[test]
    fn test_panic_is_isolated_and_reported() {
        let (stream, faults) = collecting_stream();
        let log: Log = Arc::default();
        let _a = stream.subscribe(ListenerFn::arc("explodes", |_: &Event<u32>| -> Result<(), ListenerError> {
            panic!("kaboom")
        }));
        let _b = stream.subscribe(recorder("l2", &log));

        stream.push("a");

        assert_eq!(*log.lock().unwrap(), ["l2:a"]);
        let faults = faults.lock().unwrap();
        assert_eq!(
            faults[0].0,
            ListenerError::Panicked {
                listener: "explodes".into(),
                info: "kaboom".into()
            }
        );
    }

    #[test]
    fn test_all_listeners_observe_same_event() {
        let stream: EventStream<u32> = EventStream::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut subs = Vec::new();
        for _ in 0..3 {
            let s = Arc::clone(&seen);
            subs.push(stream.subscribe(ListenerFn::arc("ptr", move |ev: &Event<u32>| -> Result<(), ListenerError> {
                s.lock().unwrap().push(ev as *const Event<u32> as usize);
                Ok(())
            })));
        }

        stream.push_with("click", 1);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert!(seen.iter().all(|p| *p == seen[0]));
    }

    #[test]
    fn test_string_normalization() {
        let stream: EventStream<u32> = EventStream::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = Arc::clone(&seen);
        let _sub = stream.subscribe(ListenerFn::arc("detail", move |ev: &Event<u32>| -> Result<(), ListenerError> {
            s.lock().unwrap().push((ev.kind().to_string(), ev.detail));
            Ok(())
        }));

        stream.push("click");
        stream.push_with("click", 1);
        stream.push(Event::new("move").with_detail(2_u32));

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                ("click".to_string(), None),
                ("click".to_string(), Some(1)),
                ("move".to_string(), Some(2)),
            ]
        );
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let stream: EventStream<u32> = EventStream::new();
        let log: Log = Arc::default();
        let sub = stream.subscribe(recorder("l1", &log));

        sub.unsubscribe();
        assert!(!sub.is_active());
        assert!(stream.is_empty());
        sub.unsubscribe();
        assert!(stream.is_empty());

        stream.push("a");
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_subscription() {
        let stream: EventStream<u32> = EventStream::new();
        let log: Log = Arc::default();
        let l = recorder("dup", &log);
        let first = stream.subscribe(Arc::clone(&l));
        let second = stream.subscribe(Arc::clone(&l));

        stream.push("a");
        assert_eq!(*log.lock().unwrap(), ["dup:a", "dup:a"]);

        first.unsubscribe();
        first.unsubscribe();
        assert_eq!(stream.len(), 1);
        stream.push("b");
        assert_eq!(log.lock().unwrap().len(), 3);

        second.unsubscribe();
        assert!(stream.is_empty());
    }

    #[test]
    fn test_unsubscribe_during_dispatch_does_not_skip_peers() {
        let stream: Arc<EventStream<u32>> = Arc::new(EventStream::new());
        let log: Log = Arc::default();
        let slot: Arc<Mutex<Option<Subscription<u32>>>> = Arc::default();

        let own = Arc::clone(&slot);
        let l = Arc::clone(&log);
        let leaver = ListenerFn::arc("leaver", move |ev: &Event<u32>| -> Result<(), ListenerError> {
            l.lock().unwrap().push(format!("leaver:{}", ev.kind()));
            if let Some(sub) = own.lock().unwrap().as_ref() {
                sub.unsubscribe();
            }
            Ok(())
        });
        *slot.lock().unwrap() = Some(stream.subscribe(leaver));
        let _b = stream.subscribe(recorder("l2", &log));
        let _c = stream.subscribe(recorder("l3", &log));

        stream.push("a");
        stream.push("b");

        assert_eq!(
            *log.lock().unwrap(),
            ["leaver:a", "l2:a", "l3:a", "l2:b", "l3:b"]
        );
    }

    #[test]
    fn test_subscribe_during_dispatch_applies_to_next_push() {
        let stream: Arc<EventStream<u32>> = Arc::new(EventStream::new());
        let log: Log = Arc::default();

        let weak = Arc::downgrade(&stream);
        let l = Arc::clone(&log);
        let late = recorder("late", &log);
        let _a = stream.subscribe(ListenerFn::arc("adder", move |ev: &Event<u32>| -> Result<(), ListenerError> {
            l.lock().unwrap().push(format!("adder:{}", ev.kind()));
            if ev.is("a") {
                if let Some(stream) = weak.upgrade() {
                    let _ = stream.subscribe(Arc::clone(&late));
                }
            }
            Ok(())
        }));

        stream.push("a");
        stream.push("b");

        assert_eq!(*log.lock().unwrap(), ["adder:a", "adder:b", "late:b"]);
    }

    #[test]
    fn test_unsubscribe_after_stream_dropped() {
        let stream: EventStream<u32> = EventStream::new();
        let log: Log = Arc::default();
        let sub = stream.subscribe(recorder("l1", &log));
        drop(stream);
        sub.unsubscribe();
        assert!(!sub.is_active());
    }

    #[test]
    fn test_observable_is_identity_stable() {
        let stream: EventStream<u32> = EventStream::new();
        assert!(std::ptr::eq(stream.observable(), stream.observable()));
    }

    #[test]
    fn test_observable_outliving_stream_gives_inactive_handle() {
        let stream: EventStream<u32> = EventStream::new();
        let view = stream.observable().clone();
        drop(stream);

        let log: Log = Arc::default();
        let l = recorder("late", &log);
        let sub = view.subscribe(Arc::clone(&l));

        assert!(!sub.is_active());
        assert_eq!(Arc::strong_count(&l), 1);
        sub.unsubscribe();
    }

    #[test]
    fn test_observable_shares_listener_list() {
        let stream: EventStream<u32> = EventStream::new();
        let log: Log = Arc::default();
        let _a = stream.subscribe(recorder("direct", &log));
        let via = stream.observable().subscribe(recorder("adapter", &log));
        assert_eq!(stream.len(), 2);

        stream.push("a");
        via.unsubscribe();
        stream.push("b");

        assert_eq!(
            *log.lock().unwrap(),
            ["direct:a", "adapter:a", "direct:b"]
        );
    }

    #[test]
    fn test_default_sink_keeps_dispatching() {
        let stream: EventStream<u32> = EventStream::new();
        let log: Log = Arc::default();
        let _a = stream.subscribe(ListenerFn::arc("broken", |_: &Event<u32>| -> Result<(), ListenerError> {
            Err(ListenerError::fail("boom"))
        }));
        let _b = stream.subscribe(recorder("l2", &log));

        stream.push("a");
        assert_eq!(*log.lock().unwrap(), ["l2:a"]);
    }

    #[test]
    fn test_concurrent_push_and_subscribe() {
        let stream: Arc<EventStream<u32>> = Arc::new(EventStream::new());
        let log: Log = Arc::default();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let stream = Arc::clone(&stream);
                let log = Arc::clone(&log);
                std::thread::spawn(move || {
                    let sub = stream.subscribe(recorder("t", &log));
                    for _ in 0..10 {
                        stream.push_with("tick", i);
                    }
                    sub.unsubscribe();
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert!(stream.is_empty());
        assert!(log.lock().unwrap().len() >= 40);
    }
}
