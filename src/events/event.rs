//! # Events pushed through an [`EventStream`](crate::EventStream).
//!
//! An [`Event`] carries an event type (`kind`) and an optional payload
//! (`detail`). String inputs are normalized into this record form exactly once,
//! before dispatch, so every listener observes the same value.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases monotonically
//! across all streams in the process. Dispatch order within a stream does not depend on it.
//!
//! ## Example
//! ```rust
//! use eventvisor::Event;
//!
//! let click: Event<(i32, i32)> = Event::new("click").with_detail((1, 2));
//! assert_eq!(click.kind(), "click");
//! assert_eq!(click.detail, Some((1, 2)));
//!
//! let bare: Event<(i32, i32)> = "click".into();
//! assert!(bare.detail.is_none());
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Event record with an optional detail payload.
///
/// - `kind`: the event type (e.g. `"click"`)
/// - `detail`: payload, `None` when the event was pushed without one
/// - `seq` / `at`: metadata set at construction
#[derive(Clone, Debug)]
pub struct Event<T> {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event type.
    pub kind: Arc<str>,
    /// Optional payload. Omitted and explicitly empty details are both `None`.
    pub detail: Option<T>,
}

impl<T> Event<T> {
    /// Creates an event of the given type without detail.
    pub fn new(kind: impl Into<Arc<str>>) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind: kind.into(),
            detail: None,
        }
    }

    /// Attaches a detail payload.
    #[inline]
    pub fn with_detail(mut self, detail: T) -> Self {
        self.detail = Some(detail);
        self
    }

    /// Returns the event type.
    #[inline]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// True if the event type equals `kind`.
    #[inline]
    pub fn is(&self, kind: &str) -> bool {
        &*self.kind == kind
    }
}

impl<T> From<&str> for Event<T> {
    fn from(kind: &str) -> Self {
        Event::new(kind)
    }
}

impl<T> From<String> for Event<T> {
    fn from(kind: String) -> Self {
        Event::new(kind)
    }
}

impl<T> From<Arc<str>> for Event<T> {
    fn from(kind: Arc<str>) -> Self {
        Event::new(kind)
    }
}
