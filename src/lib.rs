//! # eventvisor
//!
//! **Eventvisor** is a small push-based event stream for Rust.
//!
//! It keeps an ordered list of listeners, dispatches every pushed event to all of
//! them synchronously, isolates per-listener failures, and exposes a
//! subscribe-only [`Observable`] view for interop with reactive consumers.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │  Listener 1  │   │  Listener 2  │   │  Listener N  │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            │ subscribe        │ subscribe        │ observable().subscribe
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  EventStream                                                      │
//! │  - ListenerRegistry (ordered, copy-on-write snapshot per push)    │
//! │  - FaultSink (configured once: DeferredSink or custom)            │
//! │  - Observable (subscribe-only view, identity-stable)              │
//! └──────┬────────────────────────────────────────────────────────────┘
//!        │ push(event)
//!        ▼
//!   L1.next(&ev) ──► L2.next(&ev) ──► ... ──► LN.next(&ev)
//!                        │
//!                        └─ Err / panic ──► FaultSink::on_error(err, ev)
//! ```
//!
//! ### Lifecycle
//! ```text
//! EventStream::new()           zero listeners, fault sink fixed
//!   ├─► subscribe(l) ──► Subscription
//!   ├─► push(ev)     ──► every listener, subscription order
//!   └─► Subscription::unsubscribe() ──► future pushes skip l (idempotent)
//! ```
//!
//! ## Features
//! | Area              | Description                                                  | Key types / traits                        |
//! |-------------------|--------------------------------------------------------------|-------------------------------------------|
//! | **Stream**        | Ordered synchronous dispatch with fault isolation.           | [`EventStream`], [`StreamConfig`]         |
//! | **Listeners**     | Listener contract and closure-backed listeners.              | [`Listener`], [`ListenerFn`]              |
//! | **Faults**        | Where listener errors and panics are reported.               | [`FaultSink`], [`DeferredSink`]           |
//! | **Interop**       | Subscribe-only view and `futures::Stream` adapter.           | [`Observable`], [`EventReceiver`]         |
//! | **Errors**        | Typed listener faults.                                       | [`ListenerError`]                         |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] listener _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use eventvisor::{Event, EventStream, ListenerError, ListenerFn, StreamConfig};
//!
//! let cfg = StreamConfig::default()
//!     .named("ui")
//!     .with_on_error(|err, ev: Arc<Event<u32>>| eprintln!("{} failed: {err}", ev.kind()));
//! let stream = EventStream::with_config(cfg);
//!
//! let sub = stream.subscribe(ListenerFn::arc("printer", |ev: &Event<u32>| {
//!     println!("{} {:?}", ev.kind(), ev.detail);
//!     Ok::<_, ListenerError>(())
//! }));
//!
//! stream.push("click");
//! stream.push_with("scroll", 120);
//! sub.unsubscribe();
//! ```
mod error;
mod events;
mod listeners;
mod stream;

// ---- Public re-exports ----

pub use error::ListenerError;
pub use events::Event;
pub use listeners::{Listener, ListenerFn, ListenerRef};
pub use stream::{
    DeferredSink, EventReceiver, EventStream, FaultSink, Observable, SinkFn, StreamConfig,
    Subscribable, Subscription,
};

// Optional: expose a simple built-in logging listener (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use listeners::LogWriter;
