//! # Push-based event stream.
//!
//! [`EventStream`] holds an ordered list of listeners and dispatches each pushed
//! event to all of them, synchronously and in subscription order.
//!
//! ## Architecture
//! ```text
//!   subscribe(listener) ──► ListenerRegistry (Mutex<Arc<Vec<ListenerRef>>>)
//!          │                         │
//!          ▼                         │ snapshot (Arc clone) per push
//!   Subscription::unsubscribe()      ▼
//!   (first entry by identity)   push(event) ──► next() per listener
//!                                                  │
//!                                                  └─► Err / panic ──► FaultSink
//!
//!   Observable ── subscribe only ──► ListenerRegistry
//!        └──► receiver() ──► EventReceiver (futures::Stream)
//! ```
//!
//! ## Rules
//! - **Ordering**: listeners see events in subscription order.
//! - **Isolation**: a failing or panicking listener never stops delivery to its peers.
//! - **Snapshot dispatch**: subscribe/unsubscribe during `push` applies to the next push.
//! - **Infallible surface**: `push`, `subscribe` and `unsubscribe` never return errors.

mod config;
mod event_stream;
mod observable;
mod receiver;
mod registry;
mod sink;
mod subscription;

pub use config::StreamConfig;
pub use event_stream::EventStream;
pub use observable::{Observable, Subscribable};
pub use receiver::EventReceiver;
pub use sink::{DeferredSink, FaultSink, SinkFn};
pub use subscription::Subscription;
