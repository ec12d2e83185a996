//! # Event listeners.
//!
//! This module provides the [`Listener`] contract and built-in implementations.
//!
//! ## Architecture
//! ```text
//! EventStream::push(event)
//!     │   (snapshot of the listener list, subscription order)
//!     ├──► listener1.next(&event)
//!     ├──► listener2.next(&event) ──► Err / panic ──► FaultSink::on_error(err, event)
//!     └──► listenerN.next(&event)
//! ```
//!
//! ## Implementing custom listeners
//! ```rust
//! use std::sync::atomic::{AtomicU64, Ordering};
//! use eventvisor::{Event, Listener, ListenerError};
//!
//! struct Clicks(AtomicU64);
//!
//! impl Listener<()> for Clicks {
//!     fn next(&self, event: &Event<()>) -> Result<(), ListenerError> {
//!         if event.is("click") {
//!             self.0.fetch_add(1, Ordering::Relaxed);
//!         }
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &str { "clicks" }
//! }
//! ```
//!
//! For one-off handlers, [`ListenerFn`] wraps a closure.

mod listener;
mod listener_fn;

#[cfg(feature = "logging")]
mod log;

pub use listener::{Listener, ListenerRef};
pub use listener_fn::ListenerFn;

#[cfg(feature = "logging")]
pub use log::LogWriter;
