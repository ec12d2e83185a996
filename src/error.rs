//! Error types raised by listeners during dispatch.
//!
//! [`ListenerError`] covers both ways a listener can fault:
//!
//! - it returns `Err` from [`Listener::next`](crate::Listener::next);
//! - it panics, and the stream catches the unwind.
//!
//! Faults never leave [`EventStream::push`](crate::EventStream::push); they are
//! handed to the configured [`FaultSink`](crate::FaultSink) together with the
//! event being dispatched.

use std::any::Any;
use std::fmt::Display;

use thiserror::Error;

/// # Errors produced by listener dispatch.
///
/// Both variants are recovered locally by the stream: dispatch continues with
/// the next listener and the error goes to the fault sink.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListenerError {
    /// Listener returned an error for this event.
    #[error("listener failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// Listener panicked while handling the event.
    #[error("listener '{listener}' panicked: {info}")]
    Panicked {
        /// Name of the listener, as reported by [`Listener::name`](crate::Listener::name).
        listener: String,
        /// Panic message, or `"unknown panic"` for non-string payloads.
        info: String,
    },
}

impl ListenerError {
    /// Shorthand for [`ListenerError::Fail`] from anything printable.
    ///
    /// # Example
    /// ```
    /// use eventvisor::ListenerError;
    ///
    /// let err = ListenerError::fail("connection refused");
    /// assert_eq!(err.to_string(), "listener failed: connection refused");
    /// ```
    pub fn fail(error: impl Display) -> Self {
        ListenerError::Fail {
            error: error.to_string(),
        }
    }

    /// Builds a [`ListenerError::Panicked`] from a caught panic payload.
    pub(crate) fn from_panic(listener: &str, payload: Box<dyn Any + Send>) -> Self {
        let info = if let Some(msg) = payload.downcast_ref::<&'static str>() {
            (*msg).to_string()
        } else if let Some(msg) = payload.downcast_ref::<String>() {
            msg.clone()
        } else {
            "unknown panic".to_string()
        };
        ListenerError::Panicked {
            listener: listener.to_string(),
            info,
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use eventvisor::ListenerError;
    ///
    /// assert_eq!(ListenerError::fail("boom").as_label(), "listener_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ListenerError::Fail { .. } => "listener_failed",
            ListenerError::Panicked { .. } => "listener_panicked",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ListenerError::Fail { error } => format!("error: {error}"),
            ListenerError::Panicked { listener, info } => {
                format!("panic in {listener}: {info}")
            }
        }
    }

    /// True if the fault came from a caught panic.
    pub fn is_panic(&self) -> bool {
        matches!(self, ListenerError::Panicked { .. })
    }
}
