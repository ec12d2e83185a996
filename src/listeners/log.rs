//! # LogWriter - simple event printer
//!
//! A minimal listener that writes incoming [`Event`]s through `tracing`.
//! Use it for test or demo.
//!
//! ## Example output
//! ```text
//! INFO eventvisor::listeners::log: [event] kind="click" seq=4 detail=Some((1, 2))
//! INFO eventvisor::listeners::log: [event] kind="close" seq=5 detail=None
//! ```

use std::fmt::Debug;

use crate::error::ListenerError;
use crate::events::Event;
use crate::listeners::Listener;

/// Event writer listener.
#[derive(Default, Debug, Clone, Copy)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<T> Listener<T> for LogWriter
where
    T: Debug + Send + Sync + 'static,
{
    fn next(&self, e: &Event<T>) -> Result<(), ListenerError> {
        tracing::info!("[event] kind={:?} seq={} detail={:?}", e.kind(), e.seq, e.detail);
        Ok(())
    }

    fn name(&self) -> &str {
        "LogWriter"
    }
}
