//! Event records delivered to listeners.
//!
//! ## Contents
//! - [`Event`] the `{ kind, detail }` record plus ordering metadata (`seq`, `at`)
//!
//! Events are built either explicitly ([`Event::new`] + [`Event::with_detail`])
//! or from a bare event type (`"click".into()`), in which case `detail` is `None`.

mod event;

pub use event::Event;
