//! # Basic Event Stream Example
//!
//! Subscribes a few listeners, pushes events, shows fault isolation and
//! consumes the observable view as a `futures::Stream`.
//!
//! ## Run
//! ```bash
//! RUST_LOG=debug cargo run --example basic --features logging
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use eventvisor::{
    Event, EventStream, ListenerError, ListenerFn, ListenerRef, LogWriter, StreamConfig,
    Subscribable,
};
use futures::StreamExt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
struct Pointer {
    x: i32,
    y: i32,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Default config: faults are reported through tracing on a later scheduler turn.
    let stream: EventStream<Pointer> = EventStream::with_config(StreamConfig::default().named("pointer"));

    let clicks = Arc::new(AtomicU64::new(0));
    let c = Arc::clone(&clicks);
    let counter: ListenerRef<Pointer> = ListenerFn::arc("clicks", move |ev: &Event<Pointer>| {
        if ev.is("click") {
            c.fetch_add(1, Ordering::Relaxed);
        }
        Ok::<_, ListenerError>(())
    });
    let picky: ListenerRef<Pointer> = ListenerFn::arc("picky", |ev: &Event<Pointer>| match &ev.detail {
        Some(p) if p.x < 0 || p.y < 0 => Err(ListenerError::fail(format!("off-screen: {p:?}"))),
        _ => Ok(()),
    });

    let _log = stream.subscribe(Arc::new(LogWriter::new()));
    let count_sub = stream.subscribe(counter);
    let _picky = stream.subscribe(picky);
    let mut rx = stream.observable().receiver();

    stream.push_with("click", Pointer { x: 10, y: 20 });
    stream.push_with("click", Pointer { x: -1, y: 5 });
    stream.push("leave");

    count_sub.unsubscribe();
    stream.push_with("click", Pointer { x: 0, y: 0 });

    rx.close();
    while let Some(ev) = rx.next().await {
        println!("receiver: {} {:?}", ev.kind(), ev.detail);
    }

    // Let the deferred fault report run.
    tokio::task::yield_now().await;

    println!();
    println!("Clicks counted: {}", clicks.load(Ordering::Relaxed));
    println!("Listeners left: {}", stream.len());
}
