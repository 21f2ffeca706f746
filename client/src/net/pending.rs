//! Per-kind one-shot resolvers for in-flight socket requests.
//!
//! DESIGN
//! ======
//! The broker registers a waiter before sending a request; the inbound
//! handler resolves every waiter for a kind when a frame of that kind
//! arrives. Waiters registered after a frame arrived never observe it, so
//! a request can only resolve with a payload that arrived strictly after
//! the request was issued.

#[cfg(test)]
#[path = "pending_test.rs"]
mod pending_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use futures::channel::oneshot;
use serde_json::Value;

/// Registry of pending request waiters, keyed by frame kind.
///
/// Clones share the same underlying table. Everything runs on the browser
/// event loop; the mutex exists so the registry stays `Send + Sync` for
/// Leptos context storage, not because two threads ever contend for it.
#[derive(Clone, Default)]
pub struct PendingRegistry {
    waiters: Arc<Mutex<HashMap<String, Vec<oneshot::Sender<Value>>>>>,
}

impl PendingRegistry {
    /// Register a waiter for the next payload of `kind`.
    ///
    /// The returned receiver resolves when [`resolve`](Self::resolve) is
    /// next called for the kind, and is cancelled only if the registry
    /// itself goes away first.
    pub fn register(&self, kind: &str) -> oneshot::Receiver<Value> {
        let (tx, rx) = oneshot::channel();
        if let Ok(mut waiters) = self.waiters.lock() {
            waiters.entry(kind.to_owned()).or_default().push(tx);
        }
        rx
    }

    /// Deliver `payload` to every waiter currently registered for `kind`,
    /// draining them. Returns the number of waiters notified.
    ///
    /// Concurrent waiters for one kind all observe the same payload; the
    /// protocol has no correlation IDs to tell them apart.
    pub fn resolve(&self, kind: &str, payload: &Value) -> usize {
        let Some(waiters) = self.waiters.lock().ok().and_then(|mut w| w.remove(kind)) else {
            return 0;
        };
        let mut notified = 0;
        for tx in waiters {
            if tx.send(payload.clone()).is_ok() {
                notified += 1;
            }
        }
        notified
    }

    /// Number of waiters currently registered for `kind`.
    #[must_use]
    pub fn waiting(&self, kind: &str) -> usize {
        self.waiters
            .lock()
            .map_or(0, |waiters| waiters.get(kind).map_or(0, Vec::len))
    }
}
