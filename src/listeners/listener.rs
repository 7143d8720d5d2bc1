//! # Listener capability.
//!
//! [`Listener`] is the minimal contract for anything that can receive an
//! event: a single async method, no return value. Containers in this crate
//! hold listeners through [`ListenerRef`], a shared handle whose allocation
//! identity is what add/remove matching is based on.
//!
//! ## Rules
//! - `on_event` may be called concurrently from different tasks.
//! - `on_event` must not panic. A panic is not contained here; it unwinds
//!   into the caller of the dispatching container.
//! - `on_event` must not call back into the mutation methods of the
//!   container that holds the listener. With [`SyncSet`](crate::SyncSet)
//!   that deadlocks; with [`Set`](crate::Set) the borrow rules already
//!   forbid it.
//!
//! ## Implementing
//! Most callers never implement this trait by hand: closures and channel
//! send handles are adapted with [`as_listener`](crate::as_listener).
//! Implement it directly for stateful sinks:
//!
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use async_trait::async_trait;
//! use fanout::Listener;
//!
//! #[derive(Default)]
//! struct Counter {
//!     seen: AtomicUsize,
//! }
//!
//! #[async_trait]
//! impl Listener<u64> for Counter {
//!     async fn on_event(&self, _event: &u64) {
//!         self.seen.fetch_add(1, Ordering::Relaxed);
//!     }
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;

/// A sink for events of type `E`.
///
/// See the [module docs](self) for the delivery contract.
#[async_trait]
pub trait Listener<E>: Send + Sync {
    /// Receives one event.
    ///
    /// Delivery happens in the task that called the container's send
    /// method; a slow implementation delays every listener dispatched
    /// after it, and the sender itself.
    async fn on_event(&self, event: &E);
}

/// Shared handle to a listener.
///
/// This is what the containers store. Identity matters: removal compares
/// handles by allocation ([`Arc::ptr_eq`]), so clones of one handle refer
/// to the same registered listener, while adapting the same underlying
/// sink twice yields two unrelated listeners. Keep the handle around if
/// you intend to remove the listener later.
pub type ListenerRef<E> = Arc<dyn Listener<E>>;
