//! # fanout
//!
//! **fanout** is a small in-process event notification primitive for Rust.
//!
//! It lets subsystems register heterogeneous event sinks ("listeners")
//! against a typed event channel and broadcast events to all of them. The
//! crate is a building block for larger software, not a standalone
//! runtime: there is no background machinery, no queues, no threads of
//! its own. Broadcasts fan out synchronously in the calling task.
//!
//! ## Architecture
//! ```text
//!  sinks                      adaptation             containers
//!
//!  |event| { .. }     ──┐
//!  mpsc::Sender<E>    ──┼── as_listener ──► ListenerRef<E> ──┐
//!  impl Listener<E>   ──┘    (identity       (shared handle) │
//!                             handle)                        ▼
//!                                              ┌──────────────────────┐
//!  add_all / remove_all ── one atomic batch ──►│ Set<E> / SyncSet<E>  │
//!                                              └──────────┬───────────┘
//!                                                         │ send(&event)
//!                                           ┌─────────────┼─────────────┐
//!                                           ▼             ▼             ▼
//!                                      listener 1    listener 2    listener N
//!                                      (sequential, in the sending task)
//! ```
//!
//! `SyncSet` guards the container with one reader-writer lock: mutations
//! (`clear`, `add`, `remove`) take it exclusively and are atomic per
//! batch; broadcasts (`send`) share it, so independent broadcasts run in
//! parallel while no mutation can interleave with any of them.
//!
//! ## Features
//! | Area            | Description                                                | Key types / functions           |
//! |-----------------|------------------------------------------------------------|---------------------------------|
//! | **Capability**  | The contract for receiving one event.                      | [`Listener`], [`ListenerRef`]   |
//! | **Adaptation**  | Callbacks and mpsc send handles as removable listeners.    | [`as_listener`], [`ListenerFn`] |
//! | **Containers**  | Plain and lock-guarded listener sets.                      | [`Set`], [`SyncSet`]            |
//! | **Integration** | The concurrent dispatch contract and typed batch helpers.  | [`Dispatcher`], [`add_all`]     |
//!
//! ## Optional features
//! - `logging`: exports [`LogListener`], a listener that records events
//!   through the `log` facade _(bring-up/demo aid)_.
//!
//! ## Identity and removal
//! Listeners are held as [`ListenerRef`] handles and matched by
//! allocation identity. Keep a clone of the handle returned by
//! [`as_listener`] (or of your own `Arc`) to remove the listener later;
//! adapting the same sink twice yields two unrelated listeners.
//!
//! ## Blocking contract
//! Delivery runs listener by listener in the broadcasting task. A
//! channel-backed listener whose buffer is full suspends the broadcast
//! until the channel drains; there is no timeout. Callers that need
//! bounded broadcast latency choose buffer sizes (or unbounded channels)
//! at the call site.
//!
//! ## Example
//! ```rust
//! use fanout::{as_listener, SyncSet};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let changes: SyncSet<u64> = SyncSet::new();
//!
//!     // A channel-backed listener, removable via its handle.
//!     let (tx, mut rx) = tokio::sync::mpsc::channel::<u64>(8);
//!     let audit = as_listener(tx);
//!     changes.add([audit.clone()]).await;
//!
//!     changes.send(&42).await;
//!     assert_eq!(rx.recv().await, Some(42));
//!
//!     changes.remove([audit]).await;
//!     changes.send(&43).await;
//!     assert!(rx.try_recv().is_err());
//! }
//! ```

mod dispatch;
mod listeners;

// ---- Public re-exports ----

pub use dispatch::{add_all, remove_all, Dispatcher, Set, SyncSet};
pub use listeners::{as_listener, ChanSink, FnSink, IntoListener, Listener, ListenerFn, ListenerRef};

// Optional: expose a simple log-facade listener (demo/bring-up).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use listeners::LogListener;
