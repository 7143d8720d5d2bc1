//! # Dispatcher contract and typed batch helpers.
//!
//! [`Dispatcher`] is the integration surface host subsystems program
//! against: clear, add, remove, send. The contract requires concurrent
//! safety, so in this crate it is implemented by
//! [`SyncSet`](crate::SyncSet); the unsynchronized
//! [`Set`](crate::Set) is a building block, not a `Dispatcher`.
//!
//! [`add_all`] and [`remove_all`] accept batches of any concrete listener
//! type shared as `Arc<L>` and forward them as **one** call, so that under
//! a synchronized dispatcher the whole batch lands inside a single
//! critical section. A broadcast racing with the batch observes either
//! none of it or all of it.

use std::slice;
use std::sync::Arc;

use async_trait::async_trait;

use crate::listeners::{Listener, ListenerRef};

/// Manages a collection of listeners and dispatches events to them.
///
/// No ordering is guaranteed: the order in which listeners were added is
/// not necessarily the order in which they are invoked, and the order may
/// change between sends.
///
/// Implementations must be safe for concurrent access; any method may be
/// called from any task at any time.
#[async_trait]
pub trait Dispatcher<E: 'static>: Send + Sync {
    /// Removes all listeners.
    async fn clear(&self);

    /// Adds listeners.
    ///
    /// A caller that intends to remove a listener later must retain a
    /// clone of the exact handle it adds; matching is by allocation
    /// identity.
    async fn add(&self, to_add: &[ListenerRef<E>]);

    /// Removes listeners. Handles not currently registered are ignored.
    async fn remove(&self, to_remove: &[ListenerRef<E>]);

    /// Dispatches the event to all listeners currently registered.
    async fn send(&self, event: &E);
}

fn upcast<E, L>(listener: Arc<L>) -> ListenerRef<E>
where
    E: 'static,
    L: Listener<E> + 'static,
{
    listener
}

/// Adds strongly typed listeners to a dispatcher as one atomic batch.
///
/// Accepts any concrete type implementing [`Listener`], shared as
/// `Arc<L>`; the upcast to [`ListenerRef`] preserves allocation identity,
/// so clones of the same `Arc`s can be passed to [`remove_all`] later.
///
/// - no items: returns without calling into the dispatcher;
/// - one item: forwarded without materializing a batch;
/// - more: collected into a single batch so the whole group becomes
///   visible to concurrent sends at once.
///
/// ## Example
/// ```rust
/// use std::sync::Arc;
/// use async_trait::async_trait;
/// use fanout::{add_all, remove_all, Listener, SyncSet};
///
/// struct Sink;
///
/// #[async_trait]
/// impl Listener<u32> for Sink {
///     async fn on_event(&self, _event: &u32) {}
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let set: SyncSet<u32> = SyncSet::new();
/// let sinks = [Arc::new(Sink), Arc::new(Sink)];
///
/// add_all(&set, sinks.iter().cloned()).await;
/// set.send(&1).await;
/// remove_all(&set, sinks.iter().cloned()).await;
/// # }
/// ```
pub async fn add_all<E, D, L, I>(dispatcher: &D, listeners: I)
where
    E: 'static,
    D: Dispatcher<E> + ?Sized,
    L: Listener<E> + 'static,
    I: IntoIterator<Item = Arc<L>>,
{
    let mut listeners = listeners.into_iter();
    let Some(first) = listeners.next() else {
        return;
    };
    let first = upcast(first);

    match listeners.next() {
        None => dispatcher.add(slice::from_ref(&first)).await,
        Some(second) => {
            let batch = collect(first, upcast(second), listeners);
            dispatcher.add(&batch).await;
        }
    }
}

/// Removes strongly typed listeners from a dispatcher as one atomic batch.
///
/// Same batching behavior as [`add_all`]; pass clones of the `Arc`s that
/// were added.
pub async fn remove_all<E, D, L, I>(dispatcher: &D, listeners: I)
where
    E: 'static,
    D: Dispatcher<E> + ?Sized,
    L: Listener<E> + 'static,
    I: IntoIterator<Item = Arc<L>>,
{
    let mut listeners = listeners.into_iter();
    let Some(first) = listeners.next() else {
        return;
    };
    let first = upcast(first);

    match listeners.next() {
        None => dispatcher.remove(slice::from_ref(&first)).await,
        Some(second) => {
            let batch = collect(first, upcast(second), listeners);
            dispatcher.remove(&batch).await;
        }
    }
}

fn collect<E, L, I>(first: ListenerRef<E>, second: ListenerRef<E>, rest: I) -> Vec<ListenerRef<E>>
where
    E: 'static,
    L: Listener<E> + 'static,
    I: Iterator<Item = Arc<L>>,
{
    let mut batch = Vec::with_capacity(2 + rest.size_hint().0);
    batch.push(first);
    batch.push(second);
    batch.extend(rest.map(upcast));
    batch
}
