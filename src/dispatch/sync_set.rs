//! # Concurrency-safe listener container.
//!
//! [`SyncSet`] wraps a [`Set`] in a single reader-writer lock:
//!
//! ```text
//! clear / add / remove ──► write lock ──► mutate the inner Set
//!                            (exclusive, batch-atomic)
//!
//! send ──► read lock ──► deliver to every listener
//!            (shared: many sends run in parallel)
//! ```
//!
//! ## Rules
//! - Each mutation call is atomic with respect to other mutations and to
//!   `send`: a broadcast observes a batch either not at all or in full.
//! - `send` calls run concurrently with each other; a mutation waits for
//!   all in-flight sends, and a send waits for an in-flight mutation.
//! - One `send` delivers against the snapshot of the set it locked; a
//!   racing `remove` cannot complete until that send releases the read
//!   lock.
//! - The read lock is released on every exit path. A panicking listener
//!   unwinds into the caller of `send`, but the guard drops on the way
//!   out and the container stays usable (no lock poisoning).
//! - A listener must not call the mutation methods of the `SyncSet` that
//!   is delivering to it; the write lock would wait on the read lock the
//!   delivery still holds.

use std::fmt;

use async_trait::async_trait;

use tokio::sync::RwLock;

use crate::dispatch::dispatcher::Dispatcher;
use crate::dispatch::set::Set;
use crate::listeners::ListenerRef;

/// A [`Set`] guarded by a reader-writer lock, safe for concurrent use
/// from many tasks (typically behind an `Arc`).
///
/// Wrapping adds no listener semantics, only the critical-section
/// boundary; identity, duplicate, and removal behavior are those of
/// [`Set`].
///
/// ## Example
/// ```rust
/// use fanout::{as_listener, SyncSet};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let set: SyncSet<i32> = SyncSet::new();
/// set.add([as_listener(|event: &i32| assert_eq!(*event, 999))]).await;
/// set.send(&999).await;
/// # }
/// ```
pub struct SyncSet<E> {
    set: RwLock<Set<E>>,
}

impl<E> SyncSet<E> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            set: RwLock::new(Set::new()),
        }
    }

    /// Returns the number of registered listeners, counting duplicates.
    pub async fn len(&self) -> usize {
        self.set.read().await.len()
    }

    /// Returns `true` if no listeners are registered.
    pub async fn is_empty(&self) -> bool {
        self.set.read().await.is_empty()
    }

    /// Atomically removes all listeners. In-flight sends complete first.
    pub async fn clear(&self) {
        self.set.write().await.clear();
    }

    /// Appends listeners as one atomic batch.
    ///
    /// No event can be sent between the first and last listener of the
    /// batch becoming registered. Accepts the same item shapes as
    /// [`Set::add`]; `None` entries are skipped.
    pub async fn add<I, L>(&self, to_add: I)
    where
        I: IntoIterator<Item = L>,
        L: Into<Option<ListenerRef<E>>>,
    {
        self.set.write().await.add(to_add);
    }

    /// Removes listeners as one atomic batch.
    ///
    /// Matching and swap-removal behave as in [`Set::remove`]; absent
    /// handles and `None` entries are ignored.
    pub async fn remove<I, L>(&self, to_remove: I)
    where
        I: IntoIterator<Item = L>,
        L: Into<Option<ListenerRef<E>>>,
    {
        self.set.write().await.remove(to_remove);
    }

    /// Dispatches the event to all listeners registered at the moment the
    /// read lock is acquired.
    ///
    /// Multiple tasks may send concurrently. While any send is in flight
    /// no mutation can proceed, so delivery always runs against a stable
    /// set. Within one call, listeners run one at a time in the calling
    /// task; the concurrent safety of the listeners themselves is their
    /// own business.
    pub async fn send(&self, event: &E) {
        self.set.read().await.send(event).await;
    }
}

impl<E> Default for SyncSet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for SyncSet<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.set.try_read() {
            Ok(set) => f.debug_struct("SyncSet").field("listeners", &set.len()).finish(),
            Err(_) => f.debug_struct("SyncSet").field("listeners", &"<locked>").finish(),
        }
    }
}

#[async_trait]
impl<E> Dispatcher<E> for SyncSet<E>
where
    E: Send + Sync + 'static,
{
    async fn clear(&self) {
        SyncSet::clear(self).await;
    }

    async fn add(&self, to_add: &[ListenerRef<E>]) {
        SyncSet::add(self, to_add.iter().cloned()).await;
    }

    async fn remove(&self, to_remove: &[ListenerRef<E>]) {
        SyncSet::remove(self, to_remove.iter().cloned()).await;
    }

    async fn send(&self, event: &E) {
        SyncSet::send(self, event).await;
    }
}
