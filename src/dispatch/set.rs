//! # Unsynchronized listener container.
//!
//! [`Set`] is the plain building block: a growable collection of listener
//! handles with add, remove-by-identity, clear, and broadcast. It is not
//! safe for concurrent use; mutation goes through `&mut self`. Use it
//! where the surrounding code already guarantees exclusive access, or
//! reach for [`SyncSet`](crate::SyncSet) otherwise.
//!
//! ## Rules
//! - **No ordering guarantee**: insertion order is not a delivery-order
//!   contract, and removal scrambles the remaining order on purpose.
//! - **No de-duplication**: the same handle can be registered more than
//!   once and is then delivered to once per occurrence; `remove` deletes
//!   one occurrence per matching handle supplied.
//! - **No error paths**: empty batches, absent handles, and `None`
//!   entries are silently ignored.

use std::fmt;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::listeners::{as_listener, ListenerFn, ListenerRef};

/// A growable set of listeners for events of type `E`.
///
/// "Set" refers to membership management, not uniqueness: duplicates are
/// permitted, and removal takes out a single occurrence. The container
/// owns the handles it holds; clearing or dropping it releases them.
///
/// ## Example
/// ```rust
/// use fanout::{as_listener, Set};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut set: Set<i32> = Set::new();
/// set.add([as_listener(|event: &i32| assert_eq!(*event, 999))]);
/// set.send(&999).await;
/// # }
/// ```
pub struct Set<E> {
    all: Vec<ListenerRef<E>>,
}

impl<E> Set<E> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self { all: Vec::new() }
    }

    /// Returns the number of registered listeners, counting duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.all.len()
    }

    /// Returns `true` if no listeners are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Removes all listeners, releasing their handles. Idempotent.
    pub fn clear(&mut self) {
        self.all.clear();
    }

    /// Appends listeners to this set.
    ///
    /// Accepts both plain handles and `Option` entries; `None` entries
    /// are skipped. An empty batch is a no-op. Duplicate handles are kept
    /// as duplicates.
    pub fn add<I, L>(&mut self, to_add: I)
    where
        I: IntoIterator<Item = L>,
        L: Into<Option<ListenerRef<E>>>,
    {
        for listener in to_add {
            if let Some(listener) = listener.into() {
                self.all.push(listener);
            }
        }
    }

    /// Adapts each callback via [`as_listener`] semantics and appends it.
    ///
    /// The adapter handles are not retained by the caller, so listeners
    /// added this way cannot be removed individually later; they live
    /// until [`clear`](Self::clear). Adapt explicitly first when removal
    /// matters.
    pub fn add_fns<I, F>(&mut self, to_add: I)
    where
        I: IntoIterator<Item = F>,
        F: Fn(&E) + Send + Sync + 'static,
        E: Sync + 'static,
    {
        for f in to_add {
            self.all.push(ListenerFn::arc(f));
        }
    }

    /// Adapts each bounded channel send handle and appends it.
    ///
    /// Same removability caveat as [`add_fns`](Self::add_fns). Delivery
    /// enqueues a clone of the event and suspends the broadcaster while
    /// the buffer is full.
    pub fn add_chans<I>(&mut self, to_add: I)
    where
        I: IntoIterator<Item = mpsc::Sender<E>>,
        E: Clone + Send + Sync + 'static,
    {
        for chan in to_add {
            self.all.push(as_listener(chan));
        }
    }

    /// Deletes the given listeners.
    ///
    /// For each supplied handle, the first occurrence with the same
    /// allocation is removed by swapping in the last element, which is
    /// O(1) but scrambles the order of the survivors. Handles that are
    /// not in the set, and `None` entries, are ignored.
    pub fn remove<I, L>(&mut self, to_remove: I)
    where
        I: IntoIterator<Item = L>,
        L: Into<Option<ListenerRef<E>>>,
    {
        for listener in to_remove {
            let Some(listener) = listener.into() else {
                continue;
            };
            if let Some(at) = self.all.iter().position(|l| Arc::ptr_eq(l, &listener)) {
                self.all.swap_remove(at);
            }
        }
    }

    /// Dispatches an event to all contained listeners, one at a time, in
    /// the calling task.
    ///
    /// Iterates the set as it is when the call starts. A listener that
    /// suspends (a full channel, say) delays everything after it and the
    /// caller itself.
    pub async fn send(&self, event: &E) {
        for listener in &self.all {
            listener.on_event(event).await;
        }
    }
}

impl<E> Default for Set<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Set<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Set").field("listeners", &self.all.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use tokio::sync::mpsc;

    use super::Set;
    use crate::listeners::{as_listener, ListenerRef};

    fn counting(hits: &Arc<AtomicUsize>) -> ListenerRef<u32> {
        let hits = Arc::clone(hits);
        as_listener(move |_: &u32| {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test]
    async fn test_empty_set_operations_are_noops() {
        let mut set: Set<u32> = Set::new();

        set.clear();
        set.add(Vec::<ListenerRef<u32>>::new());
        set.remove(Vec::<ListenerRef<u32>>::new());
        set.send(&7).await;

        assert!(set.is_empty());
    }

    #[tokio::test]
    async fn test_add_send_remove_lifecycle() {
        let hits = Arc::new(AtomicUsize::new(0));
        let listener = counting(&hits);
        let mut set: Set<u32> = Set::new();

        set.add([listener.clone()]);
        set.send(&7).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        set.remove([listener.clone()]);
        set.send(&7).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        // Removing again is harmless.
        set.remove([listener]);
        assert!(set.is_empty());
    }

    #[tokio::test]
    async fn test_clear_stops_all_delivery() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut set: Set<u32> = Set::new();

        set.add([counting(&hits), counting(&hits), counting(&hits)]);
        set.clear();
        set.send(&7).await;

        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert!(set.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_handle_removed_once_leaves_one() {
        let hits = Arc::new(AtomicUsize::new(0));
        let listener = counting(&hits);
        let mut set: Set<u32> = Set::new();

        set.add([listener.clone(), listener.clone()]);
        set.send(&7).await;
        assert_eq!(hits.load(Ordering::SeqCst), 2);

        set.remove([listener]);
        assert_eq!(set.len(), 1);

        set.send(&7).await;
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_none_entries_are_skipped() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut set: Set<u32> = Set::new();

        set.add([None::<ListenerRef<u32>>, None]);
        assert!(set.is_empty());

        set.add([None, Some(counting(&hits)), None]);
        assert_eq!(set.len(), 1);

        set.remove([None::<ListenerRef<u32>>]);
        assert_eq!(set.len(), 1);

        set.send(&7).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_each_listener_hears_each_event_once() {
        let log: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));
        let tag = |name: &'static str| {
            let log = Arc::clone(&log);
            as_listener(move |_: &u32| log.lock().unwrap().push(name))
        };

        let (a, b, c) = (tag("a"), tag("b"), tag("c"));
        let mut set: Set<u32> = Set::new();
        set.add([a, b.clone(), c]);

        set.send(&7).await;
        {
            let mut seen = log.lock().unwrap();
            seen.sort_unstable();
            assert_eq!(*seen, ["a", "b", "c"]);
            seen.clear();
        }

        set.remove([b]);
        set.send(&7).await;
        let mut seen = log.lock().unwrap();
        seen.sort_unstable();
        assert_eq!(*seen, ["a", "c"]);
    }

    #[tokio::test]
    async fn test_add_fns_delivers_but_is_not_removable() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut set: Set<u32> = Set::new();

        set.add_fns([{
            let hits = Arc::clone(&hits);
            move |_: &u32| {
                hits.fetch_add(1, Ordering::SeqCst);
            }
        }]);
        set.send(&7).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        // Only clear can take these out again.
        set.clear();
        set.send(&7).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_add_chans_enqueues_events() {
        let (tx, mut rx) = mpsc::channel::<u32>(4);
        let mut set: Set<u32> = Set::new();

        set.add_chans([tx]);
        set.send(&9).await;

        assert_eq!(rx.recv().await, Some(9));
    }
}
