//! # Sink adaptation.
//!
//! Turns plain sinks into removable listeners. Two shapes are supported
//! out of the box:
//!
//! - **callbacks**: any `Fn(&E)` closure or function;
//! - **channels**: tokio mpsc send handles, bounded or unbounded.
//!
//! [`as_listener`] is the single entry point. Shape selection happens at
//! compile time through [`IntoListener`], which is parameterized by a
//! marker type ([`FnSink`] / [`ChanSink`]) so the two families of blanket
//! impls cannot collide. The markers only steer inference; they carry no
//! data and never appear in user code beyond generic bounds.
//!
//! ## Identity
//! Every call to [`as_listener`] allocates a fresh handle. Adapting the
//! same closure or the same channel twice therefore yields two listeners
//! that compare unequal, and removing one leaves the other registered.
//! Retain and clone the returned [`ListenerRef`] when you need to remove
//! the listener later.
//!
//! ## Example
//! ```rust
//! use fanout::{as_listener, Set};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut changes: Set<i32> = Set::new();
//!
//! let printer = as_listener(|event: &i32| println!("{event}"));
//! changes.add([printer.clone()]);
//!
//! changes.send(&999).await;
//!
//! changes.remove([printer]);
//! # }
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::listeners::listener::{Listener, ListenerRef};

/// Callback-backed listener.
///
/// Wraps a closure `F: Fn(&E)` and invokes it once per delivered event.
/// Usually constructed through [`as_listener`] or [`ListenerFn::arc`];
/// `new` exists for embedding the adapter in a larger type.
#[derive(Debug)]
pub struct ListenerFn<F> {
    f: F,
}

impl<F> ListenerFn<F> {
    /// Creates a new callback-backed listener.
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the listener and returns it as a shared handle.
    ///
    /// ## Example
    /// ```rust
    /// use fanout::{ListenerFn, ListenerRef};
    ///
    /// let l: ListenerRef<u32> = ListenerFn::arc(|event: &u32| {
    ///     assert_eq!(*event, 7);
    /// });
    /// ```
    #[must_use]
    pub fn arc<E>(f: F) -> ListenerRef<E>
    where
        E: Sync + 'static,
        F: Fn(&E) + Send + Sync + 'static,
    {
        Arc::new(Self::new(f))
    }
}

#[async_trait]
impl<E, F> Listener<E> for ListenerFn<F>
where
    E: Sync,
    F: Fn(&E) + Send + Sync,
{
    async fn on_event(&self, event: &E) {
        (self.f)(event)
    }
}

/// Inference marker for callback-shaped sinks. See [`IntoListener`].
#[derive(Debug, Clone, Copy)]
pub struct FnSink;

/// Inference marker for channel-shaped sinks. See [`IntoListener`].
#[derive(Debug, Clone, Copy)]
pub struct ChanSink;

/// Conversion from a sink value into a registered-listener handle.
///
/// The marker parameter `S` tags the shape of the sink (callback vs.
/// channel) so that the blanket impl over closures and the impls over
/// concrete channel types coexist; callers never name it, inference picks
/// the one impl that applies.
///
/// The trait is open: wrapper types around custom sinks can implement it
/// (with their own marker if needed) to become usable with
/// [`as_listener`].
pub trait IntoListener<E: 'static, S> {
    /// Wraps `self` in a fresh listener handle.
    fn into_listener(self) -> ListenerRef<E>;
}

impl<E, F> IntoListener<E, FnSink> for F
where
    E: Sync + 'static,
    F: Fn(&E) + Send + Sync + 'static,
{
    fn into_listener(self) -> ListenerRef<E> {
        Arc::new(ListenerFn::new(self))
    }
}

impl<E> IntoListener<E, ChanSink> for mpsc::Sender<E>
where
    E: Clone + Send + Sync + 'static,
{
    fn into_listener(self) -> ListenerRef<E> {
        Arc::new(self)
    }
}

impl<E> IntoListener<E, ChanSink> for mpsc::UnboundedSender<E>
where
    E: Clone + Send + Sync + 'static,
{
    fn into_listener(self) -> ListenerRef<E> {
        Arc::new(self)
    }
}

/// Converts a callback or a channel send handle into a listener.
///
/// The returned handle is the listener's identity: pass clones of it to
/// the add and remove methods of a container. Calling `as_listener` twice
/// on the same sink produces two distinct listeners.
///
/// Channel-backed listeners deliver by enqueueing a clone of the event;
/// a bounded channel with a full buffer suspends the broadcasting caller
/// until it drains, an unbounded one never blocks.
///
/// ## Example
/// ```rust
/// use fanout::{as_listener, Listener};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let (tx, mut rx) = tokio::sync::mpsc::channel::<u32>(4);
///
/// let cb = as_listener(|event: &u32| assert_eq!(*event, 5));
/// let ch = as_listener(tx);
///
/// cb.on_event(&5).await;
/// ch.on_event(&5).await;
/// assert_eq!(rx.recv().await, Some(5));
/// # }
/// ```
pub fn as_listener<E, S, L>(sink: L) -> ListenerRef<E>
where
    E: 'static,
    L: IntoListener<E, S>,
{
    sink.into_listener()
}
