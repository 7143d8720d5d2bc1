//! # Listener containers and the dispatch contract.
//!
//! Two containers back the same operations:
//!
//! ```text
//! Set<E>        plain Vec of handles, &mut mutation, no locking
//! SyncSet<E>    RwLock<Set<E>>: exclusive mutation, shared broadcast
//! ```
//!
//! [`Dispatcher`] is the concurrent-safe contract host code integrates
//! against ([`SyncSet`] implements it), and [`add_all`] / [`remove_all`]
//! feed strongly typed listener batches through it atomically.

pub(crate) mod dispatcher;
pub(crate) mod set;
pub(crate) mod sync_set;

pub use dispatcher::{add_all, remove_all, Dispatcher};
pub use set::Set;
pub use sync_set::SyncSet;
