//! # Debug-logging listener.
//!
//! [`LogListener`] records every event it receives through the [`log`]
//! facade. Useful while wiring a dispatcher into a host, or in demos; for
//! production observability implement a purpose-built [`Listener`].

use std::fmt;

use async_trait::async_trait;

use crate::listeners::listener::Listener;

/// Listener that logs each event at debug level.
///
/// Enabled via the `logging` feature. Events must implement
/// [`fmt::Debug`].
#[derive(Debug, Default)]
pub struct LogListener;

impl LogListener {
    /// Constructs a new [`LogListener`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl<E> Listener<E> for LogListener
where
    E: fmt::Debug + Send + Sync,
{
    async fn on_event(&self, event: &E) {
        log::debug!("[event] {event:?}");
    }
}
