//! # Listeners and sink adaptation.
//!
//! This module provides the [`Listener`] capability, the shared
//! [`ListenerRef`] handle the containers store, and the adaptation layer
//! that turns plain sinks into listeners:
//!
//! ```text
//! |event| { .. }                ──┐
//! mpsc::Sender<E>               ──┼── as_listener ──► ListenerRef<E>
//! mpsc::UnboundedSender<E>      ──┘                   (identity handle)
//!
//! impl Listener<E> for MyType   ───── Arc::new ─────► ListenerRef<E>
//! ```
//!
//! Handles compare by allocation identity; keep a clone of the handle to
//! remove the listener from a container later.

pub(crate) mod adapt;
mod chan;
pub(crate) mod listener;

#[cfg(feature = "logging")]
mod log;

pub use adapt::{as_listener, ChanSink, FnSink, IntoListener, ListenerFn};
pub use listener::{Listener, ListenerRef};

#[cfg(feature = "logging")]
pub use log::LogListener;
