//! Accept loop and connection admission.
//!
//! This module owns the listening socket, enforces the concurrent
//! connection limit, and spawns one task per accepted connection.

pub mod listener;

pub use listener::Listener;
