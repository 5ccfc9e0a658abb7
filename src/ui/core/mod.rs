//! Core UI plumbing: terminal event polling.

pub mod event_handler;

pub use event_handler::{EventHandler, EventType};
