//! UI module for mail-labels
//!
//! This module hosts the label dialog in the terminal: rendering, key
//! handling and the event loop.

pub mod app;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app::App;
pub use layout::LayoutManager;
pub use renderer::run_app;
