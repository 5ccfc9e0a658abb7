//! UI components

pub mod common;
mod label_dialog;
mod status_bar;

pub use label_dialog::{LabelDialog, DIALOG_HEIGHT};
pub use status_bar::StatusBar;
