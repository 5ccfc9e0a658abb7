//! mail-labels - create and edit mail labels and folders from the terminal
//!
//! The library holds the label dialog controller and everything it talks
//! to; the binary hosts it in a ratatui terminal UI.
//!
//! # Modules
//!
//! * [`modal`] - The label / folder edit dialog controller
//! * [`backend`] - Remote label and refresh services (HTTP implementation included)
//! * [`label`] - Label entity, open-parameter draft and request payload
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface hosting the dialog

/// Network activity tracking for the busy indicator
pub mod activity;

/// Remote services: label create/update and event refresh
pub mod backend;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Translation catalog and dialog strings
pub mod i18n;

/// Label entity and payload types
pub mod label;

/// File logging setup
pub mod logger;

/// Label dialog controller and form state
pub mod modal;

/// User-facing toasts
pub mod notification;

/// Color swatches
pub mod palette;

/// Input sanitization
pub mod sanitize;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility helpers
pub mod utils;

pub use label::{Label, LabelDraft, LabelKind, LabelPayload, ModalMode};
pub use modal::{LabelModal, LabelModalError, ModalContext, ModalParams};
