//! Remote services the label dialog depends on.
//!
//! This module defines the label create/update interface, the global refresh
//! ("event manager") interface and their shared error type. The HTTP
//! implementation lives in [`http`].

use async_trait::async_trait;

use crate::label::{Label, LabelPayload, ModalMode};

pub mod http;

/// Error types for remote calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with an error envelope.
    #[error("Request rejected (status {status}): {}", message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: u16,
        code: Option<i64>,
        message: Option<String>,
    },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Response did not contain a label")]
    MissingLabel,

    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    /// The background task running the request panicked or was aborted.
    #[error("Request task failed: {0}")]
    Task(String),
}

impl ApiError {
    /// The server-provided `Error` text, when the server sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }
}

/// Create and update endpoints for labels and folders.
#[async_trait]
pub trait LabelService: Send + Sync {
    async fn create(&self, payload: &LabelPayload) -> Result<Label, ApiError>;

    async fn update(&self, payload: &LabelPayload) -> Result<Label, ApiError>;

    /// `update` when the payload carries an ID, `create` otherwise.
    async fn save(&self, payload: &LabelPayload) -> Result<Label, ApiError> {
        match payload.mode() {
            ModalMode::Edit => self.update(payload).await,
            ModalMode::Create => self.create(payload).await,
        }
    }
}

/// Pulls remote changes into application state.
#[async_trait]
pub trait EventManager: Send + Sync {
    async fn call(&self) -> Result<(), ApiError>;
}
