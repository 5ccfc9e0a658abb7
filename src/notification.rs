//! User-facing notifications (toasts).

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Fire-and-forget notification sink.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    pub created_at: Instant,
}

/// Shared queue of toasts rendered by the status line
#[derive(Clone, Default)]
pub struct ToastQueue {
    toasts: Arc<Mutex<VecDeque<Toast>>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, level: ToastLevel, message: &str) {
        let toast = Toast {
            level,
            message: message.to_string(),
            created_at: Instant::now(),
        };
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.push_back(toast);
        }
    }

    /// Newest toast, if any
    pub fn latest(&self) -> Option<Toast> {
        self.toasts.lock().ok().and_then(|toasts| toasts.back().cloned())
    }

    /// All toasts, oldest first
    pub fn all(&self) -> Vec<Toast> {
        if let Ok(toasts) = self.toasts.lock() {
            toasts.iter().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Drop toasts older than `ttl`
    pub fn prune(&self, ttl: Duration) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.retain(|toast| toast.created_at.elapsed() < ttl);
        }
    }

    pub fn clear(&self) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.clear();
        }
    }
}

impl Notifier for ToastQueue {
    fn success(&self, message: &str) {
        log::info!("Toast: {}", message);
        self.push(ToastLevel::Success, message);
    }

    fn error(&self, message: &str) {
        log::warn!("Toast: {}", message);
        self.push(ToastLevel::Error, message);
    }
}
