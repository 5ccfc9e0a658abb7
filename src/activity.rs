//! Tracks in-flight network requests so the UI can show a busy indicator.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared counter of tracked requests. Clones observe the same counter.
#[derive(Debug, Clone, Default)]
pub struct NetworkActivityTracker {
    in_flight: Arc<AtomicUsize>,
}

impl NetworkActivityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Await `future` while it counts as network activity.
    pub async fn track<F: Future>(&self, future: F) -> F::Output {
        let _guard = self.begin();
        future.await
    }

    /// Mark the start of an activity; it ends when the guard drops.
    pub fn begin(&self) -> ActivityGuard {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        ActivityGuard {
            in_flight: Arc::clone(&self.in_flight),
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight() > 0
    }
}

/// Decrements the tracker on drop, including when the tracked future is cancelled.
#[derive(Debug)]
pub struct ActivityGuard {
    in_flight: Arc<AtomicUsize>,
}

impl Drop for ActivityGuard {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_track_counts_while_running() {
        let tracker = NetworkActivityTracker::new();
        let observer = tracker.clone();

        let seen = tracker.track(async { observer.in_flight() }).await;

        assert_eq!(seen, 1);
        assert!(!tracker.is_busy());
    }

    #[test]
    fn test_guard_releases_on_drop() {
        let tracker = NetworkActivityTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();
        assert_eq!(tracker.in_flight(), 2);

        drop(first);
        assert!(tracker.is_busy());
        drop(second);
        assert!(!tracker.is_busy());
    }
}
