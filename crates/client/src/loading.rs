//! Loading-indicator state shared with the presentation layer.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Count of store requests currently in flight.
///
/// Cloning yields another handle onto the same counter, so a view can poll
/// `is_loading()` while the store is busy with a request.
#[derive(Debug, Clone, Default)]
pub struct LoadingState {
    in_flight: Arc<AtomicUsize>,
}

impl LoadingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight() > 0
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Mark one request as started; it ends when the guard drops.
    pub fn begin(&self) -> InFlightGuard {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        InFlightGuard {
            in_flight: Arc::clone(&self.in_flight),
        }
    }
}

#[derive(Debug)]
#[must_use = "the request is considered finished as soon as the guard is dropped"]
pub struct InFlightGuard {
    in_flight: Arc<AtomicUsize>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}
