use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cooperative cancellation flag
///
/// The flag is only ever set from outside the render loop (usually a signal
/// handler) and polled once per frame.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the render loop to stop after the current frame
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Shared atomic behind the flag, for registering signal handlers
    pub fn as_atomic(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }
}
