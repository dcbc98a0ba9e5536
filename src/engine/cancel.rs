//! Cooperative cancellation signal shared between a run and its controller

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Stop request polled by a run before each mutation
///
/// Clones share one flag, so the controller keeps a clone and the run keeps
/// another. Setting the flag never interrupts a mutation already applied.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create an unsignalled token
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that the run stop at its next step boundary
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Whether a stop has been requested
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}
