//! Cooperative cancellation and progress reporting for long fetches.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Context handed into a layer fetch by the caller.
///
/// Cancellation is cooperative: the store polls [`is_cancelled`] at safe
/// points (between file reads, between decode passes) and aborts promptly
/// when it returns true. Nothing is preemptively interrupted.
///
/// [`is_cancelled`]: Operation::is_cancelled
pub trait Operation {
    /// Whether the caller has asked for the operation to stop.
    fn is_cancelled(&self) -> bool;

    /// Reports fetch progress in `0.0..=1.0`. Optional; the default
    /// implementation discards it.
    fn progress(&self, _fraction: f64) {}
}

/// An operation context that never cancels and ignores progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOperation;

impl Operation for NoOperation {
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// A cancellation flag shareable between the owner of a reload and the
/// thread running it.
///
/// Clones share the flag: cancelling any clone cancels them all.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals cancellation to every clone of this token.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

impl Operation for CancelToken {
    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
