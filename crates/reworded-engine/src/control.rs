// Run control: cooperative cancellation and optional size limits.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Arrangements visited between two cancellation checks.
pub const DEFAULT_CANCEL_CHECK_INTERVAL: usize = 4096;

/// Cooperative cancellation flag shared between a run and its owner.
///
/// Clones share the same flag. Once cancelled a token stays cancelled.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that any run observing this token stop at its next check.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Upper bounds on the work a single run may do.
///
/// Both are unset by default, which leaves generation unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationLimits {
    /// Reject words with more letters than this before enumerating.
    pub max_letters: Option<usize>,
    /// Abort once more than this many distinct strings have been generated.
    pub max_generated: Option<usize>,
}

/// Options applied to every run started from a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    pub limits: GenerationLimits,
    /// Arrangements between cancellation checks. Values below 1 act as 1.
    pub cancel_check_interval: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            limits: GenerationLimits::default(),
            cancel_check_interval: DEFAULT_CANCEL_CHECK_INTERVAL,
        }
    }
}
