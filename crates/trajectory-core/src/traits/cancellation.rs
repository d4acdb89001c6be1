//! Stop signal shared between a caller and a running simulation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Anything the batch loop can poll to learn that the caller gave up.
///
/// The engine only looks at it before starting a batch, so a batch already
/// in flight always finishes. A run that observes the signal yields
/// [`SimulationError::Cancelled`](crate::SimulationError::Cancelled) and no
/// partial output.
pub trait Cancellable {
    fn is_cancelled(&self) -> bool;

    /// Raise the signal. Raising it twice is harmless.
    fn cancel(&self);
}

/// A one-way flag behind an `Arc`; every clone observes the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Cancellable for CancellationToken {
    fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }
}
