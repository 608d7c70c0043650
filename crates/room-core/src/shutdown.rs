//! Process-wide shutdown signal
//!
//! A broadcast termination condition observed cooperatively by every
//! long-running task. Triggering is idempotent: the interrupt handler and
//! the explicit logout path may both fire without coordination.

use tokio_util::sync::CancellationToken;

/// Idempotent, cloneable shutdown broadcast
///
/// Clones observe the same underlying condition. Observation via
/// [`ShutdownSignal::triggered`] does not consume the signal, so any
/// number of tasks can wait on it concurrently.
#[derive(Debug, Clone, Default)]
pub struct ShutdownSignal {
    token: CancellationToken,
}

impl ShutdownSignal {
    /// Create a fresh, untriggered signal
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Trigger the signal; safe to call any number of times
    pub fn trigger(&self) {
        self.token.cancel();
    }

    /// Whether the signal has been triggered
    #[must_use]
    pub fn is_triggered(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Suspend until the signal is triggered
    ///
    /// Completes immediately if the signal has already fired.
    pub async fn triggered(&self) {
        self.token.cancelled().await;
    }
}
