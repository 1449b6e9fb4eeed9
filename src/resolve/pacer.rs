//! Inter-call pacing
//!
//! The search endpoint throttles aggressive clients, so the batch runner
//! pauses for a fixed interval between calls. The policy is injected so the
//! test suite can swap in a no-op and avoid wall-clock waits.

use async_trait::async_trait;
use std::time::Duration;

/// Pacing policy applied between successive network calls
#[async_trait]
pub trait Pacer: Send + Sync {
    /// Suspend until the next call may be issued
    async fn pause(&self);
}

/// Fixed-delay pacing; not adaptive, which is sufficient for a
/// single-threaded sequential batch.
#[derive(Debug, Clone)]
pub struct FixedDelayPacer {
    delay: Duration,
}

impl FixedDelayPacer {
    /// Default inter-call delay for device resolution
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

    /// Create a pacer with the given delay
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for FixedDelayPacer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl Pacer for FixedDelayPacer {
    async fn pause(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

/// No-op pacing for tests
#[derive(Debug, Clone, Default)]
pub struct NoopPacer;

#[async_trait]
impl Pacer for NoopPacer {
    async fn pause(&self) {}
}
