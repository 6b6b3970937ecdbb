//! Politeness pause between full-text fetches.
//!
//! The aggregator calls [`RateLimiter::pause`] once after every article body
//! fetch. The pause blocks the whole pipeline, which keeps request spacing
//! predictable for the remote site.

use std::time::Duration;
use tokio::time::sleep;
use tracing::trace;

/// Paces outbound article fetches.
pub trait RateLimiter {
    async fn pause(&self);
}

/// Sleeps for the same interval every time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay {
    interval: Duration,
}

impl FixedDelay {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}

impl RateLimiter for FixedDelay {
    async fn pause(&self) {
        if self.interval.is_zero() {
            return;
        }
        trace!(interval = ?self.interval, "Politeness pause");
        sleep(self.interval).await;
    }
}
