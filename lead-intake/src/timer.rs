//! Deadline for the post-success form reset

use std::time::Duration;
use tokio::time::{self, Instant};

/// How long the success banner stays before the form is cleared
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(3);

/// A pending reset. Cancel it by dropping it.
///
/// Holds only a deadline (no spawned task), so whoever owns the timer
/// decides when and whether the reset is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTimer {
    deadline: Instant,
}

impl ResetTimer {
    pub fn start(delay: Duration) -> Self {
        Self {
            deadline: Instant::now() + delay,
        }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    pub fn is_due(&self) -> bool {
        Instant::now() >= self.deadline
    }

    /// Completes once the deadline has passed
    pub async fn elapsed(&self) {
        time::sleep_until(self.deadline).await;
    }
}
