//! Retry policy: attempt bound plus capped exponential backoff.
//!
//! The core defaults require no backoff at all (one attempt, zero delay);
//! the policy exists so callers can opt into retries without the dispatcher
//! growing per-channel knowledge.

use std::time::Duration;

use courier_common::config::DispatchConfig;

/// Bound and spacing for repeated send attempts on one notification.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Clamped to at least 1.
    pub max_attempts: u32,
    /// Base delay between attempts. Actual delay = base * 2^attempt.
    pub base_delay: Duration,
    /// Hard cap on the computed delay.
    pub max_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration, max_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
            max_delay,
        }
    }

    /// Compute the delay before retrying after attempt `attempt` (0-indexed).
    ///
    /// 2^attempt is computed with a checked shift so attempts >= 32 saturate
    /// instead of overflowing `Duration`.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let multiplier = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        let exp_delay = self
            .base_delay
            .checked_mul(multiplier)
            .unwrap_or(self.max_delay);
        exp_delay.min(self.max_delay)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&DispatchConfig::default())
    }
}

impl From<&DispatchConfig> for RetryPolicy {
    fn from(config: &DispatchConfig) -> Self {
        Self::new(
            config.max_attempts,
            Duration::from_millis(config.retry_base_delay_ms),
            Duration::from_millis(config.retry_max_delay_ms),
        )
    }
}
