use std::time::Duration;

use serde::Deserialize;

/// Dispatch configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct DispatchConfig {
    /// Total send attempts per notification, including the first
    /// (default: 1, i.e. no retry)
    pub max_attempts: u32,

    /// Base backoff delay between retry attempts in milliseconds
    /// (default: 0, i.e. an immediate retry)
    pub retry_base_delay_ms: u64,

    /// Hard cap on the computed backoff delay in milliseconds (default: 30000)
    pub retry_max_delay_ms: u64,

    /// Per-attempt send timeout in milliseconds; unset means unbounded
    pub send_timeout_ms: Option<u64>,
}

impl DispatchConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            max_attempts: std::env::var("COURIER_MAX_ATTEMPTS")
                .unwrap_or_else(|_| "1".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("COURIER_MAX_ATTEMPTS must be a valid u32"))?,
            retry_base_delay_ms: std::env::var("COURIER_RETRY_BASE_DELAY_MS")
                .unwrap_or_else(|_| "0".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("COURIER_RETRY_BASE_DELAY_MS must be a valid u64"))?,
            retry_max_delay_ms: std::env::var("COURIER_RETRY_MAX_DELAY_MS")
                .unwrap_or_else(|_| "30000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("COURIER_RETRY_MAX_DELAY_MS must be a valid u64"))?,
            send_timeout_ms: match std::env::var("COURIER_SEND_TIMEOUT_MS") {
                Ok(raw) => Some(raw.parse().map_err(|_| {
                    anyhow::anyhow!("COURIER_SEND_TIMEOUT_MS must be a valid u64")
                })?),
                Err(_) => None,
            },
        })
    }

    /// The per-attempt timeout as a `Duration`, if one is configured.
    pub fn send_timeout(&self) -> Option<Duration> {
        self.send_timeout_ms.map(Duration::from_millis)
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            max_attempts: 1,
            retry_base_delay_ms: 0,
            retry_max_delay_ms: 30_000,
            send_timeout_ms: None,
        }
    }
}
