//! Retry with exponential backoff for transient provider failures.

use std::future::Future;
use std::time::Duration;

use clarity_config::GeminiConfig;

use crate::error::CoachError;

/// Configuration for retry behavior on transient provider errors.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the initial one).
    pub max_attempts: u32,
    /// Delay before the first retry.
    pub base_delay: Duration,
    /// Maximum delay between retries (backoff is capped here).
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::from(&GeminiConfig::default())
    }
}

impl From<&GeminiConfig> for RetryConfig {
    fn from(config: &GeminiConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            base_delay: Duration::from_millis(config.base_delay_ms),
            max_delay: Duration::from_millis(config.max_delay_ms),
        }
    }
}

impl RetryConfig {
    /// A single attempt, no retries.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            max_attempts: 1,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
        }
    }

    /// Delay after failed attempt number `attempt` (1-based).
    ///
    /// Doubles from `base_delay`; a rate-limit hint raises it. Always capped
    /// at `max_delay`.
    #[must_use]
    pub fn delay_for(&self, attempt: u32, error: &CoachError) -> Duration {
        let exp = attempt.saturating_sub(1).min(16);
        let backoff = self.base_delay.saturating_mul(1 << exp);
        let hinted = match error {
            CoachError::RateLimited { retry_after_secs } => {
                backoff.max(Duration::from_secs(*retry_after_secs))
            }
            _ => backoff,
        };
        hinted.min(self.max_delay)
    }
}

/// Run `op` until it succeeds, fails permanently, or attempts run out.
///
/// Only errors for which [`CoachError::is_transient`] holds are retried.
///
/// # Errors
///
/// Returns the last error produced by `op`.
pub async fn with_retry<T, F, Fut>(
    config: &RetryConfig,
    what: &str,
    mut op: F,
) -> Result<T, CoachError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, CoachError>>,
{
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(error) if error.is_transient() && attempt < config.max_attempts => {
                let delay = config.delay_for(attempt, &error);
                tracing::warn!(
                    what,
                    attempt,
                    max_attempts = config.max_attempts,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    %error,
                    "transient failure, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(error) => return Err(error),
        }
    }
}
