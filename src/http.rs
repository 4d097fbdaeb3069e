//! Shared HTTP plumbing for the provider clients.
//!
//! Every client applies the same request timeout and opt-in retry policy, so
//! the knobs live here rather than per provider.

use std::time::Duration;

/// Default request timeout in seconds, applied uniformly to all providers.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Retry configuration for the provider clients.
///
/// Disabled by default (`max_retries: 0`). Only transient failures are
/// retried: connect/timeout errors and 5xx/429 responses.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (0 = disabled)
    pub max_retries: u32,
    /// Base delay before first retry (ms)
    pub base_delay_ms: u64,
    /// Maximum delay between retries (ms)
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 0,
            base_delay_ms: 100,
            max_delay_ms: 10_000,
        }
    }
}

impl RetryConfig {
    /// Create a new retry config with the given max retries.
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Default::default()
        }
    }

    /// Set the base delay in milliseconds.
    pub fn with_base_delay_ms(mut self, ms: u64) -> Self {
        self.base_delay_ms = ms;
        self
    }

    /// Set the maximum delay in milliseconds.
    pub fn with_max_delay_ms(mut self, ms: u64) -> Self {
        self.max_delay_ms = ms;
        self
    }

    /// Calculate delay for a given attempt with exponential backoff and jitter.
    fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let exp_delay = self.base_delay_ms.saturating_mul(1 << attempt.min(10));
        let capped_delay = exp_delay.min(self.max_delay_ms);
        // Add jitter: 75-100% of calculated delay
        let jitter_range = capped_delay / 4;
        let jitter = rand::random::<u64>() % (jitter_range + 1);
        Duration::from_millis(capped_delay - jitter_range + jitter)
    }
}

/// Whether a status code is worth retrying.
fn is_retryable_status(status: reqwest::StatusCode) -> bool {
    status.is_server_error() || status == reqwest::StatusCode::TOO_MANY_REQUESTS
}

/// Execute a request with the given retry policy.
///
/// Returns the final response, success or not; mapping a non-2xx status to a
/// provider error stays with the caller.
pub(crate) async fn send_with_retry<F, Fut>(
    retry: &RetryConfig,
    send: F,
) -> Result<reqwest::Response, reqwest::Error>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<reqwest::Response, reqwest::Error>>,
{
    let mut attempt = 0;

    loop {
        match send().await {
            Ok(response) => {
                let status = response.status();
                if !status.is_success()
                    && attempt < retry.max_retries
                    && is_retryable_status(status)
                {
                    let delay = retry.delay_for_attempt(attempt);
                    tracing::debug!(
                        attempt = attempt + 1,
                        max_retries = retry.max_retries,
                        delay_ms = delay.as_millis(),
                        status = %status,
                        "Retrying request after error response"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                    continue;
                }
                return Ok(response);
            }
            Err(e) => {
                let is_retryable = e.is_connect() || e.is_timeout() || e.is_request();
                if attempt < retry.max_retries && is_retryable {
                    let delay = retry.delay_for_attempt(attempt);
                    tracing::debug!(
                        attempt = attempt + 1,
                        max_retries = retry.max_retries,
                        delay_ms = delay.as_millis(),
                        error = %e,
                        "Retrying request after network error"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                    continue;
                }
                return Err(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_config_builder() {
        let config = RetryConfig::new(3)
            .with_base_delay_ms(200)
            .with_max_delay_ms(5000);

        assert_eq!(config.max_retries, 3);
        assert_eq!(config.base_delay_ms, 200);
        assert_eq!(config.max_delay_ms, 5000);
    }

    #[test]
    fn test_retry_disabled_by_default() {
        assert_eq!(RetryConfig::default().max_retries, 0);
    }

    #[test]
    fn test_retry_delay_calculation() {
        let config = RetryConfig {
            max_retries: 5,
            base_delay_ms: 100,
            max_delay_ms: 1000,
        };

        // First attempt: ~100ms (75-100ms with jitter)
        let delay0 = config.delay_for_attempt(0);
        assert!(delay0.as_millis() >= 75 && delay0.as_millis() <= 100);

        // Second attempt: ~200ms (150-200ms with jitter)
        let delay1 = config.delay_for_attempt(1);
        assert!(delay1.as_millis() >= 150 && delay1.as_millis() <= 200);

        // Large attempt: capped at max_delay
        let delay10 = config.delay_for_attempt(10);
        assert!(delay10.as_millis() >= 750 && delay10.as_millis() <= 1000);
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(is_retryable_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
        assert!(is_retryable_status(reqwest::StatusCode::BAD_GATEWAY));
        assert!(is_retryable_status(reqwest::StatusCode::TOO_MANY_REQUESTS));
        assert!(!is_retryable_status(reqwest::StatusCode::BAD_REQUEST));
        assert!(!is_retryable_status(reqwest::StatusCode::NOT_FOUND));
    }
}
