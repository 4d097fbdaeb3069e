//! Bluelytics parallel-rate client implementation.

use std::time::Duration;

use reqwest::Client;

use crate::blue::error::{BlueError, BlueResult};
use crate::blue::types::{EvolutionEntry, BLUE_SERIES_NAME, SOURCE_BLUE};
use crate::http::{send_with_retry, RetryConfig, DEFAULT_TIMEOUT_SECS};
use crate::network::DEFAULT_BLUELYTICS_URL;
use crate::series::range::parse_date;
use crate::series::{Observation, Series};

/// Builder for configuring [`BluelyticsClient`].
#[derive(Debug, Clone)]
pub struct BluelyticsClientBuilder {
    base_url: String,
    timeout: Duration,
    retry_config: RetryConfig,
}

impl Default for BluelyticsClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BLUELYTICS_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry_config: RetryConfig::default(),
        }
    }
}

impl BluelyticsClientBuilder {
    /// Create a builder with the default endpoint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable retries with exponential backoff.
    pub fn with_retry(mut self, config: RetryConfig) -> Self {
        self.retry_config = config;
        self
    }

    /// Build the client.
    pub fn build(self) -> BlueResult<BluelyticsClient> {
        let http_client = Client::builder().timeout(self.timeout).build()?;
        Ok(BluelyticsClient {
            http_client,
            base_url: self.base_url,
            retry_config: self.retry_config,
        })
    }
}

/// Client for the Bluelytics parallel-rate API.
#[derive(Debug, Clone)]
pub struct BluelyticsClient {
    http_client: Client,
    base_url: String,
    retry_config: RetryConfig,
}

impl BluelyticsClient {
    /// Create a client with the default endpoint and settings.
    pub fn new() -> BlueResult<Self> {
        BluelyticsClientBuilder::new().build()
    }

    /// Create a builder for custom configuration.
    pub fn builder() -> BluelyticsClientBuilder {
        BluelyticsClientBuilder::new()
    }

    /// The base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full parallel-rate ("blue") history.
    ///
    /// The endpoint takes no range parameters; callers window the result
    /// downstream. The value is the buy/sell midpoint, deduplicated by date.
    pub async fn get_parallel_rate(&self) -> BlueResult<Series> {
        let url = format!("{}/evolution.json", self.base_url);

        let response = send_with_retry(&self.retry_config, || {
            self.http_client.get(&url).send()
        })
        .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BlueError::Remote { status: status.as_u16(), body });
        }

        let entries: Vec<EvolutionEntry> = response
            .json()
            .await
            .map_err(|e| BlueError::Deserialize(e.to_string()))?;

        let observations: Vec<Observation> = entries
            .into_iter()
            .filter(|entry| entry.source == SOURCE_BLUE)
            .filter_map(|entry| match parse_date(&entry.date) {
                Ok(date) => Some(Observation { date, value: entry.midpoint() }),
                Err(_) => {
                    tracing::debug!(date = %entry.date, "dropping entry with unparseable date");
                    None
                }
            })
            .collect();

        tracing::debug!(points = observations.len(), "fetched parallel-rate history");

        Ok(Series::from_observations(BLUE_SERIES_NAME, observations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = BluelyticsClient::new().unwrap();
        assert_eq!(client.base_url(), DEFAULT_BLUELYTICS_URL);
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = BluelyticsClient::builder()
            .base_url("http://localhost:9090/v2/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:9090/v2");
    }
}
