//! Market-data client implementation (Yahoo Finance chart endpoint).

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;

use crate::http::{send_with_retry, RetryConfig, DEFAULT_TIMEOUT_SECS};
use crate::market::error::{MarketError, MarketResult};
use crate::market::types::*;
use crate::network::DEFAULT_MARKET_DATA_URL;
use crate::series::{DateRange, Observation, Series};

/// User agent sent to the chart endpoint, which rejects anonymous clients.
const USER_AGENT: &str = "Mozilla/5.0 (compatible; austral/0.2)";

/// Builder for configuring [`MarketDataClient`].
#[derive(Debug, Clone)]
pub struct MarketDataClientBuilder {
    base_url: String,
    timeout: Duration,
    retry_config: RetryConfig,
}

impl Default for MarketDataClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_MARKET_DATA_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry_config: RetryConfig::default(),
        }
    }
}

impl MarketDataClientBuilder {
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
    pub fn build(self) -> MarketResult<MarketDataClient> {
        let http_client = Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(MarketDataClient {
            http_client,
            base_url: self.base_url,
            retry_config: self.retry_config,
        })
    }
}

/// Client for bulk historical daily closes.
#[derive(Debug, Clone)]
pub struct MarketDataClient {
    http_client: Client,
    base_url: String,
    retry_config: RetryConfig,
}

impl MarketDataClient {
    /// Create a client with the default endpoint and settings.
    pub fn new() -> MarketResult<Self> {
        MarketDataClientBuilder::new().build()
    }

    /// Create a builder for custom configuration.
    pub fn builder() -> MarketDataClientBuilder {
        MarketDataClientBuilder::new()
    }

    /// The base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one ticker's daily closing prices over a date window.
    pub async fn get_daily_closes(
        &self,
        ticker: &str,
        range: &DateRange,
    ) -> MarketResult<Series> {
        // period2 is exclusive upstream, so push it one day past the window
        let period1 = to_unix_seconds(range.start()).to_string();
        let period2 = to_unix_seconds(range.end().succ_opt().unwrap_or(range.end())).to_string();
        let url = format!("{}/{}", self.base_url, urlencoding::encode(ticker));

        let response = send_with_retry(&self.retry_config, || {
            self.http_client
                .get(&url)
                .query(&[
                    ("period1", period1.as_str()),
                    ("period2", period2.as_str()),
                    ("interval", "1d"),
                ])
                .send()
        })
        .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketError::Remote { status: status.as_u16(), body });
        }

        let envelope: ChartEnvelope = response
            .json()
            .await
            .map_err(|e| MarketError::Deserialize(e.to_string()))?;

        if let Some(error) = envelope.chart.error {
            return Err(MarketError::Chart {
                code: error.code,
                description: error.description,
            });
        }

        let result = envelope
            .chart
            .result
            .and_then(|mut results| (!results.is_empty()).then(|| results.remove(0)))
            .ok_or_else(|| MarketError::NoData { ticker: ticker.to_string() })?;

        let timestamps = result.timestamp.unwrap_or_default();
        let closes = result
            .indicators
            .quote
            .first()
            .and_then(|quote| quote.close.clone())
            .unwrap_or_default();

        let observations: Vec<Observation> = timestamps
            .iter()
            .zip(closes)
            .filter_map(|(ts, close)| {
                chrono::DateTime::from_timestamp(*ts, 0)
                    .map(|dt| Observation { date: dt.date_naive(), value: close })
            })
            .collect();

        if observations.is_empty() {
            return Err(MarketError::NoData { ticker: ticker.to_string() });
        }

        tracing::debug!(ticker, points = observations.len(), "fetched daily closes");

        Ok(Series::from_observations(ticker, observations))
    }

    /// Fetch the Merval index closes in pesos.
    pub async fn get_equity_index(&self, range: &DateRange) -> MarketResult<Series> {
        let series = self.get_daily_closes(MERVAL_TICKER, range).await?;
        Ok(series.renamed(MERVAL_SERIES_NAME))
    }

    /// Fetch the CEDEAR basket, one series per ticker, in basket order.
    pub async fn get_cedear_basket(&self, range: &DateRange) -> MarketResult<Vec<Series>> {
        let mut basket = Vec::with_capacity(CEDEAR_TICKERS.len());
        for (ticker, _) in CEDEAR_TICKERS {
            basket.push(self.get_daily_closes(ticker, range).await?);
        }
        Ok(basket)
    }
}

/// Midnight UTC of a calendar date as Unix seconds.
fn to_unix_seconds(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or_default()
}
