//! BCRA statistics client implementation.
//!
//! [`BcraClient`] wraps the central bank's monetary-statistics endpoint
//! (paginated) and its exchange-rate quote endpoint (single request).
//!
//! # Example
//!
//! ```rust,ignore
//! use austral::bcra::{BcraClient, types::VARIABLE_INFLATION_MONTHLY};
//! use austral::series::DateRange;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BcraClient::new()?;
//!     let range = DateRange::parse("2024-01-01", "2024-06-30")?;
//!
//!     let inflation = client
//!         .get_monetary_series(VARIABLE_INFLATION_MONTHLY, &range)
//!         .await?;
//!     println!("{} observations", inflation.len());
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use reqwest::Client;

use crate::bcra::error::{BcraError, BcraResult, ErrorBody};
use crate::bcra::types::*;
use crate::http::{send_with_retry, RetryConfig, DEFAULT_TIMEOUT_SECS};
use crate::network::{DEFAULT_BCRA_EXCHANGE_URL, DEFAULT_BCRA_MONETARY_URL};
use crate::series::range::parse_date;
use crate::series::{DateRange, Observation, Series};

/// Builder for configuring [`BcraClient`].
#[derive(Debug, Clone)]
pub struct BcraClientBuilder {
    monetary_url: String,
    exchange_url: String,
    timeout: Duration,
    retry_config: RetryConfig,
}

impl Default for BcraClientBuilder {
    fn default() -> Self {
        Self {
            monetary_url: DEFAULT_BCRA_MONETARY_URL.to_string(),
            exchange_url: DEFAULT_BCRA_EXCHANGE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry_config: RetryConfig::default(),
        }
    }
}

impl BcraClientBuilder {
    /// Create a builder with the default endpoints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the monetary-statistics base URL.
    pub fn monetary_url(mut self, url: impl Into<String>) -> Self {
        self.monetary_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the exchange-rate base URL.
    pub fn exchange_url(mut self, url: impl Into<String>) -> Self {
        self.exchange_url = url.into().trim_end_matches('/').to_string();
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
    pub fn build(self) -> BcraResult<BcraClient> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let http_client = Client::builder()
            .timeout(self.timeout)
            .default_headers(headers)
            .build()?;

        Ok(BcraClient {
            http_client,
            monetary_url: self.monetary_url,
            exchange_url: self.exchange_url,
            retry_config: self.retry_config,
        })
    }
}

/// Client for the BCRA statistics APIs.
#[derive(Debug, Clone)]
pub struct BcraClient {
    http_client: Client,
    monetary_url: String,
    exchange_url: String,
    retry_config: RetryConfig,
}

impl BcraClient {
    /// Create a client with the default endpoints and settings.
    pub fn new() -> BcraResult<Self> {
        BcraClientBuilder::new().build()
    }

    /// Create a builder for custom configuration.
    pub fn builder() -> BcraClientBuilder {
        BcraClientBuilder::new()
    }

    /// The monetary-statistics base URL.
    pub fn monetary_url(&self) -> &str {
        &self.monetary_url
    }

    /// The exchange-rate base URL.
    pub fn exchange_url(&self) -> &str {
        &self.exchange_url
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    /// Map a non-2xx response to a typed remote error.
    async fn parse_error_response(response: reqwest::Response) -> BcraError {
        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();

        let messages = match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) if !body.error_messages.is_empty() => body.error_messages,
            _ if text.is_empty() => vec![format!("HTTP {}", status)],
            _ => vec![text],
        };

        BcraError::Remote { status, messages }
    }

    /// Convert raw records to observations, dropping records whose date does
    /// not parse. Unparseable values survive as absent points.
    fn to_observations(records: Vec<MonetaryRecord>) -> Vec<Observation> {
        records
            .into_iter()
            .filter_map(|record| match parse_date(&record.fecha) {
                Ok(date) => Some(Observation { date, value: record.valor }),
                Err(_) => {
                    tracing::debug!(fecha = %record.fecha, "dropping record with unparseable date");
                    None
                }
            })
            .collect()
    }

    // =========================================================================
    // Monetary series
    // =========================================================================

    /// Fetch one monetary series over an inclusive date window.
    ///
    /// Pages through the endpoint 3000 records at a time until a short page,
    /// the advertised total, or the safety cap. An empty result set is
    /// [`BcraError::NoData`], distinct from transport failures.
    pub async fn get_monetary_series(
        &self,
        variable_id: u32,
        range: &DateRange,
    ) -> BcraResult<Series> {
        let (desde, hasta) = range.as_query();
        let url = format!("{}/{}", self.monetary_url, variable_id);

        let mut cursor = PageCursor::new(MONETARY_PAGE_LIMIT);
        let mut records: Vec<MonetaryRecord> = Vec::new();

        loop {
            let limit = cursor.limit().to_string();
            let offset = cursor.offset().to_string();
            let response = send_with_retry(&self.retry_config, || {
                self.http_client
                    .get(&url)
                    .query(&[
                        ("desde", desde.as_str()),
                        ("hasta", hasta.as_str()),
                        ("limit", limit.as_str()),
                        ("offset", offset.as_str()),
                    ])
                    .send()
            })
            .await?;

            if !response.status().is_success() {
                return Err(Self::parse_error_response(response).await);
            }

            let page: MonetaryPage = response
                .json()
                .await
                .map_err(|e| BcraError::Deserialize(e.to_string()))?;

            let page_len = page.results.len() as u32;
            let advertised_total = page.advertised_total();
            tracing::debug!(
                variable_id,
                offset = cursor.offset(),
                page_len,
                advertised_total,
                "fetched monetary page"
            );
            records.extend(page.results);

            match cursor.advance(page_len, advertised_total) {
                PageStep::Continue => {}
                PageStep::Done => break,
                PageStep::Capped => {
                    tracing::warn!(
                        variable_id,
                        fetched = cursor.fetched(),
                        "pagination cap reached before the server signalled completion"
                    );
                    break;
                }
            }
        }

        if records.is_empty() {
            return Err(BcraError::NoData {
                variable_id,
                start: range.start(),
                end: range.end(),
            });
        }

        Ok(Series::from_observations(
            format!("variable_{variable_id}"),
            Self::to_observations(records),
        ))
    }

    // =========================================================================
    // Exchange-rate quotes
    // =========================================================================

    /// Fetch a currency's official quotes over a date window.
    ///
    /// Flattens each day's `detalle` quotes into dated points; same-day
    /// duplicates are collapsed by arithmetic mean on series construction.
    pub async fn get_currency_quotes(
        &self,
        currency: Currency,
        range: &DateRange,
    ) -> BcraResult<Series> {
        let (desde, hasta) = range.as_query();
        let url = format!("{}/Cotizaciones/{}", self.exchange_url, currency.as_path());
        let limit = EXCHANGE_QUOTE_LIMIT.to_string();

        let response = send_with_retry(&self.retry_config, || {
            self.http_client
                .get(&url)
                .query(&[
                    ("fechadesde", desde.as_str()),
                    ("fechahasta", hasta.as_str()),
                    ("limit", limit.as_str()),
                ])
                .send()
        })
        .await?;

        if !response.status().is_success() {
            return Err(Self::parse_error_response(response).await);
        }

        let page: ExchangePage = response
            .json()
            .await
            .map_err(|e| BcraError::Deserialize(e.to_string()))?;

        let mut observations = Vec::new();
        for day in page.results {
            let Ok(date) = parse_date(&day.fecha) else {
                tracing::debug!(fecha = %day.fecha, "dropping quote day with unparseable date");
                continue;
            };
            for quote in day.detalle {
                observations.push(Observation { date, value: quote.rate });
            }
        }

        Ok(Series::from_observations(currency.series_name(), observations))
    }

    /// Official USD/ARS rate over a date window.
    pub async fn get_official_rate(&self, range: &DateRange) -> BcraResult<Series> {
        self.get_currency_quotes(Currency::Usd, range).await
    }

    /// CNY/ARS cross rate over a date window.
    pub async fn get_cross_rate(&self, range: &DateRange) -> BcraResult<Series> {
        self.get_currency_quotes(Currency::Cny, range).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = BcraClient::new().unwrap();
        assert_eq!(client.monetary_url(), DEFAULT_BCRA_MONETARY_URL);
        assert_eq!(client.exchange_url(), DEFAULT_BCRA_EXCHANGE_URL);
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = BcraClient::builder()
            .monetary_url("http://localhost:8080/monetarias/")
            .exchange_url("http://localhost:8080/cambiarias/")
            .build()
            .unwrap();
        assert_eq!(client.monetary_url(), "http://localhost:8080/monetarias");
        assert_eq!(client.exchange_url(), "http://localhost:8080/cambiarias");
    }

    #[test]
    fn test_to_observations_drops_bad_dates_keeps_bad_values() {
        let records = vec![
            MonetaryRecord { fecha: "2024-01-02".into(), valor: Some(1.0) },
            MonetaryRecord { fecha: "not-a-date".into(), valor: Some(2.0) },
            MonetaryRecord { fecha: "2024-01-03".into(), valor: None },
        ];
        let observations = BcraClient::to_observations(records);
        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].value, Some(1.0));
        assert_eq!(observations[1].value, None);
    }
}
