//! Error types for the market-data client.

use thiserror::Error;

/// Error type for market-data (daily close) requests.
#[derive(Debug, Error)]
pub enum MarketError {
    /// HTTP/network error from reqwest
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("market data provider replied {status}: {body}")]
    Remote {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Structured error inside a 2xx chart envelope
    #[error("chart error {code}: {description}")]
    Chart {
        /// Provider error code
        code: String,
        /// Provider error description
        description: String,
    },

    /// JSON deserialization error
    #[error("Deserialization error: {0}")]
    Deserialize(String),

    /// The ticker returned no usable closes for the range
    #[error("no data for ticker {ticker}")]
    NoData {
        /// The requested ticker
        ticker: String,
    },
}

/// Result type alias for market-data operations.
pub type MarketResult<T> = Result<T, MarketError>;
