//! Wire types for the Yahoo Finance chart endpoint.

use serde::Deserialize;

/// Ticker of the Merval equity index.
pub const MERVAL_TICKER: &str = "^MERV";

/// Series name of the Merval index in pesos.
pub const MERVAL_SERIES_NAME: &str = "merval_ars";

/// Series name of the Merval index in parallel-rate dollars.
pub const MERVAL_USD_SERIES_NAME: &str = "merval_usd";

/// The CEDEAR basket: ticker and display name.
pub const CEDEAR_TICKERS: [(&str, &str); 4] = [
    ("YPFD.BA", "YPF"),
    ("GGAL.BA", "Galicia"),
    ("BMA.BA", "Banco Macro"),
    ("MELI.BA", "MercadoLibre"),
];

/// Top-level envelope of `/v8/finance/chart/{ticker}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartEnvelope {
    /// The chart payload
    pub chart: ChartBody,
}

/// Result/error pair inside the envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartBody {
    /// Result list, one entry per requested ticker
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    /// Provider error, set when `result` is null
    #[serde(default)]
    pub error: Option<ChartError>,
}

/// Structured provider error.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartError {
    /// Error code, e.g. "Not Found"
    #[serde(default)]
    pub code: String,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
}

/// One ticker's chart data.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartResult {
    /// Unix timestamps (seconds) of the trading days
    #[serde(default)]
    pub timestamp: Option<Vec<i64>>,
    /// Indicator blocks keyed by kind
    pub indicators: Indicators,
}

/// Indicator blocks of a chart result.
#[derive(Debug, Clone, Deserialize)]
pub struct Indicators {
    /// Quote blocks; the first carries the daily closes
    #[serde(default)]
    pub quote: Vec<QuoteBlock>,
}

/// OHLCV arrays, index-aligned with `timestamp`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteBlock {
    /// Daily closing prices; null for non-trading entries
    #[serde(default)]
    pub close: Option<Vec<Option<f64>>>,
}
