//! Market-data client for the equity index and the CEDEAR basket.
//!
//! Bulk historical daily closes from the Yahoo Finance chart endpoint, one
//! request per ticker. Like the BCRA module this is soft-tier: the dashboard
//! turns a [`MarketError`] into a warning and an empty panel.

pub mod client;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::{MarketDataClient, MarketDataClientBuilder};
pub use error::{MarketError, MarketResult};
pub use types::{
    CEDEAR_TICKERS, MERVAL_SERIES_NAME, MERVAL_TICKER, MERVAL_USD_SERIES_NAME,
};
