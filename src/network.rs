//! Endpoint URL constants for the upstream data providers.

/// Default base URL for the BCRA monetary-statistics API (v3.0).
pub const DEFAULT_BCRA_MONETARY_URL: &str = "https://api.bcra.gob.ar/estadisticas/v3.0/monetarias";

/// Default base URL for the BCRA exchange-rate API (v1.0).
pub const DEFAULT_BCRA_EXCHANGE_URL: &str = "https://api.bcra.gob.ar/estadisticascambiarias/v1.0";

/// Default base URL for the Bluelytics parallel-rate API.
pub const DEFAULT_BLUELYTICS_URL: &str = "https://api.bluelytics.com.ar/v2";

/// Default base URL for the Yahoo Finance chart API.
pub const DEFAULT_MARKET_DATA_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
