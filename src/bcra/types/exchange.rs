//! Wire types for the BCRA exchange-rate endpoint.

use serde::{Deserialize, Serialize};

/// Fixed `limit` for exchange-rate quote requests.
pub const EXCHANGE_QUOTE_LIMIT: u32 = 1000;

/// Quoted currencies the dashboard requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    /// US dollar, the official rate
    Usd,
    /// Chinese yuan, the cross rate
    Cny,
}

impl Currency {
    /// Path segment of the `Cotizaciones/{code}` endpoint.
    pub fn as_path(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Cny => "CNY",
        }
    }

    /// Series name the dashboard uses for this currency.
    pub fn series_name(&self) -> &'static str {
        match self {
            Currency::Usd => "usd_oficial",
            Currency::Cny => "cny_oficial",
        }
    }
}

/// One intraday quote inside a day's `detalle` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteDetail {
    /// Quoted rate
    #[serde(rename = "tipoCotizacion")]
    pub rate: Option<f64>,
}

/// All quotes for one calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayQuotes {
    /// Quote date, `YYYY-MM-DD`
    pub fecha: String,
    /// Intraday quotes, flattened and averaged downstream
    #[serde(default)]
    pub detalle: Vec<QuoteDetail>,
}

/// Response envelope of the `Cotizaciones/{code}` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangePage {
    /// Date-grouped quote records
    #[serde(default)]
    pub results: Vec<DayQuotes>,
}
