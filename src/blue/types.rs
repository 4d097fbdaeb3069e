//! Wire types for the Bluelytics evolution endpoint.

use serde::{Deserialize, Serialize};

/// The quote source the dashboard keeps; the endpoint also serves "Oficial".
pub const SOURCE_BLUE: &str = "Blue";

/// Series name of the parallel rate.
pub const BLUE_SERIES_NAME: &str = "usd_blue";

/// One day's quote from `/v2/evolution.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionEntry {
    /// Quote source, e.g. "Blue" or "Oficial"
    pub source: String,
    /// Quote date, `YYYY-MM-DD`
    pub date: String,
    /// Buy-side quote
    pub value_buy: Option<f64>,
    /// Sell-side quote
    pub value_sell: Option<f64>,
}

impl EvolutionEntry {
    /// Midpoint of the buy/sell quotes, when both are present.
    pub fn midpoint(&self) -> Option<f64> {
        match (self.value_buy, self.value_sell) {
            (Some(buy), Some(sell)) => Some((buy + sell) / 2.0),
            _ => None,
        }
    }
}
