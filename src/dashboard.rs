//! The dashboard shell: fetch the seven series, combine, render.
//!
//! One [`Dashboard::render`] call is one full cycle over a date range. Fetches
//! run sequentially (the upstream sources are few and small); nothing survives
//! between cycles.
//!
//! Failure tiers: BCRA and market-data errors are downgraded to [`Warning`]s
//! and their panel renders empty, so one broken source never blanks the whole
//! page. The parallel-rate fetch is the deliberate exception — a [`BlueError`]
//! propagates and aborts the cycle.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::bcra::types::{
    VARIABLE_GROSS_RESERVES, VARIABLE_INFLATION_MONTHLY, VARIABLE_POLICY_RATE,
};
use crate::bcra::BcraClient;
use crate::blue::{BlueError, BluelyticsClient};
use crate::chart::panels;
use crate::chart::{ChartSpec, ChartStyle};
use crate::http::RetryConfig;
use crate::market::types::{CEDEAR_TICKERS, MERVAL_USD_SERIES_NAME};
use crate::market::MarketDataClient;
use crate::series::{outer_join, ratio, DateRange, Series};

/// Identifies a dashboard panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    /// Monthly CPI variation
    Inflation,
    /// Monetary policy rate
    PolicyRate,
    /// Gross international reserves
    Reserves,
    /// Official vs. parallel USD rate
    ExchangeRates,
    /// CNY/ARS cross rate
    CrossRate,
    /// Merval index in USD
    EquityIndexUsd,
    /// CEDEAR basket rebased to 100
    CedearBasket,
}

impl PanelKind {
    /// Short source label used in warnings.
    pub fn source_label(&self) -> &'static str {
        match self {
            PanelKind::Inflation => "inflacion",
            PanelKind::PolicyRate => "tasa",
            PanelKind::Reserves => "reservas",
            PanelKind::ExchangeRates => "tipo de cambio",
            PanelKind::CrossRate => "cny",
            PanelKind::EquityIndexUsd => "merval",
            PanelKind::CedearBasket => "cedears",
        }
    }
}

/// A rendered panel; `chart` is absent when its source failed softly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Panel {
    /// Which panel this is
    pub kind: PanelKind,
    /// The rendered chart, absent on soft failure
    pub chart: Option<ChartSpec>,
}

/// A soft-tier failure surfaced to the user instead of aborting the cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warning {
    /// Which source failed
    pub source: String,
    /// The underlying error, formatted
    pub message: String,
}

/// One fully rendered dashboard cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    /// Render date, for the "Actualizado el ..." footer
    pub generated_on: NaiveDate,
    /// The requested window
    pub range: DateRange,
    /// Panels in the fixed three-column layout
    pub columns: Vec<Vec<Panel>>,
    /// Soft-tier failures collected along the way
    pub warnings: Vec<Warning>,
}

impl DashboardView {
    /// All panels in layout order.
    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.columns.iter().flatten()
    }

    /// Look up one panel by kind.
    pub fn panel(&self, kind: PanelKind) -> Option<&Panel> {
        self.panels().find(|panel| panel.kind == kind)
    }
}

/// Configuration of a [`Dashboard`], applied to every client.
#[derive(Debug, Clone, Default)]
pub struct DashboardConfig {
    /// Chart styling
    pub style: ChartStyle,
    /// Retry policy for all providers
    pub retry: RetryConfig,
    /// Request timeout for all providers; `None` keeps the default
    pub timeout: Option<std::time::Duration>,
}

/// Errors from wiring up a dashboard's clients.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// BCRA client could not be built
    #[error(transparent)]
    Bcra(#[from] crate::bcra::BcraError),
    /// Bluelytics client could not be built
    #[error(transparent)]
    Blue(#[from] BlueError),
    /// Market-data client could not be built
    #[error(transparent)]
    Market(#[from] crate::market::MarketError),
}

/// The fetch-merge-render pipeline over the three provider clients.
#[derive(Debug, Clone)]
pub struct Dashboard {
    bcra: BcraClient,
    blue: BluelyticsClient,
    market: MarketDataClient,
    style: ChartStyle,
}

impl Dashboard {
    /// Create a dashboard with default clients and styling.
    pub fn new() -> Result<Self, DashboardError> {
        Self::with_config(DashboardConfig::default())
    }

    /// Create a dashboard from a config applied uniformly to every client.
    pub fn with_config(config: DashboardConfig) -> Result<Self, DashboardError> {
        let mut bcra = BcraClient::builder().with_retry(config.retry.clone());
        let mut blue = BluelyticsClient::builder().with_retry(config.retry.clone());
        let mut market = MarketDataClient::builder().with_retry(config.retry);
        if let Some(timeout) = config.timeout {
            bcra = bcra.timeout(timeout);
            blue = blue.timeout(timeout);
            market = market.timeout(timeout);
        }
        Ok(Self {
            bcra: bcra.build()?,
            blue: blue.build()?,
            market: market.build()?,
            style: config.style,
        })
    }

    /// Create a dashboard from pre-built clients.
    pub fn from_clients(
        bcra: BcraClient,
        blue: BluelyticsClient,
        market: MarketDataClient,
        style: ChartStyle,
    ) -> Self {
        Self { bcra, blue, market, style }
    }

    /// Run one full fetch-merge-render cycle over the given window.
    ///
    /// Soft failures land in [`DashboardView::warnings`]; only the
    /// parallel-rate fetch can error out of here.
    pub async fn render(&self, range: &DateRange) -> Result<DashboardView, BlueError> {
        let mut warnings = Vec::new();

        // The parallel rate feeds two panels; fetched once, windowed here.
        let blue = self.blue.get_parallel_rate().await?.window(range);

        let inflation = soft(
            PanelKind::Inflation,
            self.bcra
                .get_monetary_series(VARIABLE_INFLATION_MONTHLY, range)
                .await,
            &mut warnings,
        );
        let policy_rate = soft(
            PanelKind::PolicyRate,
            self.bcra
                .get_monetary_series(VARIABLE_POLICY_RATE, range)
                .await,
            &mut warnings,
        );
        let reserves = soft(
            PanelKind::Reserves,
            self.bcra
                .get_monetary_series(VARIABLE_GROSS_RESERVES, range)
                .await,
            &mut warnings,
        );
        let official = soft(
            PanelKind::ExchangeRates,
            self.bcra.get_official_rate(range).await,
            &mut warnings,
        );
        let cross = soft(
            PanelKind::CrossRate,
            self.bcra.get_cross_rate(range).await,
            &mut warnings,
        );
        let merval = soft(
            PanelKind::EquityIndexUsd,
            self.market.get_equity_index(range).await,
            &mut warnings,
        );
        let basket = soft(
            PanelKind::CedearBasket,
            self.market.get_cedear_basket(range).await,
            &mut warnings,
        );

        let exchange_table = official
            .map(|official| outer_join(&[official, blue.clone()]));
        let merval_usd = merval
            .map(|merval| ratio(&merval, &blue, MERVAL_USD_SERIES_NAME));
        let basket_table = basket.map(|basket| {
            let named: Vec<Series> = basket
                .iter()
                .map(|series| {
                    CEDEAR_TICKERS
                        .iter()
                        .find(|(ticker, _)| *ticker == series.name())
                        .map(|(_, name)| series.renamed(*name))
                        .unwrap_or_else(|| series.clone())
                })
                .collect();
            outer_join(&named).rebase_100()
        });

        let style = &self.style;
        let columns = vec![
            vec![
                panel(PanelKind::Inflation, inflation.map(|s| panels::inflation_chart(&s, style))),
                panel(
                    PanelKind::PolicyRate,
                    policy_rate.map(|s| panels::policy_rate_chart(&s, style)),
                ),
            ],
            vec![
                panel(PanelKind::Reserves, reserves.map(|s| panels::reserves_chart(&s, style))),
                panel(
                    PanelKind::ExchangeRates,
                    exchange_table.map(|t| panels::exchange_rate_chart(&t, style)),
                ),
                panel(PanelKind::CrossRate, cross.map(|s| panels::cross_rate_chart(&s, style))),
            ],
            vec![
                panel(
                    PanelKind::EquityIndexUsd,
                    merval_usd.map(|s| panels::equity_usd_chart(&s, style)),
                ),
                panel(
                    PanelKind::CedearBasket,
                    basket_table.map(|t| panels::cedear_chart(&t, style)),
                ),
            ],
        ];

        Ok(DashboardView {
            generated_on: chrono::Utc::now().date_naive(),
            range: *range,
            columns,
            warnings,
        })
    }
}

/// Downgrade a soft-tier failure to a warning.
fn soft<T, E: std::fmt::Display>(
    kind: PanelKind,
    result: Result<T, E>,
    warnings: &mut Vec<Warning>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::warn!(source = kind.source_label(), %error, "series fetch failed");
            warnings.push(Warning {
                source: kind.source_label().to_string(),
                message: error.to_string(),
            });
            None
        }
    }
}

fn panel(kind: PanelKind, chart: Option<ChartSpec>) -> Panel {
    Panel { kind, chart }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_lookup() {
        let view = DashboardView {
            generated_on: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            range: DateRange::parse("2024-01-01", "2024-03-01").unwrap(),
            columns: vec![
                vec![Panel { kind: PanelKind::Inflation, chart: None }],
                vec![Panel { kind: PanelKind::Reserves, chart: None }],
            ],
            warnings: Vec::new(),
        };
        assert!(view.panel(PanelKind::Reserves).is_some());
        assert!(view.panel(PanelKind::CedearBasket).is_none());
        assert_eq!(view.panels().count(), 2);
    }

    #[test]
    fn test_source_labels() {
        assert_eq!(PanelKind::Inflation.source_label(), "inflacion");
        assert_eq!(PanelKind::CedearBasket.source_label(), "cedears");
    }
}
