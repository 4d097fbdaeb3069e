//! # Austral
//!
//! A fetch-merge-render pipeline for a small dashboard of Argentine
//! macroeconomic and market series: monthly inflation, the policy rate,
//! international reserves, official/parallel/cross exchange rates, the Merval
//! index in USD and a CEDEAR basket.
//!
//! ## Modules
//!
//! Three provider clients:
//! - [`bcra`]: central-bank monetary statistics (paginated) and official
//!   exchange-rate quotes
//! - [`blue`]: Bluelytics parallel-rate history
//! - [`market`]: bulk daily closes for the equity tickers
//!
//! Plus the pure layers they feed:
//! - [`series`]: observations, series, joins and resampling
//! - [`chart`]: styled chart specifications
//! - [`dashboard`]: the shell tying one render cycle together
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use austral::{Dashboard, DateRange};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dashboard = Dashboard::new()?;
//!     let range = DateRange::parse("2024-01-01", "2024-06-30")?;
//!
//!     let view = dashboard.render(&range).await?;
//!     for warning in &view.warnings {
//!         eprintln!("warning [{}]: {}", warning.source, warning.message);
//!     }
//!     println!("{}", serde_json::to_string_pretty(&view)?);
//!
//!     Ok(())
//! }
//! ```

/// Central-bank statistics client (monetary series + official FX quotes).
pub mod bcra;

/// Bluelytics parallel-rate client.
pub mod blue;

/// Chart specifications and the panel renderer.
pub mod chart;

/// The dashboard shell: one fetch-merge-render cycle per call.
pub mod dashboard;

/// Shared HTTP plumbing: timeout and retry policy.
pub mod http;

/// Market-data client for the equity index and CEDEAR basket.
pub mod market;

/// Endpoint URL constants.
pub mod network;

/// Series model and combining operations.
pub mod series;

// Re-export the main entry points
pub use dashboard::{Dashboard, DashboardConfig, DashboardError, DashboardView, Panel, PanelKind, Warning};
pub use http::RetryConfig;
pub use series::{DateRange, Observation, Series};
