//! Explicit chart styling configuration.
//!
//! The original dashboard kept its styling in page-level framework state;
//! here it is a plain value handed to the renderer.

use serde::{Deserialize, Serialize};

/// Trace palette of the dashboard.
pub mod palette {
    /// Dodger blue, inflation and primary traces
    pub const BLUE: &str = "#1E90FF";
    /// Green, reserves and exchange-rate traces
    pub const GREEN: &str = "#2ECC71";
    /// Orange, equity traces
    pub const ORANGE: &str = "#FF5733";
    /// Light sky blue, fourth basket trace
    pub const SKY: &str = "#7FDBFF";
}

/// Shared look of every panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Panel and plot background color
    pub background: String,
    /// Font family of titles, ticks and headlines
    pub font_family: String,
    /// Base font size in px
    pub font_size: u32,
    /// Font color
    pub font_color: String,
    /// Line width of single-series traces
    pub line_width: u32,
    /// Line width of basket traces
    pub basket_line_width: u32,
    /// Height of the two tall panels (inflation, basket)
    pub tall_height: u32,
    /// Height of the regular panels
    pub panel_height: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            background: "#0B2C66".to_string(),
            font_family: "Segoe UI".to_string(),
            font_size: 13,
            font_color: "white".to_string(),
            line_width: 3,
            basket_line_width: 2,
            tall_height: 616,
            panel_height: 300,
        }
    }
}
