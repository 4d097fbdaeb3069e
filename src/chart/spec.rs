//! Serializable chart specifications emitted by the renderer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a trace is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceMode {
    /// Plain line
    Lines,
    /// Line with fill down to zero
    Area,
}

/// Line dash style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineDash {
    /// Solid stroke
    Solid,
    /// Dotted stroke
    Dot,
}

/// One dated point of a trace; `value: None` renders as a gap to connect over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X position
    pub date: NaiveDate,
    /// Y value, absent for missing data
    pub value: Option<f64>,
}

/// A single styled trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    /// Legend name
    pub name: String,
    /// Stroke color
    pub color: String,
    /// Stroke width in px
    pub width: u32,
    /// Draw mode
    pub mode: TraceMode,
    /// Dash style
    pub dash: LineDash,
    /// Points in ascending date order
    pub points: Vec<Point>,
}

impl Trace {
    /// A solid line trace.
    pub fn line(
        name: impl Into<String>,
        color: impl Into<String>,
        width: u32,
        points: Vec<Point>,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            width,
            mode: TraceMode::Lines,
            dash: LineDash::Solid,
            points,
        }
    }

    /// A solid area trace filled to zero.
    pub fn area(
        name: impl Into<String>,
        color: impl Into<String>,
        width: u32,
        points: Vec<Point>,
    ) -> Self {
        Self {
            mode: TraceMode::Area,
            ..Self::line(name, color, width, points)
        }
    }

    /// Switch the trace to a dotted stroke.
    pub fn dotted(mut self) -> Self {
        self.dash = LineDash::Dot;
        self
    }
}

/// One labeled x-axis tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    /// Tick position
    pub position: NaiveDate,
    /// Tick label, e.g. "Mar\n2024"
    pub label: String,
}

/// X-axis settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XAxis {
    /// Explicit tick positions and labels
    pub ticks: Vec<AxisTick>,
}

/// Y-axis settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YAxis {
    /// Fixed display range; autoscale when absent
    pub range: Option<(f64, f64)>,
}

/// Panel margins in px.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Margin {
    pub fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

/// Horizontal legend placement under a panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    /// Vertical anchor in paper coordinates (negative = below the plot)
    pub y: f64,
}

/// A complete styled chart, ready for a rendering frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Bold panel title
    pub title: String,
    /// Smaller second title line, typically the last-period label
    pub subtitle: Option<String>,
    /// Large annotated value in the panel's top-left corner
    pub headline: Option<String>,
    /// Panel height in px
    pub height: u32,
    /// Panel margins
    pub margin: Margin,
    /// Panel and plot background color
    pub background: String,
    /// Font family
    pub font_family: String,
    /// Base font size in px
    pub font_size: u32,
    /// Font color
    pub font_color: String,
    /// X-axis settings
    pub x_axis: XAxis,
    /// Y-axis settings
    pub y_axis: YAxis,
    /// Legend, shown only for multi-trace panels
    pub legend: Option<Legend>,
    /// Traces in draw order
    pub traces: Vec<Trace>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_builders() {
        let trace = Trace::area("usd_oficial", "#2ECC71", 3, Vec::new());
        assert_eq!(trace.mode, TraceMode::Area);
        assert_eq!(trace.dash, LineDash::Solid);

        let dotted = Trace::line("usd_blue", "#2ECC71", 3, Vec::new()).dotted();
        assert_eq!(dotted.mode, TraceMode::Lines);
        assert_eq!(dotted.dash, LineDash::Dot);
    }

    #[test]
    fn test_spec_serializes() {
        let spec = ChartSpec {
            title: "Inflación mensual".to_string(),
            subtitle: Some("March 2024".to_string()),
            headline: Some("11.0 %".to_string()),
            height: 616,
            margin: Margin::new(25, 25, 200, 30),
            background: "#0B2C66".to_string(),
            font_family: "Segoe UI".to_string(),
            font_size: 13,
            font_color: "white".to_string(),
            x_axis: XAxis::default(),
            y_axis: YAxis { range: Some((0.0, 10.0)) },
            legend: None,
            traces: Vec::new(),
        };
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["title"], "Inflación mensual");
        assert_eq!(json["y_axis"]["range"][1], 10.0);
    }
}
