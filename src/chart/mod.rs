//! Chart rendering: turns combined series into styled chart specifications.
//!
//! The renderer never touches the network. It computes the display artifacts —
//! last-value headline, ±5% padded axis range, monthly tick marks — and emits
//! a serializable [`ChartSpec`] per panel for whatever frontend draws it.

pub mod panels;
pub mod render;
pub mod spec;
pub mod style;

// Re-export main types for convenience
pub use spec::{AxisTick, ChartSpec, Legend, LineDash, Margin, Point, Trace, TraceMode, XAxis, YAxis};
pub use style::{palette, ChartStyle};
