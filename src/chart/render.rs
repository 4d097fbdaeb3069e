//! Display computations shared by the panel builders.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use num_format::{Locale, ToFormattedString};

use crate::chart::spec::{AxisTick, Point};
use crate::series::Series;

/// Relative padding applied around the observed min/max.
const AXIS_PADDING: f64 = 0.05;

/// Pad an observed `(min, max)` pair by ±5% for display.
pub fn padded_range(bounds: (f64, f64)) -> (f64, f64) {
    let (min, max) = bounds;
    (min * (1.0 - AXIS_PADDING), max * (1.0 + AXIS_PADDING))
}

/// First day of each distinct calendar month among `dates`, ascending.
pub fn month_starts(dates: impl IntoIterator<Item = NaiveDate>) -> Vec<NaiveDate> {
    let months: BTreeSet<(i32, u32)> = dates
        .into_iter()
        .map(|date| (date.year(), date.month()))
        .collect();
    months
        .into_iter()
        .filter_map(|(year, month)| NaiveDate::from_ymd_opt(year, month, 1))
        .collect()
}

/// Long month label, e.g. "March 2024".
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Two-line tick label, e.g. "Mar\n2024".
pub fn tick_label(date: NaiveDate) -> String {
    date.format("%b\n%Y").to_string()
}

/// Monthly tick marks for the given dates.
pub fn month_ticks(dates: impl IntoIterator<Item = NaiveDate>) -> Vec<AxisTick> {
    month_starts(dates)
        .into_iter()
        .map(|position| AxisTick { position, label: tick_label(position) })
        .collect()
}

/// One tick per observation date, the dense variant.
pub fn date_ticks(dates: impl IntoIterator<Item = NaiveDate>) -> Vec<AxisTick> {
    dates
        .into_iter()
        .map(|position| AxisTick { position, label: tick_label(position) })
        .collect()
}

/// A series' observations as trace points, absences preserved as gaps.
pub fn trace_points(series: &Series) -> Vec<Point> {
    series
        .observations()
        .iter()
        .map(|obs| Point { date: obs.date, value: obs.value })
        .collect()
}

/// The last present value with its long month label, for panel headlines.
pub fn last_value_label(series: &Series) -> Option<(f64, String)> {
    series
        .last_present()
        .map(|(date, value)| (value, month_label(date)))
}

/// Format a value with thousands separators and fixed decimals, e.g.
/// `12345.678` with one decimal becomes `12,345.7`.
pub fn fmt_value(value: f64, decimals: u32) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value.abs() * factor).round() / factor;
    let sign = if value < 0.0 && rounded != 0.0 { "-" } else { "" };
    let whole = (rounded.trunc() as i64).to_formatted_string(&Locale::en);

    if decimals == 0 {
        return format!("{sign}{whole}");
    }
    let frac = ((rounded - rounded.trunc()) * factor).round() as u64;
    format!("{sign}{whole}.{frac:0width$}", width = decimals as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_padded_range() {
        let (lo, hi) = padded_range((100.0, 200.0));
        assert!((lo - 95.0).abs() < 1e-9);
        assert!((hi - 210.0).abs() < 1e-9);
    }

    #[test]
    fn test_month_starts_dedupes_and_sorts() {
        let starts = month_starts(vec![
            d("2024-02-15"),
            d("2024-01-03"),
            d("2024-01-29"),
            d("2024-02-01"),
        ]);
        assert_eq!(starts, vec![d("2024-01-01"), d("2024-02-01")]);
    }

    #[test]
    fn test_labels() {
        assert_eq!(month_label(d("2024-03-05")), "March 2024");
        assert_eq!(tick_label(d("2024-03-01")), "Mar\n2024");
    }

    #[test]
    fn test_fmt_value() {
        assert_eq!(fmt_value(12345.678, 1), "12,345.7");
        assert_eq!(fmt_value(1020.0, 0), "1,020");
        assert_eq!(fmt_value(11.04, 1), "11.0");
        assert_eq!(fmt_value(-950.25, 0), "-950");
        assert_eq!(fmt_value(0.95, 1), "1.0");
    }

    #[test]
    fn test_last_value_label() {
        use crate::series::Observation;
        let series = Series::from_observations(
            "x",
            vec![
                Observation::new(d("2024-02-29"), 3.0),
                Observation::missing(d("2024-03-31")),
            ],
        );
        let (value, label) = last_value_label(&series).unwrap();
        assert_eq!(value, 3.0);
        assert_eq!(label, "February 2024");
    }
}
