//! Integration tests for the combine-and-render pipeline.
//!
//! Everything here is offline: series are built by hand and pushed through
//! the same joins and panel builders the dashboard uses.

use austral::chart::panels;
use austral::chart::ChartStyle;
use austral::series::{
    inner_join, outer_join, ratio, resample_monthly_last, DateRange, Observation, Series,
};
use chrono::NaiveDate;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn series(name: &str, points: &[(&str, f64)]) -> Series {
    Series::from_observations(
        name,
        points
            .iter()
            .map(|(date, value)| Observation::new(d(date), *value))
            .collect(),
    )
}

// =============================================================================
// Date-range handling
// =============================================================================

mod ranges {
    use super::*;

    #[test]
    fn test_reversed_range_behaves_like_sorted_range() {
        let swapped = DateRange::parse("2024-06-30", "2024-01-01").unwrap();
        let sorted = DateRange::parse("2024-01-01", "2024-06-30").unwrap();
        assert_eq!(swapped, sorted);
    }

    #[test]
    fn test_malformed_date_is_an_error_not_a_panic() {
        assert!(DateRange::parse("30-06-2024", "2024-01-01").is_err());
        assert!(DateRange::parse("2024-06-31", "2024-01-01").is_err());
    }

    #[test]
    fn test_window_filters_native_range() {
        // the parallel-rate fetch returns full history; the caller windows it
        let history = series(
            "usd_blue",
            &[
                ("2023-01-02", 370.0),
                ("2024-01-02", 1020.0),
                ("2024-03-01", 1015.0),
                ("2025-01-02", 1230.0),
            ],
        );
        let range = DateRange::parse("2024-01-01", "2024-12-31").unwrap();
        let windowed = history.window(&range);
        assert_eq!(windowed.len(), 2);
        assert_eq!(windowed.first_present().unwrap().0, d("2024-01-02"));
    }
}

// =============================================================================
// Joins and derived series
// =============================================================================

mod joins {
    use super::*;

    #[test]
    fn test_outer_join_keeps_both_sides() {
        let a = series("a", &[("2024-01-01", 10.0)]);
        let b = series("b", &[("2024-01-02", 20.0)]);

        let table = outer_join(&[a, b]);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0].values, vec![Some(10.0), None]);
        assert_eq!(table.rows()[1].values, vec![None, Some(20.0)]);
    }

    #[test]
    fn test_inner_join_drops_unmatched_dates() {
        let a = series("a", &[("2024-01-01", 1.0), ("2024-01-02", 2.0)]);
        let b = series("b", &[("2024-01-02", 3.0)]);

        let table = inner_join(&[a, b]);
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.rows()[0].date, d("2024-01-02"));
    }

    #[test]
    fn test_index_in_hard_currency() {
        let merval = series("merval_ars", &[("2024-03-01", 1000.0)]);
        let blue = series("usd_blue", &[("2024-03-01", 500.0), ("2024-03-02", 510.0)]);

        let usd = ratio(&merval, &blue, "merval_usd");
        assert_eq!(usd.len(), 1);
        assert_eq!(usd.observations()[0].value, Some(2.0));
    }

    #[test]
    fn test_base_100_normalization() {
        let a = series("a", &[("2024-01-01", 50.0), ("2024-01-02", 75.0), ("2024-01-03", 100.0)]);
        let table = outer_join(&[a]).rebase_100();
        let values: Vec<_> = table.rows().iter().map(|r| r.values[0]).collect();
        assert_eq!(values, vec![Some(100.0), Some(150.0), Some(200.0)]);
    }

    #[test]
    fn test_monthly_resample_relabels_to_month_start() {
        let daily = series(
            "tasa",
            &[("2024-01-05", 1.0), ("2024-01-15", 2.0), ("2024-01-25", 3.0)],
        );
        let monthly = resample_monthly_last(&daily);
        assert_eq!(monthly.len(), 1);
        assert_eq!(monthly.observations()[0].date, d("2024-01-01"));
        assert_eq!(monthly.observations()[0].value, Some(3.0));
    }

    #[test]
    fn test_combiner_is_idempotent() {
        let a = series("a", &[("2024-01-01", 1.5), ("2024-02-01", 2.5)]);
        let b = series("b", &[("2024-01-15", 3.5)]);
        let range = DateRange::parse("2024-01-01", "2024-02-28").unwrap();

        let run = || outer_join(&[a.window(&range), b.window(&range)]).rebase_100();
        let first = serde_json::to_vec(&run()).unwrap();
        let second = serde_json::to_vec(&run()).unwrap();
        assert_eq!(first, second);
    }
}

// =============================================================================
// Panel rendering over combined data
// =============================================================================

mod rendering {
    use super::*;

    #[test]
    fn test_exchange_panel_from_outer_joined_table() {
        let official = series("usd_oficial", &[("2024-03-01", 850.0), ("2024-03-05", 860.0)]);
        let blue = series("usd_blue", &[("2024-03-04", 1015.0), ("2024-03-05", 1025.0)]);
        let table = outer_join(&[official, blue]);

        let spec = panels::exchange_rate_chart(&table, &ChartStyle::default());
        assert_eq!(spec.traces.len(), 2);
        // padded by ±5% of the observed min/max across both columns
        let (lo, hi) = spec.y_axis.range.unwrap();
        assert!((lo - 850.0 * 0.95).abs() < 1e-9);
        assert!((hi - 1025.0 * 1.05).abs() < 1e-9);
        assert_eq!(
            spec.headline.as_deref(),
            Some("Oficial: 860 | Blue: 1,025")
        );
    }

    #[test]
    fn test_monthly_ticks_cover_each_month_once() {
        let s = series(
            "reservas",
            &[
                ("2024-01-03", 21000.0),
                ("2024-01-17", 22000.0),
                ("2024-02-07", 23000.0),
                ("2024-03-27", 28512.0),
            ],
        );
        let spec = panels::reserves_chart(&s, &ChartStyle::default());
        let ticks: Vec<_> = spec.x_axis.ticks.iter().map(|t| t.position).collect();
        assert_eq!(ticks, vec![d("2024-01-01"), d("2024-02-01"), d("2024-03-01")]);
        assert_eq!(spec.x_axis.ticks[0].label, "Jan\n2024");
    }

    #[test]
    fn test_basket_render_after_rebase() {
        let ypf = series("YPF", &[("2024-01-02", 20.0), ("2024-02-01", 30.0)]);
        let meli = series("MercadoLibre", &[("2024-01-02", 1500.0), ("2024-02-01", 1800.0)]);
        let table = outer_join(&[ypf, meli]).rebase_100();

        let spec = panels::cedear_chart(&table, &ChartStyle::default());
        assert_eq!(spec.traces.len(), 2);
        assert_eq!(spec.traces[0].points[1].value, Some(150.0));
        assert_eq!(spec.traces[1].points[1].value, Some(120.0));
        assert_eq!(spec.subtitle.as_deref(), Some("Indice 100 - January 2024"));
    }
}
