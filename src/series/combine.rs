//! Join, derive and resample operations over series.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::series::table::{CombinedTable, Row};
use crate::series::types::{Observation, Series};

/// Align series on their date key, keeping every date present in any input.
///
/// Cells for dates a series does not cover are absent. Rows come out in
/// ascending date order, columns in input order.
pub fn outer_join(inputs: &[Series]) -> CombinedTable {
    let columns: Vec<String> = inputs.iter().map(|s| s.name().to_string()).collect();
    let mut rows: BTreeMap<NaiveDate, Vec<Option<f64>>> = BTreeMap::new();

    for (idx, series) in inputs.iter().enumerate() {
        for obs in series.observations() {
            let cells = rows
                .entry(obs.date)
                .or_insert_with(|| vec![None; inputs.len()]);
            cells[idx] = obs.value;
        }
    }

    CombinedTable::new(
        columns,
        rows.into_iter()
            .map(|(date, values)| Row { date, values })
            .collect(),
    )
}

/// Align series on their date key, keeping only dates present in every input.
///
/// Presence means the series carries an observation for the date, even if its
/// value failed coercion and is absent.
pub fn inner_join(inputs: &[Series]) -> CombinedTable {
    let columns: Vec<String> = inputs.iter().map(|s| s.name().to_string()).collect();
    let mut rows: BTreeMap<NaiveDate, (usize, Vec<Option<f64>>)> = BTreeMap::new();

    for (idx, series) in inputs.iter().enumerate() {
        for obs in series.observations() {
            let entry = rows
                .entry(obs.date)
                .or_insert_with(|| (0, vec![None; inputs.len()]));
            entry.0 += 1;
            entry.1[idx] = obs.value;
        }
    }

    CombinedTable::new(
        columns,
        rows.into_iter()
            .filter(|(_, (hits, _))| *hits == inputs.len())
            .map(|(date, (_, values))| Row { date, values })
            .collect(),
    )
}

/// Derive `numerator / denominator` on the dates both series cover.
///
/// Inner-join semantics: dates missing from either input are dropped, and a
/// date where either value is absent stays absent.
pub fn ratio(numerator: &Series, denominator: &Series, name: impl Into<String>) -> Series {
    let joined = inner_join(&[numerator.clone(), denominator.clone()]);
    Series::from_observations(
        name,
        joined
            .rows()
            .iter()
            .map(|row| Observation {
                date: row.date,
                value: match (row.values[0], row.values[1]) {
                    (Some(num), Some(den)) => Some(num / den),
                    _ => None,
                },
            })
            .collect(),
    )
}

/// Keep the last observation of each calendar month, relabeled to the first
/// day of that month.
pub fn resample_monthly_last(series: &Series) -> Series {
    let mut by_month: BTreeMap<(i32, u32), Observation> = BTreeMap::new();
    for obs in series.observations() {
        // observations are date-ascending, so the last insert wins the month
        by_month.insert((obs.date.year(), obs.date.month()), *obs);
    }

    Series::from_observations(
        series.name(),
        by_month
            .into_values()
            .map(|obs| Observation {
                date: obs.date.with_day(1).unwrap_or(obs.date),
                value: obs.value,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_outer_join_preserves_unmatched_dates() {
        let a = series("a", &[("2024-01-01", 10.0)]);
        let b = series("b", &[("2024-01-02", 20.0)]);

        let table = outer_join(&[a, b]);
        assert_eq!(table.columns(), ["a", "b"]);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0].date, d("2024-01-01"));
        assert_eq!(table.rows()[0].values, vec![Some(10.0), None]);
        assert_eq!(table.rows()[1].date, d("2024-01-02"));
        assert_eq!(table.rows()[1].values, vec![None, Some(20.0)]);
    }

    #[test]
    fn test_inner_join_keeps_only_shared_dates() {
        let a = series("a", &[("2024-01-01", 1.0), ("2024-01-02", 2.0)]);
        let b = series("b", &[("2024-01-02", 20.0), ("2024-01-03", 30.0)]);

        let table = inner_join(&[a, b]);
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.rows()[0].date, d("2024-01-02"));
        assert_eq!(table.rows()[0].values, vec![Some(2.0), Some(20.0)]);
    }

    #[test]
    fn test_inner_join_counts_absent_observations_as_present_dates() {
        let a = Series::from_observations(
            "a",
            vec![Observation::missing(d("2024-01-01"))],
        );
        let b = series("b", &[("2024-01-01", 5.0)]);

        let table = inner_join(&[a, b]);
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.rows()[0].values, vec![None, Some(5.0)]);
    }

    #[test]
    fn test_ratio() {
        let index = series("merval_ars", &[("2024-01-02", 1000.0), ("2024-01-03", 1200.0)]);
        let rate = series("usd_blue", &[("2024-01-02", 500.0), ("2024-01-04", 600.0)]);

        let derived = ratio(&index, &rate, "merval_usd");
        assert_eq!(derived.name(), "merval_usd");
        assert_eq!(derived.len(), 1);
        assert_eq!(derived.observations()[0].value, Some(2.0));
    }

    #[test]
    fn test_ratio_absent_side_stays_absent() {
        let num = Series::from_observations(
            "num",
            vec![
                Observation::missing(d("2024-01-01")),
                Observation::new(d("2024-01-02"), 8.0),
            ],
        );
        let den = series("den", &[("2024-01-01", 2.0), ("2024-01-02", 4.0)]);

        let derived = ratio(&num, &den, "q");
        assert_eq!(derived.observations()[0].value, None);
        assert_eq!(derived.observations()[1].value, Some(2.0));
    }

    #[test]
    fn test_resample_monthly_last_keeps_last_and_relabels() {
        let daily = series(
            "rate",
            &[
                ("2024-01-03", 100.0),
                ("2024-01-17", 110.0),
                ("2024-01-29", 120.0),
                ("2024-02-14", 130.0),
            ],
        );

        let monthly = resample_monthly_last(&daily);
        assert_eq!(monthly.len(), 2);
        assert_eq!(monthly.observations()[0].date, d("2024-01-01"));
        assert_eq!(monthly.observations()[0].value, Some(120.0));
        assert_eq!(monthly.observations()[1].date, d("2024-02-01"));
        assert_eq!(monthly.observations()[1].value, Some(130.0));
    }

    #[test]
    fn test_join_idempotence() {
        let a = series("a", &[("2024-01-01", 1.0), ("2024-02-01", 2.0)]);
        let b = series("b", &[("2024-01-15", 3.0), ("2024-02-01", 4.0)]);

        let first = outer_join(&[a.clone(), b.clone()]);
        let second = outer_join(&[a.clone(), b.clone()]);
        assert_eq!(first, second);

        let bytes_first = serde_json::to_vec(&first).unwrap();
        let bytes_second = serde_json::to_vec(&second).unwrap();
        assert_eq!(bytes_first, bytes_second);

        assert_eq!(inner_join(&[a.clone(), b.clone()]), inner_join(&[a, b]));
    }
}
