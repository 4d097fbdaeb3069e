//! Date-keyed tables produced by joining series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::series::types::{Observation, Series};

/// One dated row of a [`CombinedTable`], one cell per column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Join key
    pub date: NaiveDate,
    /// Cell values, index-aligned with [`CombinedTable::columns`]
    pub values: Vec<Option<f64>>,
}

/// The result of joining two or more series on their date key.
///
/// Rows are in ascending date order; the column order is the join's input
/// order. Building a table from the same inputs always yields the same table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedTable {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl CombinedTable {
    pub(crate) fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Column names, in join order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in ascending date order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Extract one column as a series.
    pub fn column(&self, name: &str) -> Option<Series> {
        let idx = self.column_index(name)?;
        Some(Series::from_observations(
            name,
            self.rows
                .iter()
                .map(|row| Observation { date: row.date, value: row.values[idx] })
                .collect(),
        ))
    }

    /// Minimum and maximum over every present cell in the table.
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        let mut bounds: Option<(f64, f64)> = None;
        for v in self.rows.iter().flat_map(|r| r.values.iter().flatten()) {
            bounds = Some(match bounds {
                Some((lo, hi)) => (lo.min(*v), hi.max(*v)),
                None => (*v, *v),
            });
        }
        bounds
    }

    /// Rescale every column so its first present value becomes 100.
    ///
    /// Columns with no present value are left untouched; rows where every
    /// cell is absent are dropped from the result.
    pub fn rebase_100(&self) -> CombinedTable {
        let bases: Vec<Option<f64>> = (0..self.columns.len())
            .map(|idx| self.rows.iter().find_map(|row| row.values[idx]))
            .collect();

        let rows = self
            .rows
            .iter()
            .filter(|row| row.values.iter().any(Option::is_some))
            .map(|row| Row {
                date: row.date,
                values: row
                    .values
                    .iter()
                    .zip(&bases)
                    .map(|(value, base)| match (value, base) {
                        (Some(v), Some(b)) => Some(v / b * 100.0),
                        _ => *value,
                    })
                    .collect(),
            })
            .collect();

        CombinedTable::new(self.columns.clone(), rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn table() -> CombinedTable {
        CombinedTable::new(
            vec!["a".into(), "b".into()],
            vec![
                Row { date: d("2024-01-01"), values: vec![Some(50.0), None] },
                Row { date: d("2024-01-02"), values: vec![Some(75.0), Some(10.0)] },
                Row { date: d("2024-01-03"), values: vec![Some(100.0), Some(20.0)] },
            ],
        )
    }

    #[test]
    fn test_column_extraction() {
        let t = table();
        let b = t.column("b").unwrap();
        assert_eq!(b.observations()[0].value, None);
        assert_eq!(b.last_present(), Some((d("2024-01-03"), 20.0)));
        assert!(t.column("nope").is_none());
    }

    #[test]
    fn test_rebase_100_scales_each_column_independently() {
        let rebased = table().rebase_100();
        let a: Vec<_> = rebased.rows().iter().map(|r| r.values[0]).collect();
        assert_eq!(a, vec![Some(100.0), Some(150.0), Some(200.0)]);
        let b: Vec<_> = rebased.rows().iter().map(|r| r.values[1]).collect();
        assert_eq!(b, vec![None, Some(100.0), Some(200.0)]);
    }

    #[test]
    fn test_rebase_100_leaves_empty_columns_untouched() {
        let t = CombinedTable::new(
            vec!["a".into(), "empty".into()],
            vec![
                Row { date: d("2024-01-01"), values: vec![Some(2.0), None] },
                Row { date: d("2024-01-02"), values: vec![Some(4.0), None] },
            ],
        );
        let rebased = t.rebase_100();
        assert_eq!(rebased.rows()[1].values, vec![Some(200.0), None]);
    }

    #[test]
    fn test_rebase_100_drops_all_absent_rows() {
        let t = CombinedTable::new(
            vec!["a".into()],
            vec![
                Row { date: d("2024-01-01"), values: vec![None] },
                Row { date: d("2024-01-02"), values: vec![Some(10.0)] },
            ],
        );
        let rebased = t.rebase_100();
        assert_eq!(rebased.rows().len(), 1);
        assert_eq!(rebased.rows()[0].date, d("2024-01-02"));
    }

    #[test]
    fn test_value_bounds_spans_all_columns() {
        assert_eq!(table().value_bounds(), Some((10.0, 100.0)));
    }
}
