//! Core observation and series types.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::series::range::DateRange;

/// A single dated data point of a series.
///
/// `value` is `None` when the upstream record existed but its value (or date)
/// did not coerce cleanly — a missing point, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Calendar date, no time-of-day
    pub date: NaiveDate,
    /// Observed value, absent when the upstream field was missing or malformed
    pub value: Option<f64>,
}

impl Observation {
    /// Create an observation with a present value.
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value: Some(value) }
    }

    /// Create an observation with an absent value.
    pub fn missing(date: NaiveDate) -> Self {
        Self { date, value: None }
    }
}

/// A named, date-ordered sequence of observations.
///
/// Construction collapses duplicate dates by arithmetic mean and sorts
/// ascending, so dates are strictly increasing for every `Series` in
/// circulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    name: String,
    observations: Vec<Observation>,
}

impl Series {
    /// Build a series from raw observations.
    ///
    /// Same-day duplicates are averaged over their present values (a date
    /// where every duplicate is absent stays absent); the result is sorted
    /// ascending by date.
    pub fn from_observations(name: impl Into<String>, observations: Vec<Observation>) -> Self {
        let mut by_date: BTreeMap<NaiveDate, (f64, u32)> = BTreeMap::new();
        for obs in &observations {
            let slot = by_date.entry(obs.date).or_insert((0.0, 0));
            if let Some(v) = obs.value {
                slot.0 += v;
                slot.1 += 1;
            }
        }

        let observations = by_date
            .into_iter()
            .map(|(date, (sum, count))| Observation {
                date,
                value: (count > 0).then(|| sum / count as f64),
            })
            .collect();

        Self { name: name.into(), observations }
    }

    /// An empty series carrying only its name.
    pub fn empty(name: impl Into<String>) -> Self {
        Self { name: name.into(), observations: Vec::new() }
    }

    /// Series name (source identifier or display key).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Observations in ascending date order.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Number of observations (present or absent).
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the series has no observations at all.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// The last observation with a present value, if any.
    pub fn last_present(&self) -> Option<(NaiveDate, f64)> {
        self.observations
            .iter()
            .rev()
            .find_map(|obs| obs.value.map(|v| (obs.date, v)))
    }

    /// The first observation with a present value, if any.
    pub fn first_present(&self) -> Option<(NaiveDate, f64)> {
        self.observations
            .iter()
            .find_map(|obs| obs.value.map(|v| (obs.date, v)))
    }

    /// Minimum and maximum over present values, if any are present.
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        let mut bounds: Option<(f64, f64)> = None;
        for v in self.observations.iter().filter_map(|obs| obs.value) {
            bounds = Some(match bounds {
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
                None => (v, v),
            });
        }
        bounds
    }

    /// Restrict the series to an inclusive date window.
    pub fn window(&self, range: &DateRange) -> Series {
        Series {
            name: self.name.clone(),
            observations: self
                .observations
                .iter()
                .copied()
                .filter(|obs| range.contains(obs.date))
                .collect(),
        }
    }

    /// Same observations under a different name.
    pub fn renamed(&self, name: impl Into<String>) -> Series {
        Series {
            name: name.into(),
            observations: self.observations.clone(),
        }
    }

    /// Apply `f` to every present value, keeping dates and absences.
    pub fn map_values(&self, f: impl Fn(f64) -> f64) -> Series {
        Series {
            name: self.name.clone(),
            observations: self
                .observations
                .iter()
                .map(|obs| Observation {
                    date: obs.date,
                    value: obs.value.map(&f),
                })
                .collect(),
        }
    }
}
