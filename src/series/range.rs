//! Inclusive calendar-date windows used to constrain fetches and joins.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a date string does not parse as `YYYY-MM-DD`.
#[derive(Debug, Clone, Error)]
#[error("invalid date '{input}': expected YYYY-MM-DD")]
pub struct InvalidDate {
    /// The offending input, as received
    pub input: String,
}

/// An inclusive `[start, end]` calendar-date window.
///
/// A reversed pair is silently swapped rather than rejected: callers routinely
/// transpose the two pickers and the upstream APIs accept either order only by
/// accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range from two dates, swapping them if `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start > end {
            tracing::warn!(%start, %end, "reversed date range, swapping");
            Self { start: end, end: start }
        } else {
            Self { start, end }
        }
    }

    /// Parse a range from two `YYYY-MM-DD` strings.
    ///
    /// Inputs are trimmed and truncated to their first ten characters first,
    /// so ISO timestamps like `2024-03-01T00:00:00` are accepted.
    pub fn parse(start: &str, end: &str) -> Result<Self, InvalidDate> {
        Ok(Self::new(parse_date(start)?, parse_date(end)?))
    }

    /// Start of the window (inclusive).
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// End of the window (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` falls inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// The window bounds formatted as `YYYY-MM-DD` query values.
    pub fn as_query(&self) -> (String, String) {
        (
            self.start.format("%Y-%m-%d").to_string(),
            self.end.format("%Y-%m-%d").to_string(),
        )
    }
}

/// Parse a single lenient `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate, InvalidDate> {
    let trimmed = input.trim();
    let head = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").map_err(|_| InvalidDate {
        input: input.to_string(),
    })
}
