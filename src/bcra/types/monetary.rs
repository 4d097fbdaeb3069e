//! Wire types for the BCRA monetary-statistics endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// Monthly CPI variation (inflación mensual).
pub const VARIABLE_INFLATION_MONTHLY: u32 = 27;

/// Monetary policy rate (TNA). The id the shipped dashboard settled on; see
/// DESIGN.md for the history.
pub const VARIABLE_POLICY_RATE: u32 = 6;

/// Gross international reserves, millions of USD.
pub const VARIABLE_GROSS_RESERVES: u32 = 1;

/// Page size for monetary-series requests.
pub const MONETARY_PAGE_LIMIT: u32 = 3000;

/// Safety cap on pagination rounds for a single fetch.
///
/// The upstream API terminates naturally via a short page or the advertised
/// total; the cap only guards against a server that keeps returning full
/// pages forever.
pub const MAX_PAGES: u32 = 50;

/// One record of a monetary series, as served.
///
/// Both fields are coerced leniently downstream: an unparseable date drops
/// the record, an unparseable value keeps the date with an absent value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonetaryRecord {
    /// Observation date, `YYYY-MM-DD`
    pub fecha: String,
    /// Observed value
    #[serde(default, deserialize_with = "lenient_f64")]
    pub valor: Option<f64>,
}

/// Pagination metadata envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Result-set block carrying the advertised total
    #[serde(default)]
    pub resultset: Option<Resultset>,
}

/// Advertised result-set sizing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Resultset {
    /// Total records matching the query, across all pages
    #[serde(default)]
    pub count: Option<u32>,
}

/// One page of the monetary-series response.
#[derive(Debug, Clone, Deserialize)]
pub struct MonetaryPage {
    /// Records in this page
    #[serde(default)]
    pub results: Vec<MonetaryRecord>,
    /// Optional pagination metadata
    #[serde(default)]
    pub metadata: Option<PageMetadata>,
}

impl MonetaryPage {
    /// The advertised total count, when the server supplies one.
    pub fn advertised_total(&self) -> Option<u32> {
        self.metadata.as_ref()?.resultset.as_ref()?.count
    }
}

/// Accept a number, a numeric string, or null/absent.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

/// Outcome of a pagination step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStep {
    /// Fetch another page at the new offset
    Continue,
    /// Natural end of the result set
    Done,
    /// Safety cap hit before the server signalled completion
    Capped,
}

/// Offset/limit/running-total bookkeeping for one paginated fetch.
///
/// Never persisted; lives only for the duration of a single call.
#[derive(Debug, Clone)]
pub struct PageCursor {
    limit: u32,
    offset: u32,
    fetched: u32,
    pages: u32,
}

impl PageCursor {
    /// Start a cursor at offset 0 with the given page size.
    pub fn new(limit: u32) -> Self {
        Self { limit, offset: 0, fetched: 0, pages: 0 }
    }

    /// Current offset to request.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Page size to request.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Total records seen so far.
    pub fn fetched(&self) -> u32 {
        self.fetched
    }

    /// Record a received page and decide whether to keep going.
    ///
    /// Stops on a short page, on reaching the advertised total, or on the
    /// [`MAX_PAGES`] cap.
    pub fn advance(&mut self, page_len: u32, advertised_total: Option<u32>) -> PageStep {
        self.pages += 1;
        self.fetched += page_len;

        if page_len < self.limit {
            return PageStep::Done;
        }
        if let Some(total) = advertised_total {
            if self.fetched >= total {
                return PageStep::Done;
            }
        }
        if self.pages >= MAX_PAGES {
            return PageStep::Capped;
        }

        self.offset += self.limit;
        PageStep::Continue
    }
}
