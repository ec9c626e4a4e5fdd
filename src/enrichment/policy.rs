// Freshness policy for the enrichment cache.
// Same-day records are always served; otherwise even days serve any cached payload
// and odd days always go upstream.

use chrono::{Datelike, NaiveDate};
use serde_json::Value;

use crate::cache::CacheRecord;

/// Where a returned payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Cache was written today.
    SameDay,
    /// Cache is older than today, but today is an even day.
    EvenDay,
    /// Fetched from the provider during this request.
    Fresh,
}

impl Provenance {
    pub fn message(&self) -> &'static str {
        match self {
            Provenance::SameDay => "Cached data",
            Provenance::EvenDay => "Cached data (even day)",
            Provenance::Fresh => "Fresh data from Scrapin API",
        }
    }
}

/// Outcome of evaluating the cache against today's date.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    Serve { provenance: Provenance, data: Value },
    Fetch,
}

/// Returns true when `date` falls on an even day of the month.
pub fn is_even_day(date: NaiveDate) -> bool {
    date.day() % 2 == 0
}

/// Decide whether `record` can answer a request made on `today`.
pub fn decide(today: NaiveDate, record: &CacheRecord) -> Decision {
    if record.last_request_date == Some(today) {
        return Decision::Serve {
            provenance: Provenance::SameDay,
            data: record.data.clone().unwrap_or(Value::Null),
        };
    }

    if is_even_day(today) {
        if let Some(data) = &record.data {
            return Decision::Serve {
                provenance: Provenance::EvenDay,
                data: data.clone(),
            };
        }
    }

    Decision::Fetch
}
