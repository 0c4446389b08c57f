//! Quote and rotation record types
//!
//! The record is persisted as JSON with the field names the blog page
//! has always used (`date`, `randomQuote`, `quotes`), so records written
//! by the browser page load unchanged.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};

/// A single quote
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub quote: String,
    pub author: String,
    pub from: String,
}

impl Quote {
    pub fn new(quote: impl Into<String>, author: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            author: author.into(),
            from: from.into(),
        }
    }

    /// The placeholder shown when no quote could be resolved
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.quote.is_empty() && self.author.is_empty() && self.from.is_empty()
    }
}

/// Payload served by a quote source
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteList {
    pub quotes: Vec<Quote>,
}

/// The persisted state of the daily rotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteCacheRecord {
    /// Local midnight of the day `random_quote` was drawn for
    pub date: DateTime<Local>,

    /// The quote handed out for `date`
    #[serde(default)]
    pub random_quote: Quote,

    /// Quotes not yet served
    #[serde(default)]
    pub quotes: Vec<Quote>,
}

impl QuoteCacheRecord {
    /// Create a record dated at the start of `day`
    pub fn new(day: NaiveDate, random_quote: Quote, quotes: Vec<Quote>) -> Self {
        Self {
            date: start_of_day(day),
            random_quote,
            quotes,
        }
    }

    /// Calendar day the record was written for
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// A record is current unless its day is strictly before `today`
    pub fn is_current(&self, today: NaiveDate) -> bool {
        self.day() >= today
    }

    /// Check if every quote in the pool has been served
    pub fn is_exhausted(&self) -> bool {
        self.quotes.is_empty()
    }
}

/// Local midnight for a calendar day
///
/// When midnight falls into a DST gap the UTC midnight of that day is
/// used instead.
pub fn start_of_day(day: NaiveDate) -> DateTime<Local> {
    let midnight = day.and_time(NaiveTime::MIN);
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .unwrap_or_else(|| Local.from_utc_datetime(&midnight))
}
