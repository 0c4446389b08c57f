//! Authored-date resolution for content nodes
//!
//! The last commit touching a file wins over the date declared in its
//! front matter. Missing history is expected (new or untracked files)
//! and silently falls back.

use crate::content::history::VersionHistory;
use crate::error::{ChrysanthiumError, ChrysanthiumResult};
use chrono::{DateTime, Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

/// Calendar day a page was last authored, as zero-padded parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthoredDate {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl AuthoredDate {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            day: format!("{:02}", date.day()),
            month: format!("{:02}", date.month()),
            year: format!("{:04}", date.year()),
        }
    }

    /// `YYYY/MM`, as used in archive listings
    pub fn year_month(&self) -> String {
        format!("{}/{}", self.year, self.month)
    }
}

impl fmt::Display for AuthoredDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}

/// Local calendar day of an RFC 3339 timestamp
pub fn local_day(timestamp: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(timestamp.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Local).date_naive())
}

/// Parse a front-matter style date: `YYYY-MM-DD` or RFC 3339
pub fn parse_date(value: &str) -> ChrysanthiumResult<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| local_day(value))
        .ok_or_else(|| ChrysanthiumError::InvalidDate {
            value: value.to_string(),
        })
}

/// Resolve the authored date of `path`
pub async fn resolve_authored_date(
    history: &dyn VersionHistory,
    path: &Path,
    fallback: NaiveDate,
) -> AuthoredDate {
    let day = match history.last_change(path).await {
        Ok(Some(timestamp)) => match local_day(&timestamp) {
            Some(day) => {
                debug!("{} last changed {}", path.display(), timestamp);
                day
            }
            None => {
                warn!(
                    "Unparseable commit timestamp '{}' for {}, using fallback date",
                    timestamp,
                    path.display()
                );
                fallback
            }
        },
        Ok(None) => {
            debug!("No history for {}, using fallback date", path.display());
            fallback
        }
        Err(e) => {
            warn!("History lookup failed for {}: {}", path.display(), e);
            fallback
        }
    };

    AuthoredDate::from_date(day)
}
