//! Common types used throughout history-export
//!
//! This module contains shared type definitions and type aliases
//! used across multiple modules.

use crate::error::{Error, Result};
use chrono::{DateTime, FixedOffset, Local, TimeZone};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// A single history record. Never interpreted, only forwarded.
pub type HistoryRecord = JsonValue;

/// Records returned by one paged request
pub type Page = Vec<HistoryRecord>;

/// All pages of one user, concatenated in arrival order
pub type ExportBatch = Vec<HistoryRecord>;

/// Default number of records requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 1000;

// ============================================================================
// As-of Timestamp
// ============================================================================

/// Wire format of the `date` query parameter, e.g. `2021-01-01T00:00:00+0000`
pub const AS_OF_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Point in time every request of a run is anchored to.
///
/// Captured once per run so that all users and all pages see the same
/// snapshot of history, even if messages arrive while the export runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsOf(DateTime<FixedOffset>);

impl AsOf {
    /// Capture the current local time
    pub fn now() -> Self {
        Self(Local::now().fixed_offset())
    }

    /// Wrap an existing timestamp
    pub fn from_datetime<Tz: TimeZone>(dt: DateTime<Tz>) -> Self {
        Self(dt.fixed_offset())
    }

    /// Parse a timestamp in the wire format
    pub fn parse(s: &str) -> Result<Self> {
        DateTime::parse_from_str(s, AS_OF_FORMAT)
            .map(Self)
            .map_err(|e| Error::config(format!("Invalid as-of timestamp '{s}': {e}")))
    }

    /// Value sent as the `date` query parameter
    pub fn query_value(&self) -> String {
        self.0.format(AS_OF_FORMAT).to_string()
    }

    /// Timestamp text usable in a file name (no colons)
    pub fn file_stem(&self) -> String {
        self.query_value().replace(':', "-")
    }
}

impl fmt::Display for AsOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query_value())
    }
}

// ============================================================================
// Export Request
// ============================================================================

/// One user's unit of work
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// Numeric user ID or email address, used verbatim
    pub user: String,
    /// Snapshot time shared by the whole run
    pub as_of: AsOf,
}

impl ExportRequest {
    /// Create a new export request
    pub fn new(user: impl Into<String>, as_of: AsOf) -> Self {
        Self {
            user: user.into(),
            as_of,
        }
    }

    /// API path of the user's history endpoint
    pub fn history_path(&self) -> String {
        format!("v2/user/{}/history", self.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_as_of_query_value() {
        let as_of = AsOf::parse("2021-01-01T00:00:00+0000").unwrap();
        assert_eq!(as_of.query_value(), "2021-01-01T00:00:00+0000");
        assert_eq!(as_of.to_string(), "2021-01-01T00:00:00+0000");
    }

    #[test]
    fn test_as_of_keeps_offset() {
        let as_of = AsOf::parse("2017-03-14T15:09:26+0230").unwrap();
        assert_eq!(as_of.query_value(), "2017-03-14T15:09:26+0230");
    }

    #[test]
    fn test_as_of_file_stem_has_no_colons() {
        let as_of = AsOf::parse("2021-01-01T00:00:00+0000").unwrap();
        assert_eq!(as_of.file_stem(), "2021-01-01T00-00-00+0000");
        assert!(!as_of.file_stem().contains(':'));
    }

    #[test]
    fn test_as_of_from_utc() {
        let dt = Utc.with_ymd_and_hms(2020, 5, 17, 8, 30, 0).unwrap();
        let as_of = AsOf::from_datetime(dt);
        assert_eq!(as_of.query_value(), "2020-05-17T08:30:00+0000");
    }

    #[test]
    fn test_as_of_parse_rejects_garbage() {
        assert!(AsOf::parse("yesterday").is_err());
    }

    #[test]
    fn test_history_path() {
        let as_of = AsOf::parse("2021-01-01T00:00:00+0000").unwrap();
        let req = ExportRequest::new("42", as_of);
        assert_eq!(req.history_path(), "v2/user/42/history");

        let req = ExportRequest::new("jane@example.com", as_of);
        assert_eq!(req.history_path(), "v2/user/jane@example.com/history");
    }
}
