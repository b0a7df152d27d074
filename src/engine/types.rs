//! Engine types
//!
//! Per-user outcomes, run statistics and the run report.

use crate::types::{AsOf, ExportBatch};
use serde::Serialize;
use std::path::PathBuf;

/// Records fetched for one user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchedHistory {
    /// Records in arrival order
    pub records: ExportBatch,
    /// Number of requests made, including the final empty page
    pub pages: u32,
}

/// Step at which a user's export failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureStage {
    /// Fetching history from the API
    Fetch,
    /// Saving the fetched history
    Write,
}

/// Result of exporting one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserOutcome {
    /// The user's export file was written
    FileCreated {
        /// User identifier as given
        user: String,
        /// Path of the written file
        path: PathBuf,
        /// Records in the file
        records: usize,
        /// Requests made
        pages: u32,
    },
    /// The user's export failed; no file was written
    ExportFailed {
        /// User identifier as given
        user: String,
        /// Where the export failed
        stage: FailureStage,
        /// Human readable reason
        error: String,
    },
}

impl UserOutcome {
    /// User this outcome belongs to
    pub fn user(&self) -> &str {
        match self {
            Self::FileCreated { user, .. } | Self::ExportFailed { user, .. } => user,
        }
    }

    /// Check if the export succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, Self::FileCreated { .. })
    }

    /// Path of the written file, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::FileCreated { path, .. } => Some(path),
            Self::ExportFailed { .. } => None,
        }
    }
}

/// Statistics from an export run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportStats {
    /// Users whose file was written
    pub users_exported: usize,
    /// Users that failed
    pub users_failed: usize,
    /// Total records fetched
    pub records_fetched: usize,
    /// Total requests made
    pub pages_fetched: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl ExportStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Add records
    pub fn add_records(&mut self, count: usize) {
        self.records_fetched += count;
    }

    /// Add pages
    pub fn add_pages(&mut self, count: u32) {
        self.pages_fetched += count as usize;
    }

    /// Count an exported user
    pub fn add_exported(&mut self) {
        self.users_exported += 1;
    }

    /// Count a failed user
    pub fn add_failed(&mut self) {
        self.users_failed += 1;
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}

/// Everything a run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Snapshot time used by every request of the run
    pub as_of: AsOf,
    /// One outcome per requested user, in input order
    pub outcomes: Vec<UserOutcome>,
    /// Run statistics
    pub stats: ExportStats,
}

impl ExportReport {
    /// Check if every user was exported
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(UserOutcome::is_success)
    }
}
