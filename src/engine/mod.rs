//! Execution engine module
//!
//! Per-user export loop.
//!
//! # Overview
//!
//! The engine module provides:
//! - `HistoryPager` - Fetches every page of one user's history
//! - `ExportEngine` - Runs pager and writer for each user in turn
//! - `UserOutcome` / `ExportReport` - What a run produced
//!
//! Users are processed strictly one after another. A failure only ends the
//! current user's export; the run moves on to the next user.

mod pager;
mod types;

pub use pager::HistoryPager;
pub use types::{ExportReport, ExportStats, FailureStage, FetchedHistory, UserOutcome};

use crate::auth::AuthConfig;
use crate::config::ExportConfig;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::output::HistoryWriter;
use crate::types::{AsOf, ExportRequest};
use std::time::Instant;
use tracing::{error, info, warn};

/// Export engine driving the per-user loop
#[derive(Debug)]
pub struct ExportEngine {
    /// HTTP client, authenticated for the whole run
    client: HttpClient,
    /// History pager
    pager: HistoryPager,
    /// Output writer
    writer: HistoryWriter,
}

impl ExportEngine {
    /// Create a new export engine
    pub fn new(client: HttpClient, pager: HistoryPager, writer: HistoryWriter) -> Self {
        Self {
            client,
            pager,
            writer,
        }
    }

    /// Build an engine from configuration and a bearer token.
    ///
    /// The configuration is validated first, so an unusable output
    /// directory fails here before any request is made.
    pub fn from_config(config: ExportConfig, token: impl Into<String>) -> Result<Self> {
        let config = config.validate()?;
        let client = HttpClient::with_auth(config.http_config(), AuthConfig::bearer(token))?;

        Ok(Self::new(
            client,
            HistoryPager::new(config.page_size),
            HistoryWriter::new(config.output_dir),
        ))
    }

    /// Get the writer
    pub fn writer(&self) -> &HistoryWriter {
        &self.writer
    }

    /// Fetch one user's history
    pub async fn fetch_user(&self, request: &ExportRequest) -> Result<FetchedHistory> {
        self.pager.fetch(&self.client, request).await
    }

    /// Export every user in order, anchored to a single as-of timestamp.
    ///
    /// Duplicated users are exported again. Never fails as a whole: each
    /// user's result is reported in the returned outcomes.
    pub async fn run(&self, users: &[String], as_of: AsOf) -> ExportReport {
        let start = Instant::now();
        let mut stats = ExportStats::new();
        let mut outcomes = Vec::with_capacity(users.len());

        for user in users {
            info!("Working on user {user}...");
            let request = ExportRequest::new(user.clone(), as_of);
            let outcome = self.export_one(&request, &mut stats).await;

            if outcome.is_success() {
                stats.add_exported();
            } else {
                stats.add_failed();
            }
            outcomes.push(outcome);
        }

        stats.set_duration(start.elapsed().as_millis() as u64);

        info!(
            "Export finished: {} exported, {} failed, {} records",
            stats.users_exported, stats.users_failed, stats.records_fetched
        );

        ExportReport {
            as_of,
            outcomes,
            stats,
        }
    }

    async fn export_one(&self, request: &ExportRequest, stats: &mut ExportStats) -> UserOutcome {
        let user = request.user.clone();

        let history = match self.fetch_user(request).await {
            Ok(history) => history,
            Err(e) => {
                log_fetch_failure(&user, &e);
                return UserOutcome::ExportFailed {
                    user,
                    stage: FailureStage::Fetch,
                    error: e.to_string(),
                };
            }
        };

        stats.add_pages(history.pages);
        stats.add_records(history.records.len());

        match self
            .writer
            .write(&request.as_of, &request.user, &history.records)
        {
            Ok(path) => {
                info!("File [{}] created", path.display());
                UserOutcome::FileCreated {
                    user,
                    path,
                    records: history.records.len(),
                    pages: history.pages,
                }
            }
            Err(e) => {
                error!("User {user}: {e}");
                UserOutcome::ExportFailed {
                    user,
                    stage: FailureStage::Write,
                    error: e.to_string(),
                }
            }
        }
    }
}

fn log_fetch_failure(user: &str, err: &Error) {
    if err.is_client_error() {
        warn!("User {user}: request rejected: {err}");
    } else if err.is_malformed_response() {
        error!("User {user}: malformed response: {err}");
    } else {
        error!("User {user}: {err}");
    }
}
