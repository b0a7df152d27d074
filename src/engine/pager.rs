//! History pager
//!
//! Fetches the complete history of one user by walking the paginated
//! history endpoint until an empty page comes back.

use super::types::FetchedHistory;
use crate::decode::{JsonDecoder, RecordDecoder};
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::{NextPage, OffsetPaginator, PaginationState, Paginator};
use crate::types::{ExportRequest, DEFAULT_PAGE_SIZE};
use serde_json::Value;
use tracing::{debug, info};

/// Walks a user's history page by page
pub struct HistoryPager {
    paginator: Box<dyn Paginator>,
    decoder: Box<dyn RecordDecoder>,
}

impl HistoryPager {
    /// Pager for the history endpoint with the given page size
    pub fn new(page_size: u32) -> Self {
        Self::with_strategies(
            Box::new(OffsetPaginator::history(page_size)),
            Box::new(JsonDecoder::history()),
        )
    }

    /// Pager with custom pagination and decoding
    pub fn with_strategies(
        paginator: Box<dyn Paginator>,
        decoder: Box<dyn RecordDecoder>,
    ) -> Self {
        Self { paginator, decoder }
    }

    /// Records requested per page
    pub fn page_size(&self) -> u32 {
        self.paginator.page_size()
    }

    /// Fetch every page of a user's history.
    ///
    /// Records are kept in memory until the last page arrives. Any failed
    /// request or undecodable page aborts the whole fetch.
    pub async fn fetch(
        &self,
        client: &HttpClient,
        request: &ExportRequest,
    ) -> Result<FetchedHistory> {
        let path = request.history_path();
        let date = request.as_of.query_value();
        let page_size = u64::from(self.paginator.page_size());

        let mut state = PaginationState::new();
        let mut page_params = self.paginator.params(&state);
        let mut records = Vec::new();

        loop {
            info!(
                "Fetching {} to {} records...",
                state.offset,
                state.offset + page_size
            );

            let req_config = RequestConfig::new()
                .query("include_deleted", "true")
                .query("reverse", "true")
                .query("date", &date)
                .queries(page_params);

            let body: Value = client.get_json_with_config(&path, req_config).await?;
            let page = self.decoder.decode(&body)?;
            let record_count = page.len();

            debug!(
                "Page {}: fetched {record_count} records for user {}",
                state.pages + 1,
                request.user
            );

            records.extend(page);

            match self.paginator.process_page(record_count, &mut state) {
                NextPage::Continue { query_params } => page_params = query_params,
                NextPage::Done => break,
            }
        }

        Ok(FetchedHistory {
            records,
            pages: state.pages,
        })
    }
}

impl Default for HistoryPager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl std::fmt::Debug for HistoryPager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryPager")
            .field("page_size", &self.page_size())
            .finish_non_exhaustive()
    }
}
