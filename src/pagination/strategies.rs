//! Pagination strategy implementations

use super::types::{NextPage, PaginationState, Paginator};
use crate::types::DEFAULT_PAGE_SIZE;
use std::collections::HashMap;

// ============================================================================
// Offset Pagination
// ============================================================================

/// Offset-based pagination
///
/// Uses offset and limit parameters to paginate, e.g.
/// `?start-index=2000&max-results=1000`.
///
/// Only an empty page ends pagination. The offset advances by the page
/// size after every non-empty page, whatever its length.
#[derive(Debug, Clone)]
pub struct OffsetPaginator {
    /// Query parameter name for offset
    pub offset_param: String,
    /// Query parameter name for limit
    pub limit_param: String,
    /// Number of records per page
    pub limit_value: u32,
}

impl OffsetPaginator {
    /// Create a new offset paginator
    pub fn new(
        offset_param: impl Into<String>,
        limit_param: impl Into<String>,
        limit_value: u32,
    ) -> Self {
        Self {
            offset_param: offset_param.into(),
            limit_param: limit_param.into(),
            limit_value,
        }
    }

    /// Paginator for the history endpoint (`start-index` / `max-results`)
    pub fn history(page_size: u32) -> Self {
        Self::new("start-index", "max-results", page_size)
    }
}

impl Default for OffsetPaginator {
    fn default() -> Self {
        Self::history(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator for OffsetPaginator {
    fn params(&self, state: &PaginationState) -> HashMap<String, String> {
        let mut params = HashMap::new();
        params.insert(self.offset_param.clone(), state.offset.to_string());
        params.insert(self.limit_param.clone(), self.limit_value.to_string());
        params
    }

    fn page_size(&self) -> u32 {
        self.limit_value
    }

    fn process_page(&self, records_count: usize, state: &mut PaginationState) -> NextPage {
        state.add_page(records_count);

        if records_count == 0 {
            state.mark_done();
            return NextPage::Done;
        }

        state.add_offset(self.limit_value);
        NextPage::with_params(self.params(state))
    }
}
