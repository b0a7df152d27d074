//! Pagination module
//!
//! Supports: Offset
//!
//! # Overview
//!
//! A paginator produces the query parameters of each page request and
//! decides from each response whether another page must be fetched.
//! Pagination ends on the first empty page; a short page is not treated
//! as the last one.

mod strategies;
mod types;

pub use strategies::OffsetPaginator;
pub use types::{NextPage, PaginationState, Paginator};
