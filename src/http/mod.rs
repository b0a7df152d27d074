//! HTTP client module
//!
//! Provides a thin HTTP client around reqwest.
//!
//! # Features
//!
//! - **Base URL**: Relative request paths are joined onto a configured base
//! - **Authentication**: Integration with auth module
//! - **Error Classification**: Non-success statuses become `Error::HttpStatus`
//! - **Request Timeout**: Optional upper bound on every request
//!
//! Requests are never retried; a failed request fails the caller.

mod client;

pub use client::{extract_error_message, HttpClient, HttpClientConfig, RequestConfig};

#[cfg(test)]
mod tests;
