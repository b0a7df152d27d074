//! Response decoder module
//!
//! Supports: JSON
//!
//! # Overview
//!
//! A decoder turns a response body into the list of records it carries,
//! using a configured path to the records field.

mod decoders;
mod types;

pub use decoders::JsonDecoder;
pub use types::RecordDecoder;
