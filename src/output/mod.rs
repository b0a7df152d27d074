//! Output module
//!
//! Handles persisting export batches to disk.
//!
//! # Overview
//!
//! This module provides utilities for:
//! - Validating the output directory before a run
//! - Naming export files from the as-of timestamp and user
//! - Writing pretty-printed JSON files atomically

mod dir;
mod writer;

pub use dir::validate_output_dir;
pub use writer::{export_file_name, HistoryWriter};
