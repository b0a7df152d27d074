// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # history-export
//!
//! Exports one-to-one chat history from a paginated REST API (HipChat API v2
//! shape) into one JSON file per user.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use history_export::config::ExportConfig;
//! use history_export::engine::ExportEngine;
//! use history_export::AsOf;
//!
//! #[tokio::main]
//! async fn main() -> history_export::Result<()> {
//!     let config = ExportConfig::new().with_output_dir("./exports");
//!     let engine = ExportEngine::from_config(config, "my-token")?;
//!
//!     let users = vec!["123".to_string(), "jane@example.com".to_string()];
//!     let report = engine.run(&users, AsOf::now()).await;
//!
//!     for outcome in &report.outcomes {
//!         println!("{}: {}", outcome.user(), outcome.is_success());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  cli: export <token> <user>...  →  ExportCommand         │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────────────────────────────────────────────────────┐
//! │  engine: ExportEngine (one user at a time, one as-of)    │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────┬──────────┬──────────────┬──────────┬──────────┐
//! │   Auth   │   HTTP   │  Paginate    │  Decode  │  Output  │
//! ├──────────┼──────────┼──────────────┼──────────┼──────────┤
//! │ Bearer   │ GET      │ start-index  │ items    │ temp +   │
//! │          │ Timeout  │ max-results  │          │ rename   │
//! └──────────┴──────────┴──────────────┴──────────┴──────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Bearer authentication
pub mod auth;

/// HTTP client with timeouts
pub mod http;

/// Offset pagination
pub mod pagination;

/// Response decoders
pub mod decode;

/// Export file writing
pub mod output;

/// Per-user export loop
pub mod engine;

/// Run configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use config::ExportConfig;
pub use engine::{ExportEngine, ExportReport, UserOutcome};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
