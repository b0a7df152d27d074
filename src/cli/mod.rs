//! CLI module
//!
//! Command-line interface for running exports.
//!
//! # Commands
//!
//! - `export <token> <user>...` - Export one-to-one chat history per user

mod commands;
mod export;
mod runner;

pub use commands::{Cli, Commands, ExportArgs, OutputFormat};
pub use export::ExportCommand;
pub use runner::{CliCommand, Runner};
