//! CLI commands and argument parsing

use crate::config::ConfigOverrides;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Chat history exporter
#[derive(Parser, Debug)]
#[command(name = "history-export")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true, env = "HISTORY_EXPORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// API base URL
    #[arg(long, global = true, env = "HISTORY_EXPORT_BASE_URL")]
    pub base_url: Option<String>,

    /// Directory receiving the exported files
    #[arg(short, long, global = true, env = "HISTORY_EXPORT_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Records requested per page
    #[arg(long, global = true, env = "HISTORY_EXPORT_PAGE_SIZE")]
    pub page_size: Option<u32>,

    /// Request timeout in seconds (0 = no timeout)
    #[arg(long, global = true, env = "HISTORY_EXPORT_TIMEOUT_SECS")]
    pub timeout: Option<u64>,

    /// Summary output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Configuration values given on the command line or environment
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_url: self.base_url.clone(),
            output_dir: self.output_dir.clone(),
            page_size: self.page_size,
            timeout_secs: self.timeout,
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export one-to-one chat history of one or more users
    Export(ExportArgs),
}

/// Arguments of the `export` command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ExportArgs {
    /// Auth token
    #[arg(required = true)]
    pub token: String,

    /// IDs or emails of one or more users
    #[arg(required = true, num_args = 1..)]
    pub users: Vec<String>,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}
