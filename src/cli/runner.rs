//! CLI runner - executes commands

use super::commands::{Cli, Commands, OutputFormat};
use super::export::ExportCommand;
use crate::config::ExportConfig;
use crate::engine::ExportReport;
use crate::error::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::info;

/// A command the CLI can run.
///
/// Arguments are declared with clap; the command only has to name itself
/// and carry out its work.
#[async_trait]
pub trait CliCommand: Send + Sync {
    /// What a successful execution produces
    type Output: Send;

    /// Command name as typed on the command line
    fn name(&self) -> &'static str;

    /// Run the command
    async fn execute(&self) -> Result<Self::Output>;
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    ///
    /// Only startup failures are returned as errors. Per-user failures are
    /// part of the printed summary.
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;

        match &self.cli.command {
            Commands::Export(args) => {
                let command = ExportCommand::new(args.clone(), config);
                info!("Running {}", command.name());
                let report = command.execute().await?;
                self.output_report(&report);
            }
        }

        Ok(())
    }

    /// Load configuration: file, then environment and flags
    fn load_config(&self) -> Result<ExportConfig> {
        ExportConfig::load(self.cli.config.as_deref(), self.cli.overrides())
    }

    /// Print the outcome of every user and the run summary
    fn output_report(&self, report: &ExportReport) {
        for message in report_messages(report) {
            self.output_message(&message);
        }
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => println!("{}", render_pretty(msg)),
        }
    }
}

/// Messages describing a finished run, one per user plus a summary
pub fn report_messages(report: &ExportReport) -> Vec<Value> {
    let mut messages: Vec<Value> = report
        .outcomes
        .iter()
        .map(|outcome| serde_json::to_value(outcome).unwrap_or(Value::Null))
        .collect();

    messages.push(json!({
        "type": "SUMMARY",
        "as_of": report.as_of.query_value(),
        "stats": report.stats,
    }));

    messages
}

fn render_pretty(msg: &Value) -> String {
    let field = |name: &str| msg.get(name).and_then(Value::as_str).unwrap_or_default();

    match field("type") {
        "FILE_CREATED" => format!("File [{}] created", field("path")),
        "EXPORT_FAILED" => format!(
            "User {}: {} failed: {}",
            field("user"),
            field("stage"),
            field("error")
        ),
        "SUMMARY" => {
            let stats = &msg["stats"];
            format!(
                "Exported {} user(s), {} failed, {} records as of {}",
                stats["users_exported"],
                stats["users_failed"],
                stats["records_fetched"],
                field("as_of")
            )
        }
        _ => serde_json::to_string_pretty(msg).unwrap_or_default(),
    }
}
