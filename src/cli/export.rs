//! The `export` command

use super::commands::ExportArgs;
use super::runner::CliCommand;
use crate::config::ExportConfig;
use crate::engine::{ExportEngine, ExportReport};
use crate::error::Result;
use crate::types::AsOf;
use async_trait::async_trait;
use tracing::debug;

/// Exports the history of every requested user
#[derive(Debug, Clone)]
pub struct ExportCommand {
    args: ExportArgs,
    config: ExportConfig,
    as_of: Option<AsOf>,
}

impl ExportCommand {
    /// Create the command from parsed arguments and configuration
    pub fn new(args: ExportArgs, config: ExportConfig) -> Self {
        Self {
            args,
            config,
            as_of: None,
        }
    }

    /// Pin the as-of timestamp instead of capturing it at run start
    #[must_use]
    pub fn with_as_of(mut self, as_of: AsOf) -> Self {
        self.as_of = Some(as_of);
        self
    }
}

#[async_trait]
impl CliCommand for ExportCommand {
    type Output = ExportReport;

    fn name(&self) -> &'static str {
        "export"
    }

    async fn execute(&self) -> Result<ExportReport> {
        // Fails on a bad config or output directory before any request
        let engine = ExportEngine::from_config(self.config.clone(), self.args.token.as_str())?;
        debug!("Exporting into {}", engine.writer().output_dir().display());

        let as_of = self.as_of.unwrap_or_else(AsOf::now);
        Ok(engine.run(&self.args.users, as_of).await)
    }
}
