//! CLI command implementations.

pub mod apps;
pub mod completions;
pub mod inventory;
pub mod reload;
pub mod serverclass;
pub mod session;
pub mod sync;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use splunk_ds_client::{BatchReport, Connection, Credentials, DeploymentClient};
use splunk_ds_config::{Config, Inventory};
use tracing::debug;

use crate::cancellation::{CancellationToken, cancellable};
use crate::config_context::ConfigCommandContext;
use crate::formatters::{Formatter, OutputFormat, get_formatter, output_result};
use crate::progress::Spinner;

/// Everything a command needs besides its own arguments.
pub struct CommandContext {
    config: ConfigCommandContext,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
    pub quiet: bool,
}

impl CommandContext {
    pub fn new(
        config: ConfigCommandContext,
        format: OutputFormat,
        output_file: Option<PathBuf>,
        quiet: bool,
    ) -> Self {
        Self {
            config,
            format,
            output_file,
            quiet,
        }
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.real_config()
    }

    pub fn inventory_path(&self) -> &Path {
        self.config.inventory_path()
    }

    pub fn formatter(&self) -> Box<dyn Formatter> {
        get_formatter(self.format)
    }

    /// Write formatted output to the output file or stdout.
    pub fn emit(&self, output: &str) -> Result<()> {
        output_result(output, self.format, self.output_file.as_ref())
    }
}

/// Log in and return an authenticated client.
///
/// Nothing else is sent to the server unless this succeeds.
pub async fn connect(ctx: &CommandContext, cancel: &CancellationToken) -> Result<DeploymentClient> {
    let config = ctx.config()?;
    let conn = Connection::builder()
        .from_config(config)
        .build()
        .context("Failed to build HTTP client")?;
    let credentials = Credentials::from(&config.auth);

    let spinner = Spinner::new(!ctx.quiet, "Authenticating");
    let client = cancellable(DeploymentClient::login(conn, &credentials), cancel)
        .await?
        .with_context(|| format!("Failed to log in to {}", config.connection.base_url))?;
    spinner.finish();

    debug!(base_url = %client.base_url(), "Session established");
    Ok(client)
}

/// Read and validate the inventory file.
pub fn load_inventory(ctx: &CommandContext) -> Result<Inventory> {
    let path = ctx.inventory_path();
    Inventory::load(path).with_context(|| format!("Failed to load inventory {}", path.display()))
}

/// Print a batch report, then fail with `PartialBatchFailure` if any application failed.
pub fn finish_batch(ctx: &CommandContext, report: BatchReport) -> Result<()> {
    let output = ctx.formatter().format_batch_report(&report)?;
    ctx.emit(&output)?;
    report.into_result()?;
    Ok(())
}
