//! Serverclass command implementation.
//!
//! Responsibilities:
//! - List, create and populate single serverclasses
//! - Run the inventory-wide create-all and add-hosts batches
//! - Format output via shared formatters
//!
//! Does NOT handle:
//! - Direct REST API calls (handled by client crate)
//! - Output formatting details (see formatters module)
//!
//! Invariants:
//! - Batch commands print the full report before reporting partial failure
//! - Serverclass and host names are passed through without modification

use anyhow::{Context, Result};
use clap::Subcommand;
use splunk_ds_client::FilterKey;
use splunk_ds_config::constants::DEFAULT_FILTER_KEY;
use tracing::info;

use crate::cancellation::{CancellationToken, cancellable};
use crate::commands::{CommandContext, connect, finish_batch, load_inventory};
use crate::progress::Spinner;

#[derive(Subcommand)]
pub enum ServerclassCommand {
    /// List serverclasses
    List,
    /// Create a serverclass (an existing one is reported, not an error)
    Create {
        /// Serverclass name
        #[arg(long, value_name = "NAME")]
        serverclass: String,
    },
    /// Add a single host to a serverclass filter
    AddHost {
        /// Serverclass name
        #[arg(long, value_name = "NAME")]
        serverclass: String,

        /// Host or pattern to add (e.g. 'uf-*', '10.1.2.3')
        #[arg(long, value_name = "HOST")]
        client: String,

        /// Filter key to write (whitelist.<n> or blacklist.<n>)
        #[arg(long, value_name = "KEY", default_value = DEFAULT_FILTER_KEY)]
        list: FilterKey,
    },
    /// Create a serverclass for every inventory application
    CreateAll,
    /// Set every inventory serverclass allow list from its hosts
    AddHosts,
}

pub async fn run(
    ctx: CommandContext,
    command: ServerclassCommand,
    cancel: &CancellationToken,
) -> Result<()> {
    match command {
        ServerclassCommand::List => run_list(ctx, cancel).await,
        ServerclassCommand::Create { serverclass } => run_create(ctx, &serverclass, cancel).await,
        ServerclassCommand::AddHost {
            serverclass,
            client,
            list,
        } => run_add_host(ctx, &serverclass, &client, &list, cancel).await,
        ServerclassCommand::CreateAll => run_create_all(ctx, cancel).await,
        ServerclassCommand::AddHosts => run_add_hosts(ctx, cancel).await,
    }
}

async fn run_list(ctx: CommandContext, cancel: &CancellationToken) -> Result<()> {
    info!("Listing serverclasses");

    let client = connect(&ctx, cancel).await?;
    let names = cancellable(client.list_serverclasses(), cancel)
        .await?
        .context("Failed to list serverclasses")?;

    let output = ctx.formatter().format_serverclasses(&names)?;
    ctx.emit(&output)
}

async fn run_create(ctx: CommandContext, serverclass: &str, cancel: &CancellationToken) -> Result<()> {
    info!("Creating serverclass: {}", serverclass);

    let client = connect(&ctx, cancel).await?;
    let outcome = cancellable(client.create_serverclass(serverclass), cancel)
        .await?
        .with_context(|| format!("Failed to create serverclass '{}'", serverclass))?;

    let output = ctx.formatter().format_create(&outcome)?;
    ctx.emit(&output)
}

async fn run_add_host(
    ctx: CommandContext,
    serverclass: &str,
    host: &str,
    key: &FilterKey,
    cancel: &CancellationToken,
) -> Result<()> {
    info!("Adding {} to serverclass {} as {}", host, serverclass, key);

    let client = connect(&ctx, cancel).await?;
    let result = cancellable(client.add_host_to_serverclass(serverclass, key, host), cancel)
        .await?
        .with_context(|| format!("Failed to add '{}' to serverclass '{}'", host, serverclass))?;

    let output = ctx.formatter().format_add_host(&result)?;
    ctx.emit(&output)
}

async fn run_create_all(ctx: CommandContext, cancel: &CancellationToken) -> Result<()> {
    let inventory = load_inventory(&ctx)?;
    info!("Creating serverclasses for {} applications", inventory.len());

    let client = connect(&ctx, cancel).await?;
    let spinner = Spinner::new(!ctx.quiet, "Creating serverclasses");
    let report = cancellable(client.create_all_serverclasses(&inventory), cancel).await?;
    spinner.finish();

    finish_batch(&ctx, report)
}

async fn run_add_hosts(ctx: CommandContext, cancel: &CancellationToken) -> Result<()> {
    let inventory = load_inventory(&ctx)?;
    info!("Setting allow lists for {} applications", inventory.len());

    let client = connect(&ctx, cancel).await?;
    let spinner = Spinner::new(!ctx.quiet, "Setting allow lists");
    let report = cancellable(client.add_hosts_to_serverclasses(&inventory), cancel).await?;
    spinner.finish();

    finish_batch(&ctx, report)
}
