//! Deployment application command implementation.
//!
//! Responsibilities:
//! - List deployment applications with their serverclasses
//! - Bind one application to a serverclass
//! - Bind every inventory application to its serverclass
//!
//! Does NOT handle:
//! - Copying packages into the deployment apps directory
//! - Output formatting details (see formatters module)

use anyhow::{Context, Result};
use clap::Subcommand;
use tracing::info;

use crate::cancellation::{CancellationToken, cancellable};
use crate::commands::{CommandContext, connect, finish_batch, load_inventory};
use crate::progress::Spinner;

#[derive(Subcommand)]
pub enum AppsCommand {
    /// List deployment applications
    List,
    /// Bind an application to a serverclass
    Bind {
        /// Application name as known to the deployment server
        #[arg(long, value_name = "APP_NAME")]
        application: String,

        /// Serverclass to bind to
        #[arg(long, value_name = "NAME")]
        serverclass: String,
    },
    /// Bind every inventory application to the serverclass of the same name
    BindAll,
}

pub async fn run(ctx: CommandContext, command: AppsCommand, cancel: &CancellationToken) -> Result<()> {
    match command {
        AppsCommand::List => run_list(ctx, cancel).await,
        AppsCommand::Bind {
            application,
            serverclass,
        } => run_bind(ctx, &application, &serverclass, cancel).await,
        AppsCommand::BindAll => run_bind_all(ctx, cancel).await,
    }
}

async fn run_list(ctx: CommandContext, cancel: &CancellationToken) -> Result<()> {
    info!("Listing deployment applications");

    let client = connect(&ctx, cancel).await?;
    let apps = cancellable(client.list_deployment_apps(), cancel)
        .await?
        .context("Failed to list deployment applications")?;

    let output = ctx.formatter().format_apps(&apps)?;
    ctx.emit(&output)
}

async fn run_bind(
    ctx: CommandContext,
    application: &str,
    serverclass: &str,
    cancel: &CancellationToken,
) -> Result<()> {
    info!("Binding {} to serverclass {}", application, serverclass);

    let client = connect(&ctx, cancel).await?;
    let bound = cancellable(client.bind_serverclass_to_app(application, serverclass), cancel)
        .await?
        .with_context(|| {
            format!(
                "Failed to bind application '{}' to serverclass '{}'",
                application, serverclass
            )
        })?;

    let output = ctx.formatter().format_bind(&bound)?;
    ctx.emit(&output)
}

async fn run_bind_all(ctx: CommandContext, cancel: &CancellationToken) -> Result<()> {
    let inventory = load_inventory(&ctx)?;
    info!("Binding {} applications", inventory.len());

    let client = connect(&ctx, cancel).await?;
    let spinner = Spinner::new(!ctx.quiet, "Binding applications");
    let report = cancellable(client.bind_all(&inventory), cancel).await?;
    spinner.finish();

    finish_batch(&ctx, report)
}
