//! Reload command implementation.

use anyhow::{Context, Result};
use tracing::info;

use crate::cancellation::{CancellationToken, cancellable};
use crate::commands::{CommandContext, connect};

pub async fn run(ctx: CommandContext, cancel: &CancellationToken) -> Result<()> {
    info!("Reloading deployment server");

    let client = connect(&ctx, cancel).await?;
    let status = cancellable(client.reload(), cancel)
        .await?
        .context("Failed to reload deployment server")?;

    let output = ctx.formatter().format_reload(&status)?;
    ctx.emit(&output)
}
