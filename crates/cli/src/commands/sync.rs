//! Sync command implementation.
//!
//! Responsibilities:
//! - Run the per-application workflow over the whole inventory:
//!   check or create the serverclass, then set its allow list.
//!
//! Does NOT handle:
//! - Binding applications (see `apps bind-all`).
//! - Reloading the server afterwards (see `reload`).

use anyhow::Result;
use tracing::info;

use crate::cancellation::{CancellationToken, cancellable};
use crate::commands::{CommandContext, connect, finish_batch, load_inventory};
use crate::progress::Spinner;

pub async fn run(ctx: CommandContext, cancel: &CancellationToken) -> Result<()> {
    let inventory = load_inventory(&ctx)?;
    info!("Syncing {} applications", inventory.len());

    let client = connect(&ctx, cancel).await?;
    let spinner = Spinner::new(!ctx.quiet, "Syncing serverclasses");
    let report = cancellable(client.sync(&inventory), cancel).await?;
    spinner.finish();

    finish_batch(&ctx, report)
}
