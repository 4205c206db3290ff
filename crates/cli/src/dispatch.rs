//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Build the shared command context (config, output format, quiet flag).
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `config_context`).
//!
//! Invariants:
//! - All network commands receive a valid cancellation token.

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::cancellation::CancellationToken;
use crate::commands::{self, CommandContext};
use crate::config_context::ConfigCommandContext;
use crate::formatters::OutputFormat;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(
    cli: Cli,
    config: ConfigCommandContext,
    cancel_token: &CancellationToken,
) -> Result<()> {
    let format: OutputFormat = cli.output.parse()?;
    let ctx = CommandContext::new(config, format, cli.output_file, cli.quiet);

    match cli.command {
        Commands::Session => commands::session::run(ctx, cancel_token).await?,
        Commands::Serverclass { command } => {
            commands::serverclass::run(ctx, command, cancel_token).await?
        }
        Commands::Apps { command } => commands::apps::run(ctx, command, cancel_token).await?,
        Commands::Reload => commands::reload::run(ctx, cancel_token).await?,
        Commands::Sync => commands::sync::run(ctx, cancel_token).await?,
        Commands::Inventory => commands::inventory::run(ctx)?,
        Commands::Completions { shell } => commands::completions::run(shell)?,
    }

    Ok(())
}
