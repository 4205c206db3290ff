//! splunk-ds - Command-line automation for a Splunk deployment server.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute deployment server commands via the shared client library.
//! - Format and display results in various output formats (table, JSON, etc.).
//!
//! Does NOT handle:
//! - REST API implementation or batch workflows (see `crates/client`).
//! - Inventory parsing (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr; stdout carries command output only.

mod args;
mod cancellation;
mod commands;
mod config_context;
mod dispatch;
mod error;
mod formatters;
mod interactive;
mod progress;

use args::Cli;
use cancellation::{CancellationToken, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use config_context::ConfigCommandContext;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use splunk_ds_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    // RUST_LOG wins; --debug only changes the default level.
    let default_level = if cli.debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_context = match ConfigCommandContext::load(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    // Create cancellation token and set up signal handling
    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let exit_code = match run_command(cli, config_context, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
