//! Session command implementation.
//!
//! Responsibilities:
//! - Authenticate and show the session key with its validity window.
//!
//! Invariants:
//! - The password is never printed; the session key is, since showing it is the point.

use anyhow::Result;
use chrono::Duration as ChronoDuration;
use secrecy::ExposeSecret;
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::commands::{CommandContext, connect};
use crate::formatters::SessionOutput;

pub async fn run(ctx: CommandContext, cancel: &CancellationToken) -> Result<()> {
    info!("Opening session");

    let client = connect(&ctx, cancel).await?;
    let session = client.session();
    let validity = session.validity();
    let issued_at = session.issued_at();

    let output = SessionOutput {
        base_url: client.base_url().to_string(),
        username: ctx.config()?.auth.username.clone(),
        session_key: session.token().expose_secret().to_string(),
        issued_at,
        expires_at: issued_at + ChronoDuration::seconds(validity.as_secs() as i64),
        validity_secs: validity.as_secs(),
    };

    let formatted = ctx.formatter().format_session(&output)?;
    ctx.emit(&formatted)
}
