//! User interaction utilities for the CLI.
//!
//! Responsibilities:
//! - Prompt for the password when no other source provides one.
//! - Never prompt when stdin is not a terminal, so scripts fail fast instead of hanging.

use anyhow::{Context, Result};
use std::io::IsTerminal;

/// Prompt for a password without echo.
///
/// Returns `Ok(None)` when stdin is not a terminal; the caller then reports
/// the missing password as a configuration error.
pub fn prompt_password(username: &str) -> Result<Option<String>> {
    if !std::io::stdin().is_terminal() {
        return Ok(None);
    }

    let password = dialoguer::Password::new()
        .with_prompt(format!("Password for {}", username))
        .allow_empty_password(false)
        .interact()
        .context("Failed to read password from terminal")?;

    Ok(Some(password))
}
