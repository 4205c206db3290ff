//! Configuration context for command execution.
//!
//! Responsibilities:
//! - Layer configuration: defaults < environment < CLI flags.
//! - Prompt for a missing password before validation, when a terminal is attached.
//! - Distinguish commands that need a validated connection config from offline ones.
//!
//! Does NOT handle:
//! - `.env` loading (done in `main()` before argument parsing).
//! - CLI argument definitions (see `args` module).
//!
//! Invariants:
//! - Offline commands never require credentials.
//! - Placeholder contexts cannot be used for server connections.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use splunk_ds_config::{Config, ConfigLoader};

use crate::args::Cli;
use crate::interactive::prompt_password;

/// Context for command execution, distinguishing between real and placeholder configs.
pub(crate) enum ConfigCommandContext {
    /// A validated config for commands that talk to the deployment server.
    Real {
        config: Box<Config>,
        inventory_path: PathBuf,
    },
    /// Offline commands only need to know where the inventory lives.
    Placeholder { inventory_path: PathBuf },
}

impl ConfigCommandContext {
    /// Resolve configuration for `cli`.
    pub(crate) fn load(cli: &Cli) -> Result<Self> {
        let loader = ConfigLoader::new()
            .from_env()
            .context("Failed to load configuration from environment")?;
        let mut loader = apply_cli_overrides(loader, cli);

        let inventory_path = loader.inventory_path();

        if !cli.command.needs_connection() {
            return Ok(Self::Placeholder { inventory_path });
        }

        if loader.needs_password()
            && let Some(password) = prompt_password(loader.username())?
        {
            loader = loader.with_password(password);
        }

        let config = loader.build().context("Failed to build configuration")?;

        Ok(Self::Real {
            config: Box::new(config),
            inventory_path,
        })
    }

    /// The validated config, failing for placeholder contexts.
    pub(crate) fn real_config(&self) -> Result<&Config> {
        match self {
            Self::Real { config, .. } => Ok(&**config),
            Self::Placeholder { .. } => anyhow::bail!(
                "Internal error: attempted to use placeholder config for an operation requiring real connection details"
            ),
        }
    }

    pub(crate) fn inventory_path(&self) -> &Path {
        match self {
            Self::Real { inventory_path, .. } | Self::Placeholder { inventory_path } => {
                inventory_path
            }
        }
    }
}

/// Apply CLI flags on top of the loader (highest priority).
///
/// Blank string flags are ignored so an empty env var does not mask the default.
fn apply_cli_overrides(mut loader: ConfigLoader, cli: &Cli) -> ConfigLoader {
    let non_blank = |v: &Option<String>| v.as_ref().filter(|s| !s.trim().is_empty()).cloned();

    if let Some(url) = non_blank(&cli.base_url) {
        loader = loader.with_base_url(url);
    }
    if let Some(host) = non_blank(&cli.host) {
        loader = loader.with_host(host);
    }
    if let Some(port) = cli.port {
        loader = loader.with_port(port);
    }
    if let Some(user) = non_blank(&cli.user) {
        loader = loader.with_username(user);
    }
    if let Some(password) = non_blank(&cli.password) {
        loader = loader.with_password(password);
    }
    if let Some(account) = non_blank(&cli.keyring_account) {
        loader = loader.with_keyring_account(account);
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(timeout_secs));
    }
    if let Some(path) = &cli.inventory
        && !path.as_os_str().is_empty()
    {
        loader = loader.with_inventory_path(path.clone());
    }
    loader
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use secrecy::ExposeSecret;

    fn overrides(args: &[&str]) -> ConfigLoader {
        let cli = Cli::try_parse_from(args).unwrap();
        apply_cli_overrides(ConfigLoader::new(), &cli)
    }

    #[test]
    fn test_flags_build_a_config() {
        let config = overrides(&[
            "splunk-ds",
            "--host",
            "ds01",
            "--port",
            "9089",
            "--user",
            "deployer",
            "--password",
            "pw",
            "--timeout",
            "12",
            "session",
        ])
        .build()
        .unwrap();

        assert_eq!(config.connection.base_url, "https://ds01:9089");
        assert_eq!(config.auth.username, "deployer");
        assert_eq!(config.auth.password.expose_secret(), "pw");
        assert_eq!(config.connection.timeout, Duration::from_secs(12));
    }

    #[test]
    fn test_inventory_flag_sets_path() {
        let loader = overrides(&["splunk-ds", "--inventory", "apps.toml", "inventory"]);
        assert_eq!(loader.inventory_path(), PathBuf::from("apps.toml"));
    }

    #[test]
    fn test_blank_password_flag_is_ignored() {
        let loader = overrides(&["splunk-ds", "--password", "  ", "session"]);
        assert!(loader.needs_password());
    }

    #[test]
    fn test_placeholder_has_no_config() {
        let ctx = ConfigCommandContext::Placeholder {
            inventory_path: PathBuf::from("config/splunkapps.toml"),
        };
        assert!(ctx.real_config().is_err());
        assert_eq!(ctx.inventory_path(), Path::new("config/splunkapps.toml"));
    }
}
