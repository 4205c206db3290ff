//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Support loading from environment variables and direct builder methods.
//! - Resolve the password from an explicit value or the system keyring.
//! - Build the final `Config` from loaded values.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Interactive password prompting (the CLI asks when `needs_password()`).
//!
//! Invariants / Assumptions:
//! - Precedence is builder methods (flags) > environment variables > defaults,
//!   provided `from_env()` is called before the `with_*` overrides.
//! - An explicit base URL wins over host/port.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_HOST, DEFAULT_INVENTORY_PATH, DEFAULT_TIMEOUT_SECS, DEFAULT_USERNAME, MAX_TIMEOUT_SECS,
};
use crate::types::{AuthConfig, Config, ConnectionConfig, SecureValue};

/// Configuration loader that builds config from environment variables and flags.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    username: Option<String>,
    password: Option<SecretString>,
    keyring_account: Option<String>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
    inventory_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// Missing `.env` files are silently ignored.
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the full base URL (overrides host and port).
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the deployment server host name or IP.
    pub fn with_host(mut self, host: String) -> Self {
        self.host = Some(host);
        self
    }

    /// Set the management port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the username.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Set the password.
    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Read the password from this system keyring account.
    pub fn with_keyring_account(mut self, account: String) -> Self {
        self.keyring_account = Some(account);
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the inventory file path.
    pub fn with_inventory_path(mut self, path: PathBuf) -> Self {
        self.inventory_path = Some(path);
        self
    }

    /// True when no password source is configured and the caller must ask for one.
    pub fn needs_password(&self) -> bool {
        self.password.is_none() && self.keyring_account.is_none()
    }

    /// The inventory path, falling back to the default location.
    pub fn inventory_path(&self) -> PathBuf {
        self.inventory_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INVENTORY_PATH))
    }

    /// The username that will be used, falling back to the default.
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or(DEFAULT_USERNAME)
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let raw_url = match self.base_url {
            Some(url) => url,
            None => {
                let host = self.host.as_deref().unwrap_or(DEFAULT_HOST).trim();
                if host.is_empty() {
                    return Err(ConfigError::MissingBaseUrl);
                }
                ConnectionConfig::management_url(host, self.port)
            }
        };
        let base_url = validate_and_normalize_base_url(&raw_url)?;

        let username = self
            .username
            .unwrap_or_else(|| DEFAULT_USERNAME.to_string());
        if username.trim().is_empty() {
            return Err(ConfigError::MissingUsername);
        }

        let password = match (self.password, self.keyring_account) {
            (Some(password), _) => password,
            (None, Some(keyring_account)) => SecureValue::Keyring { keyring_account }.resolve()?,
            (None, None) => return Err(ConfigError::MissingPassword),
        };

        let connection = ConnectionConfig {
            base_url,
            skip_verify: self.skip_verify.unwrap_or(false),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        };

        Self::validate_timeout_config(&connection)?;

        Ok(Config {
            connection,
            auth: AuthConfig { username, password },
        })
    }

    /// Validates the request timeout is greater than 0 and not above MAX_TIMEOUT_SECS.
    fn validate_timeout_config(connection: &ConnectionConfig) -> Result<(), ConfigError> {
        let timeout_secs = connection.timeout.as_secs();

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }

        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        Ok(())
    }

    // Internal setters for use by env.rs

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_host(&mut self, host: Option<String>) {
        self.host = host;
    }

    pub(crate) fn set_port(&mut self, port: Option<u16>) {
        self.port = port;
    }

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub(crate) fn set_password(&mut self, password: Option<SecretString>) {
        self.password = password;
    }

    pub(crate) fn set_keyring_account(&mut self, account: Option<String>) {
        self.keyring_account = account;
    }

    pub(crate) fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_inventory_path(&mut self, path: Option<PathBuf>) {
        self.inventory_path = path;
    }
}

/// Validates and normalizes a base URL string.
///
/// Validation rules:
/// - Trim surrounding whitespace
/// - Treat blank/whitespace-only as missing
/// - Parse as an absolute URL with an http or https scheme and a host
/// - Normalize by stripping trailing slash
fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingBaseUrl);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "base_url".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://splunk:8089): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: format!(
                "scheme must be http or https (e.g. https://splunk:8089), got: {scheme}"
            ),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: "host is required (e.g. https://splunk:8089)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
