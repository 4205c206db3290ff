//! Connection configuration types for the deployment server.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeout).
//! - Define the main `Config` structure combining connection and auth.
//! - Provide a convenience constructor for tests and embedding callers.
//!
//! Does NOT handle:
//! - Configuration loading from env/flags (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - `skip_verify` is off unless the caller opts out explicitly.
//! - Default values come from `constants`, not magic numbers.

use crate::constants::{DEFAULT_SPLUNK_PORT, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::AuthConfig;
use secrecy::SecretString;
use std::time::Duration;

/// Connection configuration for the deployment server.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the deployment server (e.g., https://splunk:8089)
    pub base_url: String,
    /// Accept self-signed certificates. Explicit opt-out only.
    pub skip_verify: bool,
    /// Request timeout
    pub timeout: Duration,
}

impl ConnectionConfig {
    /// Build the management URL for a host on the default port.
    pub fn management_url(host: &str, port: Option<u16>) -> String {
        format!("https://{}:{}", host, port.unwrap_or(DEFAULT_SPLUNK_PORT))
    }
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl Config {
    /// Create a config with default connection settings.
    pub fn new(base_url: String, username: String, password: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                skip_verify: false,
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            },
            auth: AuthConfig { username, password },
        }
    }
}
