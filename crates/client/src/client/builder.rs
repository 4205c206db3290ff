//! Builder for constructing [`Connection`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for connection configuration
//! - Validating and normalizing the base URL
//! - Configuring the underlying HTTP client (timeouts, redirects, TLS verification)
//!
//! # What this module does NOT handle:
//! - Authentication (see `client/auth.rs`)
//! - Actual API calls (handled by [`crate::DeploymentClient`] methods)
//!
//! # Invariants
//! - `base_url` is required and must be an absolute http(s) URL
//! - The base URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use crate::client::Connection;
use crate::error::{ClientError, Result};
use splunk_ds_config::{
    Config,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`Connection`].
///
/// # Example
///
/// ```rust,ignore
/// use splunk_ds_client::Connection;
///
/// let conn = Connection::builder()
///     .base_url("https://splunk:8089".to_string())
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// ```
pub struct ConnectionBuilder {
    base_url: Option<String>,
    skip_verify: bool,
    timeout: Duration,
}

impl Default for ConnectionBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ConnectionBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the deployment server, e.g. `https://splunk:8089`.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Disabling TLS verification makes the connection vulnerable to
    /// man-in-the-middle attacks. Use it only for self-signed lab servers.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Copy connection settings from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    fn normalize_base_url(url: &str) -> String {
        url.trim().trim_end_matches('/').to_string()
    }

    /// Build the [`Connection`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` is missing or not an absolute http(s) URL.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<Connection> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(&base_url);

        let parsed = reqwest::Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(ClientError::InvalidUrl(format!(
                "{base_url}: expected an http(s) URL with a host"
            )));
        }

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if parsed.scheme() == "https" {
                tracing::warn!(
                    "TLS certificate verification is disabled; the server identity is not checked"
                );
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(Connection { http, base_url })
    }
}
