//! Session and credential types.
//!
//! Responsibilities:
//! - Hold the username/password pair used for login.
//! - Hold the session token issued by a successful login, with its validity window.
//!
//! Does NOT handle:
//! - The login request itself (see `endpoints::login` and `Connection::authenticate`).
//! - Session renewal. A session lives for one invocation and is never refreshed.
//!
//! Invariants:
//! - Passwords and tokens are `SecretString` and never appear in `Debug` output.
//! - A `Session` is only created from a non-empty token.
//! - Expiry is informational; nothing is refused locally when it passes.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use splunk_ds_config::{AuthConfig, constants::SESSION_VALIDITY_SECS};

/// Username and password for the login endpoint.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }
}

impl From<&AuthConfig> for Credentials {
    fn from(auth: &AuthConfig) -> Self {
        Self {
            username: auth.username.clone(),
            password: auth.password.clone(),
        }
    }
}

/// An authenticated session on the deployment server.
#[derive(Debug, Clone)]
pub struct Session {
    token: SecretString,
    issued_at: Instant,
    issued_at_utc: DateTime<Utc>,
    validity: Duration,
}

impl Session {
    /// Wrap a token returned by the login endpoint.
    pub(crate) fn new(token: SecretString) -> Self {
        Self {
            token,
            issued_at: Instant::now(),
            issued_at_utc: Utc::now(),
            validity: Duration::from_secs(SESSION_VALIDITY_SECS),
        }
    }

    /// Build a session from a known token, e.g. one obtained out of band.
    pub fn from_token(token: impl Into<String>) -> Self {
        Self::new(SecretString::new(token.into().into()))
    }

    /// The session key.
    pub fn token(&self) -> &SecretString {
        &self.token
    }

    /// Value for the `Authorization` header.
    pub(crate) fn authorization(&self) -> String {
        format!("Splunk {}", self.token.expose_secret())
    }

    /// Wall-clock time the session was issued.
    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at_utc
    }

    /// Length of the validity window.
    pub fn validity(&self) -> Duration {
        self.validity
    }

    /// Time left before the session is expected to expire.
    pub fn expires_in(&self) -> Duration {
        self.validity.saturating_sub(self.issued_at.elapsed())
    }

    pub fn is_expired(&self) -> bool {
        self.issued_at.elapsed() >= self.validity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_debug_hides_token() {
        let session = Session::from_token("abcdef-session-key");
        let debug = format!("{:?}", session);
        assert!(!debug.contains("abcdef-session-key"));
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials::new("admin", SecretString::new("hunter2".to_string().into()));
        let debug = format!("{:?}", creds);
        assert!(debug.contains("admin"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_session_validity_window() {
        let session = Session::from_token("tok");
        assert!(!session.is_expired());
        assert_eq!(session.validity(), Duration::from_secs(3600));
        assert!(session.expires_in() <= Duration::from_secs(3600));
        assert!(session.expires_in() > Duration::from_secs(3500));
    }

    #[test]
    fn test_authorization_header_uses_splunk_scheme() {
        let session = Session::from_token("tok123");
        assert_eq!(session.authorization(), "Splunk tok123");
    }
}
