//! Authentication types for deployment server configuration.
//!
//! Responsibilities:
//! - Hold the username/password pair used to obtain a session key.
//! - Provide secure value storage (plain text or keyring) for the password.
//!
//! Does NOT handle:
//! - The login exchange itself (see client crate).
//! - Keyring entry creation/management (only retrieval).
//!
//! Invariants:
//! - Passwords are `secrecy::SecretString` and never appear in `Debug` output.
//! - `KEYRING_SERVICE` is the canonical service name for all keyring operations.

use secrecy::SecretString;

/// Credentials exchanged for a session key.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Admin username on the deployment server.
    pub username: String,
    /// Password for `username`.
    pub password: SecretString,
}

/// Service name used for keyring storage.
pub const KEYRING_SERVICE: &str = "splunk-ds";

/// A value that can be stored either in plain text or in the system keyring.
#[derive(Debug, Clone)]
pub enum SecureValue {
    /// Value stored in the system keyring.
    Keyring {
        /// The account name in the keyring.
        keyring_account: String,
    },
    /// Value held in memory (as a SecretString).
    Plain(SecretString),
}

impl SecureValue {
    /// Resolve the secure value to a SecretString.
    ///
    /// If the value is stored in the keyring, it will be fetched.
    pub fn resolve(&self) -> Result<SecretString, keyring::Error> {
        match self {
            Self::Plain(secret) => Ok(secret.clone()),
            Self::Keyring { keyring_account } => {
                let entry = keyring::Entry::new(KEYRING_SERVICE, keyring_account)?;
                let password = entry.get_password()?;
                Ok(SecretString::new(password.into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_secure_value_resolve_plain() {
        let secret = SecretString::new("test-secret".to_string().into());
        let val = SecureValue::Plain(secret.clone());
        let resolved = val.resolve().unwrap();
        assert_eq!(resolved.expose_secret(), secret.expose_secret());
    }

    /// Test that AuthConfig Debug output does not expose the password.
    #[test]
    fn test_auth_config_debug_does_not_expose_password() {
        let auth_config = AuthConfig {
            username: "admin".to_string(),
            password: SecretString::new("session-password-456".to_string().into()),
        };

        let debug_output = format!("{:?}", auth_config);

        assert!(
            !debug_output.contains("session-password-456"),
            "Debug output should not contain the password"
        );
        // The username is not a secret
        assert!(debug_output.contains("admin"));
    }

    #[test]
    fn test_secure_value_plain_not_exposed_in_debug() {
        let secure_value =
            SecureValue::Plain(SecretString::new("secure-value-secret".to_string().into()));

        let debug_output = format!("{:?}", secure_value);

        assert!(!debug_output.contains("secure-value-secret"));
    }

    #[test]
    fn test_secure_value_keyring_not_exposed_in_debug() {
        let secure_value = SecureValue::Keyring {
            keyring_account: "ds-admin".to_string(),
        };

        let debug_output = format!("{:?}", secure_value);

        assert!(debug_output.contains("ds-admin"));
        assert!(debug_output.contains("Keyring"));
    }
}
