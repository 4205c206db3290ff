//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `SPLUNK_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Environment variables take precedence over built-in defaults.
//! - Explicit builder calls (CLI flags) made after `from_env` take precedence
//!   over environment variables.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Invalid numeric or boolean values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parse a boolean the way the environment usually spells it.
pub(crate) fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be true or false".to_string(),
        }),
    }
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("SPLUNK_BASE_URL") {
        loader.set_base_url(Some(url));
    }
    if let Some(host) = env_var_or_none("SPLUNK_HOST") {
        loader.set_host(Some(host));
    }
    if let Some(port) = env_var_or_none("SPLUNK_PORT") {
        let port: u16 = port.parse().map_err(|_| ConfigError::InvalidValue {
            var: "SPLUNK_PORT".to_string(),
            message: "must be a port number between 0 and 65535".to_string(),
        })?;
        loader.set_port(Some(port));
    }
    if let Some(username) = env_var_or_none("SPLUNK_USER") {
        loader.set_username(Some(username));
    }
    if let Some(password) = env_var_or_none("SPLUNK_PASSWORD") {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(account) = env_var_or_none("SPLUNK_KEYRING_ACCOUNT") {
        loader.set_keyring_account(Some(account));
    }
    if let Some(skip) = env_var_or_none("SPLUNK_SKIP_VERIFY") {
        loader.set_skip_verify(Some(parse_bool("SPLUNK_SKIP_VERIFY", &skip)?));
    }
    if let Some(timeout) = env_var_or_none("SPLUNK_TIMEOUT") {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: "SPLUNK_TIMEOUT".to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(path) = env_var_or_none("SPLUNK_INVENTORY") {
        loader.set_inventory_path(Some(PathBuf::from(path)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_empty_and_whitespace_strings() {
        let key1 = "_SPLUNK_DS_TEST_UNSET_VAR";
        assert!(env_var_or_none(key1).is_none());

        temp_env::with_vars([(key1, Some(""))], || {
            assert!(env_var_or_none(key1).is_none());
        });

        temp_env::with_vars([(key1, Some("   "))], || {
            assert!(env_var_or_none(key1).is_none());
        });

        let key2 = "_SPLUNK_DS_TEST_SET_VAR";
        temp_env::with_vars([(key2, Some(" test-value "))], || {
            assert_eq!(env_var_or_none(key2), Some("test-value".to_string()));
        });
    }

    #[test]
    fn test_parse_bool_accepts_common_spellings() {
        assert!(parse_bool("X", "true").unwrap());
        assert!(parse_bool("X", "1").unwrap());
        assert!(parse_bool("X", "YES").unwrap());
        assert!(!parse_bool("X", "false").unwrap());
        assert!(!parse_bool("X", "0").unwrap());
        assert!(matches!(
            parse_bool("X", "maybe"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
