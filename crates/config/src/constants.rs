//! Centralized constants for the splunk-ds workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default deployment server host name.
pub const DEFAULT_HOST: &str = "splunk";

/// Default Splunk management port.
pub const DEFAULT_SPLUNK_PORT: u16 = 8089;

/// Default admin user for REST authentication.
pub const DEFAULT_USERNAME: &str = "admin";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Session Defaults
// =============================================================================

/// Validity window of a session key issued by `/services/auth/login` (1 hour).
///
/// Splunk does not report this value; it is informational only and the
/// client never renews a session on its own.
pub const SESSION_VALIDITY_SECS: u64 = 3600;

// =============================================================================
// Deployment Server Defaults
// =============================================================================

/// Default inventory location, relative to the working directory.
pub const DEFAULT_INVENTORY_PATH: &str = "config/splunkapps.toml";

/// Prefix of positional allow-list keys expected by the serverclass API.
pub const ALLOW_LIST_PREFIX: &str = "whitelist";

/// Prefix of positional deny-list keys expected by the serverclass API.
pub const DENY_LIST_PREFIX: &str = "blacklist";

/// Default filter key for single-host additions.
pub const DEFAULT_FILTER_KEY: &str = "whitelist.0";
