//! Configuration type definitions for splunk-ds.
//!
//! Responsibilities:
//! - Define configuration types for authentication and connections.
//!
//! Does NOT handle:
//! - Configuration loading from flags or environment variables (see `loader` module).
//! - Inventory parsing (see `inventory` module).
//! - Actual network connections or authentication flows (see client crate).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.

mod auth;
mod connection;

pub use auth::{AuthConfig, KEYRING_SERVICE, SecureValue};
pub use connection::{Config, ConnectionConfig};
