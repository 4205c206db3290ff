//! Configuration management for splunk-ds.
//!
//! This crate provides connection and credential configuration loaded from
//! environment variables and command-line overrides, plus the application
//! inventory that drives batch operations.

pub mod constants;
pub mod inventory;
mod loader;
pub mod types;

pub use inventory::{AppEntry, Inventory, InventoryError};
pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, Config, ConnectionConfig, KEYRING_SERVICE, SecureValue};
