//! Configuration loader for environment variables and command-line overrides.
//!
//! Responsibilities:
//! - Load configuration from `.env` files and `SPLUNK_*` environment variables.
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Interaction with system keyrings directly (delegated to `types` via `resolve()`).
//! - Inventory files (see `inventory`).
//!
//! Invariants / Assumptions:
//! - Command-line overrides take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
