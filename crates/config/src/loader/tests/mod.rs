//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test builder methods and defaults.
//! - Test environment variable handling and precedence.
//! - Test `.env` loading and the `DOTENV_DISABLED` gate.
//!
//! Does NOT handle:
//! - Direct environment variable parsing helpers (tested in env.rs).
//!
//! Invariants:
//! - Tests that touch process-global state use `serial_test` and `env_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
