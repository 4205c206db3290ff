//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the deployment server client.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

// Re-export test utilities from splunk-ds-client
#[allow(unused_imports)]
pub use splunk_ds_client::testing::load_fixture;

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use splunk_ds_client::endpoints;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use splunk_ds_client::{Connection, DeploymentClient, Session};

/// Session key used by every pre-authenticated test client.
#[allow(dead_code)]
pub const TEST_SESSION_KEY: &str = "test-session-key-12345678";

/// Build a client against `server` that is already authenticated.
#[allow(dead_code)]
pub fn authenticated_client(server: &MockServer) -> DeploymentClient {
    let conn = Connection::builder()
        .base_url(server.uri())
        .build()
        .expect("connection should build");
    DeploymentClient::new(conn, Session::from_token(TEST_SESSION_KEY))
}

/// Session for direct endpoint calls.
#[allow(dead_code)]
pub fn test_session() -> Session {
    Session::from_token(TEST_SESSION_KEY)
}

/// Expected `Authorization` header value.
#[allow(dead_code)]
pub fn auth_header() -> String {
    format!("Splunk {TEST_SESSION_KEY}")
}
