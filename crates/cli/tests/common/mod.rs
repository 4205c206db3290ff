//! Shared test utilities for splunk-ds integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Mount the login endpoint on a mock server.
//! - Write inventory files into temporary directories.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - `SPLUNK_PASSWORD` is set to a dummy value so no prompt is attempted.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(unused_imports)]
pub use splunk_ds_client::testing::load_fixture;

/// Session key returned by the mocked login endpoint.
#[allow(dead_code)]
pub const TEST_SESSION_KEY: &str = "test-session-key-12345678";

/// Returns a hermetic `splunk-ds` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `SPLUNK_PASSWORD` is set to a dummy value to satisfy config validation.
/// - Other connection env vars are cleared to ensure no leakage from the host.
pub fn splunk_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("splunk-ds");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("SPLUNK_PASSWORD", "test-password");

    cmd.env_remove("SPLUNK_BASE_URL")
        .env_remove("SPLUNK_HOST")
        .env_remove("SPLUNK_PORT")
        .env_remove("SPLUNK_USER")
        .env_remove("SPLUNK_KEYRING_ACCOUNT")
        .env_remove("SPLUNK_SKIP_VERIFY")
        .env_remove("SPLUNK_TIMEOUT")
        .env_remove("SPLUNK_INVENTORY")
        .env_remove("SPLUNK_DEBUG")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `splunk-ds` command pointed at `base_url`, with spinners off.
#[allow(dead_code)]
pub fn splunk_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = splunk_cmd();
    cmd.env("SPLUNK_BASE_URL", base_url).arg("--quiet");
    cmd
}

/// Answer logins with [`TEST_SESSION_KEY`].
#[allow(dead_code)]
pub async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/services/auth/login"))
        .and(query_param("output_mode", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("auth/login_success.json")))
        .mount(server)
        .await;
}

/// Write `content` to `splunkapps.toml` inside `dir` and return its path.
#[allow(dead_code)]
pub fn write_inventory(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("splunkapps.toml");
    std::fs::write(&path, content).expect("write inventory");
    path
}
