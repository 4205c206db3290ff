//! Integration tests for structured exit codes.
//!
//! These tests verify that splunk-ds returns the correct exit codes
//! for different error scenarios, enabling reliable shell scripting.

mod common;

use common::{TEST_SESSION_KEY, load_fixture, mount_login, splunk_cmd, splunk_cmd_with_base_url};
use predicates::prelude::*;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_session_prints_key_and_returns_0() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/auth/login"))
        .and(body_string_contains("username=admin"))
        .and(body_string_contains("password=test-password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("auth/login_success.json")))
        .expect(1)
        .mount(&server)
        .await;

    splunk_cmd_with_base_url(&server.uri())
        .arg("session")
        .assert()
        .code(0)
        .stdout(predicate::str::contains(TEST_SESSION_KEY))
        .stdout(predicate::str::contains("Valid for: 3600s"))
        .stdout(predicate::str::contains("test-password").not());
}

#[tokio::test]
async fn test_rejected_login_returns_2() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(load_fixture("auth/login_invalid_creds.json")),
        )
        .mount(&server)
        .await;

    splunk_cmd_with_base_url(&server.uri())
        .args(["serverclass", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Authentication failed"));
}

#[tokio::test]
async fn test_login_without_session_key_returns_2_and_sends_nothing_else() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/auth/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("auth/login_missing_key.json")),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/services/deployment/server/serverclasses"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    splunk_cmd_with_base_url(&server.uri())
        .args(["serverclass", "create", "--serverclass", "App1"])
        .assert()
        .code(2);
}

#[test]
fn test_connection_refused_during_login_returns_2() {
    // Login failures of any kind are authentication failures.
    splunk_cmd_with_base_url("https://127.0.0.1:1")
        .arg("session")
        .assert()
        .code(2);
}

#[tokio::test]
async fn test_unknown_application_returns_4() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("POST"))
        .and(path(
            "/servicesNS/nobody/system/deployment/server/applications/Missing",
        ))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "messages": [{ "type": "ERROR", "text": "Could not find object id=Missing" }]
        })))
        .mount(&server)
        .await;

    splunk_cmd_with_base_url(&server.uri())
        .args([
            "apps",
            "bind",
            "--application",
            "Missing",
            "--serverclass",
            "App1",
        ])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Could not find object id=Missing"));
}

#[tokio::test]
async fn test_forbidden_returns_6() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/services/deployment/server/serverclasses"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "messages": [{ "type": "ERROR", "text": "Permission denied" }]
        })))
        .mount(&server)
        .await;

    splunk_cmd_with_base_url(&server.uri())
        .args(["serverclass", "list"])
        .assert()
        .code(6);
}

#[tokio::test]
async fn test_non_json_response_returns_5() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/services/deployment/server/applications"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    splunk_cmd_with_base_url(&server.uri())
        .args(["apps", "list"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Protocol error"));
}

#[tokio::test]
async fn test_requests_carry_session_header() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/services/deployment/server/serverclasses"))
        .and(header(
            "Authorization",
            format!("Splunk {}", TEST_SESSION_KEY).as_str(),
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("serverclasses/list_serverclasses.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    splunk_cmd_with_base_url(&server.uri())
        .args(["serverclass", "list"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Splunk_TA_nix"))
        .stdout(predicate::str::contains("Splunk_TA_windows"));
}

#[test]
fn test_missing_password_without_terminal_returns_1() {
    let mut cmd = splunk_cmd();
    cmd.env_remove("SPLUNK_PASSWORD")
        .env("SPLUNK_BASE_URL", "https://127.0.0.1:1")
        .arg("session")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Password is required"));
}

#[test]
fn test_invalid_timeout_returns_1() {
    splunk_cmd_with_base_url("https://127.0.0.1:1")
        .args(["--timeout", "0", "session"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("timeout"));
}
