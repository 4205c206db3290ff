//! Batch workflow tests.
//!
//! This module tests inventory-driven operations:
//! - Per-application state sequences for `sync`
//! - Failure isolation between applications
//! - Request order and bodies for create-all followed by add-hosts
//!
//! # Invariants
//! - Applications are processed in inventory order
//! - One failing application never stops the rest

mod common;

use std::path::Path;

use common::*;
use splunk_ds_client::{BatchOperation, ClientError, WorkflowState};
use splunk_ds_config::Inventory;
use wiremock::matchers::{body_string, method, path};

fn inventory(toml: &str) -> Inventory {
    Inventory::parse(toml, Path::new("batch.toml")).unwrap()
}

async fn mount_update_ok(server: &MockServer, serverclass: &str) {
    Mock::given(method("POST"))
        .and(path(format!(
            "/services/deployment/server/serverclasses/{serverclass}"
        )))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("serverclasses/update_serverclass.json")),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_sync_existing_serverclass_skips_create() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/deployment/server/serverclasses"))
        .and(body_string("name=X"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(load_fixture("serverclasses/already_exists.json")),
        )
        .mount(&mock_server)
        .await;
    mount_update_ok(&mock_server, "X").await;

    let inv = inventory("[app.X]\nfilename = \"x.tgz\"\nservers = [\"h1\"]\n");
    let report = authenticated_client(&mock_server).sync(&inv).await;

    assert_eq!(report.operation, BatchOperation::Sync);
    assert!(report.is_success());
    assert_eq!(
        report.outcomes[0].states,
        vec![
            WorkflowState::Pending,
            WorkflowState::CheckExists,
            WorkflowState::Skip,
            WorkflowState::BindHosts,
            WorkflowState::Done,
        ]
    );
}

#[tokio::test]
async fn test_sync_new_serverclass_creates_then_binds_hosts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/deployment/server/serverclasses"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(load_fixture("serverclasses/create_serverclass.json")),
        )
        .mount(&mock_server)
        .await;
    mount_update_ok(&mock_server, "App1").await;

    let inv = inventory("[app.App1]\nfilename = \"a.tgz\"\nservers = [\"h1\", \"h2\"]\n");
    let report = authenticated_client(&mock_server).sync(&inv).await;

    let outcome = &report.outcomes[0];
    assert!(outcome.succeeded());
    assert_eq!(outcome.states[2], WorkflowState::Create);
    assert_eq!(outcome.final_state(), WorkflowState::Done);
}

#[tokio::test]
async fn test_sync_records_failing_stage_and_continues() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/deployment/server/serverclasses"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(load_fixture("serverclasses/create_serverclass.json")),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/services/deployment/server/serverclasses/A"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;
    mount_update_ok(&mock_server, "B").await;

    let inv = inventory(
        "[app.A]\nfilename = \"a.tgz\"\nservers = [\"h1\"]\n\n[app.B]\nfilename = \"b.tgz\"\nservers = [\"h2\"]\n",
    );
    let report = authenticated_client(&mock_server).sync(&inv).await;

    assert_eq!(report.attempted(), 2);
    let failed: Vec<_> = report.failed().collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].application, "A");
    assert_eq!(failed[0].failed_stage, Some(WorkflowState::BindHosts));
    assert_eq!(failed[0].final_state(), WorkflowState::Failed);
    assert!(report.outcomes[1].succeeded());
}

#[tokio::test]
async fn test_bind_all_second_failure_isolated() {
    let mock_server = MockServer::start().await;

    for (app, status) in [("A1", 200), ("A2", 500), ("A3", 200)] {
        let template = if status == 200 {
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("applications/bind_application.json"))
        } else {
            ResponseTemplate::new(status).set_body_string("bind failed")
        };
        Mock::given(method("POST"))
            .and(path(format!(
                "/servicesNS/nobody/system/deployment/server/applications/{app}"
            )))
            .and(body_string(format!("serverclass={app}")))
            .respond_with(template)
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let inv = inventory(
        "[app.A1]\nfilename = \"1.tgz\"\n\n[app.A2]\nfilename = \"2.tgz\"\n\n[app.A3]\nfilename = \"3.tgz\"\n",
    );
    let report = authenticated_client(&mock_server).bind_all(&inv).await;

    let succeeded: Vec<_> = report
        .succeeded()
        .map(|o| o.application.as_str())
        .collect();
    let failed: Vec<_> = report.failed().map(|o| o.application.as_str()).collect();
    assert_eq!(succeeded, vec!["A1", "A3"]);
    assert_eq!(failed, vec!["A2"]);
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 3);

    match report.into_result() {
        Err(ClientError::PartialBatchFailure { failed, attempted }) => {
            assert_eq!((failed, attempted), (1, 3));
        }
        other => panic!("expected PartialBatchFailure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_all_then_add_hosts_request_sequence() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/deployment/server/serverclasses"))
        .and(body_string("name=App1"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(load_fixture("serverclasses/create_serverclass.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/services/deployment/server/serverclasses/App1"))
        .and(body_string("whitelist.0=h1&whitelist.1=h2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("serverclasses/update_serverclass.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let inv = inventory("[app.App1]\nfilename = \"a.tgz\"\nservers = [\"h1\", \"h2\"]\n");
    let client = authenticated_client(&mock_server);

    let created = client.create_all_serverclasses(&inv).await;
    assert!(created.is_success());
    let added = client.add_hosts_to_serverclasses(&inv).await;
    assert!(added.is_success());

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[0].url.path(),
        "/services/deployment/server/serverclasses"
    );
    assert_eq!(
        requests[1].url.path(),
        "/services/deployment/server/serverclasses/App1"
    );
    assert_eq!(
        String::from_utf8_lossy(&requests[1].body),
        "whitelist.0=h1&whitelist.1=h2"
    );
}

#[tokio::test]
async fn test_batch_follows_inventory_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/deployment/server/serverclasses"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(load_fixture("serverclasses/create_serverclass.json")),
        )
        .mount(&mock_server)
        .await;

    let inv = inventory(
        "[app.Zulu]\nfilename = \"z.tgz\"\n\n[app.Alpha]\nfilename = \"a.tgz\"\n\n[app.Mike]\nfilename = \"m.tgz\"\n",
    );
    let report = authenticated_client(&mock_server)
        .create_all_serverclasses(&inv)
        .await;

    let order: Vec<_> = report
        .outcomes
        .iter()
        .map(|o| o.application.as_str())
        .collect();
    assert_eq!(order, vec!["Zulu", "Alpha", "Mike"]);

    let bodies: Vec<String> = mock_server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| String::from_utf8_lossy(&r.body).into_owned())
        .collect();
    assert_eq!(bodies, vec!["name=Zulu", "name=Alpha", "name=Mike"]);
}
