//! Deployment application endpoint tests.

mod common;

use common::*;
use splunk_ds_client::ClientError;
use wiremock::matchers::{body_string, header, method, path, query_param};

#[tokio::test]
async fn test_list_deployment_apps() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/deployment/server/applications"))
        .and(query_param("count", "0"))
        .and(header("Authorization", auth_header().as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("applications/list_applications.json")),
        )
        .mount(&mock_server)
        .await;

    let apps = authenticated_client(&mock_server)
        .list_deployment_apps()
        .await
        .unwrap();

    assert_eq!(apps.len(), 2);
    assert_eq!(apps[0].name, "Splunk_TA_nix");
    assert_eq!(apps[0].serverclasses, vec!["Splunk_TA_nix"]);
    assert_eq!(apps[1].name, "Splunk_TA_windows");
    assert!(apps[1].serverclasses.is_empty());
}

#[tokio::test]
async fn test_bind_serverclass_to_app() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(
            "/servicesNS/nobody/system/deployment/server/applications/App1",
        ))
        .and(query_param("output_mode", "json"))
        .and(body_string("serverclass=App1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("applications/bind_application.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = authenticated_client(&mock_server)
        .bind_serverclass_to_app("App1", "App1")
        .await
        .unwrap();

    assert_eq!(result.application, "App1");
    assert_eq!(result.serverclass, "App1");
}

#[tokio::test]
async fn test_bind_unknown_app_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(
            "/servicesNS/nobody/system/deployment/server/applications/Missing",
        ))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "messages": [{"type": "ERROR", "text": "Could not find object id=Missing"}]
        })))
        .mount(&mock_server)
        .await;

    let err = authenticated_client(&mock_server)
        .bind_serverclass_to_app("Missing", "Missing")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(matches!(err, ClientError::ApiError { .. }));
}
