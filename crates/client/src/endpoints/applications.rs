//! Deployment application endpoints.

use reqwest::Client;
use tracing::debug;

use crate::auth::Session;
use crate::endpoints::request::{authorized, decode_json};
use crate::endpoints::{encode_path_segment, send_request};
use crate::error::Result;
use crate::models::{BindResult, DeploymentApp, DeploymentAppContent, IgnoredContent, SplunkResponse};

/// List deployment applications in server order.
pub async fn list_deployment_apps(
    client: &Client,
    base_url: &str,
    session: &Session,
) -> Result<Vec<DeploymentApp>> {
    let url = format!("{}/services/deployment/server/applications", base_url);
    let builder = authorized(client.get(&url), session).query(&[("count", "0")]);
    let response = send_request(builder).await?;

    let resp: SplunkResponse<DeploymentAppContent> = decode_json(response).await?;
    Ok(resp
        .entry
        .into_iter()
        .map(|e| DeploymentApp {
            name: e.name,
            serverclasses: e.content.unwrap_or_default().serverclasses,
        })
        .collect())
}

/// Bind an application to a serverclass.
pub async fn bind_serverclass_to_app(
    client: &Client,
    base_url: &str,
    session: &Session,
    application: &str,
    serverclass: &str,
) -> Result<BindResult> {
    let url = format!(
        "{}/servicesNS/nobody/system/deployment/server/applications/{}",
        base_url,
        encode_path_segment(application)
    );
    let builder = authorized(client.post(&url), session).form(&[("serverclass", serverclass)]);
    let response = send_request(builder).await?;

    let _: SplunkResponse<IgnoredContent> = decode_json(response).await?;
    debug!(%application, %serverclass, "Bound application to serverclass");

    Ok(BindResult {
        application: application.to_string(),
        serverclass: serverclass.to_string(),
    })
}
