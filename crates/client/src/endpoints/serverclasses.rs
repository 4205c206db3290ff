//! Serverclass endpoints.

use reqwest::Client;
use tracing::{debug, info};

use crate::allowlist::{AllowList, FilterKey};
use crate::auth::Session;
use crate::endpoints::request::{authorized, decode_json};
use crate::endpoints::{encode_path_segment, send_request};
use crate::error::Result;
use crate::models::{AddResult, CreateOutcome, IgnoredContent, SplunkResponse};

const SERVERCLASSES_PATH: &str = "/services/deployment/server/serverclasses";
const SERVERCLASSES_NS_PATH: &str = "/servicesNS/nobody/search/deployment/server/serverclasses";

/// List serverclass names in server order.
pub async fn list_serverclasses(
    client: &Client,
    base_url: &str,
    session: &Session,
) -> Result<Vec<String>> {
    let url = format!("{}{}", base_url, SERVERCLASSES_PATH);
    let builder = authorized(client.get(&url), session).query(&[("count", "0")]);
    let response = send_request(builder).await?;

    let resp: SplunkResponse<IgnoredContent> = decode_json(response).await?;
    Ok(resp.entry.into_iter().map(|e| e.name).collect())
}

/// Create a serverclass.
///
/// A conflict, an "already exists" message, or a success body with no
/// entries are reported as `CreateOutcome::AlreadyExists`.
pub async fn create_serverclass(
    client: &Client,
    base_url: &str,
    session: &Session,
    name: &str,
) -> Result<CreateOutcome> {
    let url = format!("{}{}", base_url, SERVERCLASSES_PATH);
    let builder = authorized(client.post(&url), session).form(&[("name", name)]);

    let response = match send_request(builder).await {
        Ok(response) => response,
        Err(e) if e.is_already_exists() => {
            info!(serverclass = %name, "Serverclass already exists");
            return Ok(CreateOutcome::AlreadyExists(name.to_string()));
        }
        Err(e) => return Err(e),
    };

    let resp: SplunkResponse<IgnoredContent> = decode_json(response).await?;
    if resp.entry.is_empty() {
        info!(serverclass = %name, "Serverclass already exists");
        return Ok(CreateOutcome::AlreadyExists(name.to_string()));
    }

    debug!(serverclass = %name, "Created serverclass");
    Ok(CreateOutcome::Created(name.to_string()))
}

/// Add one host to a serverclass under `key`.
pub async fn add_host_to_serverclass(
    client: &Client,
    base_url: &str,
    session: &Session,
    serverclass: &str,
    key: &FilterKey,
    host: &str,
) -> Result<AddResult> {
    let url = format!(
        "{}{}/{}",
        base_url,
        SERVERCLASSES_NS_PATH,
        encode_path_segment(serverclass)
    );
    let field = key.to_string();
    let builder = authorized(client.post(&url), session).form(&[(field.as_str(), host)]);
    let response = send_request(builder).await?;

    let _: SplunkResponse<IgnoredContent> = decode_json(response).await?;
    debug!(%serverclass, %key, %host, "Added host to serverclass");

    Ok(AddResult {
        serverclass: serverclass.to_string(),
        key: *key,
        host: host.to_string(),
    })
}

/// Replace the positional allow list of a serverclass in one request.
pub async fn set_allow_list(
    client: &Client,
    base_url: &str,
    session: &Session,
    serverclass: &str,
    allow_list: &AllowList,
) -> Result<()> {
    let url = format!(
        "{}{}/{}",
        base_url,
        SERVERCLASSES_PATH,
        encode_path_segment(serverclass)
    );
    let builder = authorized(client.post(&url), session).form(&allow_list.to_form_pairs());
    let response = send_request(builder).await?;

    let _: SplunkResponse<IgnoredContent> = decode_json(response).await?;
    debug!(%serverclass, entries = allow_list.len(), "Updated allow list");
    Ok(())
}
