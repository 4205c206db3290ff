//! Deployment server configuration endpoints.

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::auth::Session;
use crate::endpoints::request::{authorized, decode_json};
use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::models::{ReloadContent, ReloadStatus, SplunkResponse};

/// Reload the deployment server configuration.
pub async fn reload(client: &Client, base_url: &str, session: &Session) -> Result<ReloadStatus> {
    let url = format!("{}/services/deployment/server/config/_reload", base_url);
    let builder = authorized(client.post(&url), session);
    let response = send_request(builder).await?;

    let resp: SplunkResponse<ReloadContent> = decode_json(response).await?;
    let raw = resp
        .entry
        .first()
        .and_then(|e| e.content.as_ref())
        .and_then(|c| c.load_time.as_ref())
        .ok_or_else(|| ClientError::ProtocolError("reload response has no loadTime".to_string()))?;

    let load_time = parse_epoch_seconds(raw).ok_or_else(|| {
        ClientError::ProtocolError(format!("reload loadTime is not an epoch timestamp: {raw}"))
    })?;

    debug!(%load_time, "Deployment server reloaded");
    Ok(ReloadStatus { load_time })
}

fn parse_epoch_seconds(value: &Value) -> Option<DateTime<Utc>> {
    let secs = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<f64>().ok().map(|f| f.trunc() as i64),
        _ => None,
    }?;
    DateTime::from_timestamp(secs, 0)
}
