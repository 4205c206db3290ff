//! Request execution and response decoding shared by all endpoints.
//!
//! Requests are sent exactly once. Non-2xx responses become
//! `ClientError::ApiError` with Splunk `messages` flattened into the message.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::Session;
use crate::error::{ClientError, Result};
use crate::models::SplunkMessages;

/// Attach the session header and JSON output mode.
pub(crate) fn authorized(builder: RequestBuilder, session: &Session) -> RequestBuilder {
    builder
        .header("Authorization", session.authorization())
        .query(&[("output_mode", "json")])
}

/// Send a request and map non-success status codes to `ClientError::ApiError`.
pub async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;

    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    // Try to parse Splunk error messages for a cleaner display
    let message = match serde_json::from_str::<SplunkMessages>(&body) {
        Ok(m) if !m.messages.is_empty() => m.flatten(),
        _ => body,
    };

    debug!(status, %url, "Request failed");
    Err(ClientError::ApiError {
        status,
        url,
        message,
    })
}

/// Decode a JSON body, reporting shape mismatches as `ClientError::ProtocolError`.
pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let url = response.url().to_string();
    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| ClientError::ProtocolError(format!("unexpected response from {url}: {e}")))
}
