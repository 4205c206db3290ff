//! Authentication endpoints.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::auth::{Credentials, Session};
use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::models::LoginResponse;

/// Exchange a username and password for a session key.
///
/// Every failure, including an unreachable server, is reported as
/// `ClientError::AuthFailed`.
pub async fn login(client: &Client, base_url: &str, credentials: &Credentials) -> Result<Session> {
    debug!(username = %credentials.username, "Logging in to deployment server");

    let url = format!("{}/services/auth/login", base_url);
    let builder = client
        .post(&url)
        .form(&[
            ("username", credentials.username.as_str()),
            ("password", credentials.password.expose_secret()),
        ])
        .query(&[("output_mode", "json")]);

    let response = send_request(builder).await.map_err(|e| match e {
        ClientError::ApiError {
            status, message, ..
        } => ClientError::AuthFailed(format!("login rejected ({status}): {message}")),
        ClientError::HttpError(e) => ClientError::AuthFailed(format!("could not reach {url}: {e}")),
        other => ClientError::AuthFailed(other.to_string()),
    })?;

    let body = response
        .text()
        .await
        .map_err(|e| ClientError::AuthFailed(format!("could not read login response: {e}")))?;
    let login: LoginResponse = serde_json::from_str(&body)
        .map_err(|_| ClientError::AuthFailed("login response is not valid JSON".to_string()))?;

    match login.session_key {
        Some(serde_json::Value::String(key)) if !key.trim().is_empty() => {
            debug!("Obtained session key");
            Ok(Session::new(SecretString::new(key.into())))
        }
        Some(serde_json::Value::String(_)) => Err(ClientError::AuthFailed(
            "empty sessionKey in login response".to_string(),
        )),
        Some(_) => Err(ClientError::AuthFailed(
            "sessionKey in login response is not a string".to_string(),
        )),
        None => Err(ClientError::AuthFailed(
            "missing sessionKey in login response".to_string(),
        )),
    }
}
