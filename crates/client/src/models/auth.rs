//! Login response model.

use serde::Deserialize;

/// Body of `/services/auth/login?output_mode=json`.
///
/// `sessionKey` is kept loosely typed so a non-string value can be reported
/// as an authentication failure instead of a decode error.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "sessionKey")]
    pub session_key: Option<serde_json::Value>,
}
