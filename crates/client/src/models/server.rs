//! Deployment server reload model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Content of the `_reload` response entry.
#[derive(Debug, Deserialize, Clone)]
pub struct ReloadContent {
    /// Epoch seconds; Splunk sends it as a number or a numeric string.
    #[serde(rename = "loadTime")]
    pub load_time: Option<serde_json::Value>,
}

/// Outcome of a deployment server reload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReloadStatus {
    pub load_time: DateTime<Utc>,
}
