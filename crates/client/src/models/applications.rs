//! Deployment application models.

use serde::{Deserialize, Serialize};

/// Content of a deployment application entry.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DeploymentAppContent {
    #[serde(default)]
    pub serverclasses: Vec<String>,
}

/// A deployment application as listed by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentApp {
    pub name: String,
    pub serverclasses: Vec<String>,
}

/// Result of binding an application to a serverclass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindResult {
    pub application: String,
    pub serverclass: String,
}
