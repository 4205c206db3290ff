//! Serverclass models.

use serde::Serialize;

use crate::allowlist::{AllowList, FilterKey};

/// Result of a serverclass creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "serverclass", rename_all = "snake_case")]
pub enum CreateOutcome {
    Created(String),
    AlreadyExists(String),
}

impl CreateOutcome {
    pub fn name(&self) -> &str {
        match self {
            Self::Created(name) | Self::AlreadyExists(name) => name,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Result of adding one host under a filter key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddResult {
    pub serverclass: String,
    pub key: FilterKey,
    pub host: String,
}

/// Result of a bulk allow-list update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddHostsResult {
    pub serverclass: String,
    pub allow_list: AllowList,
}
