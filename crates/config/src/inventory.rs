//! Application inventory loading.
//!
//! Responsibilities:
//! - Read the TOML inventory that lists deployment applications.
//! - Validate entries and preserve their file order.
//!
//! Does NOT handle:
//! - Fetching packages from the artifact bucket (the bucket location is only carried).
//! - Any remote calls (see client crate).
//!
//! Invariants:
//! - `Inventory::apps()` yields entries in the order they appear in the file.
//! - Every entry has a non-empty name and filename; host strings are non-empty.
//! - Entries are immutable once loaded.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading an inventory file.
#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Failed to read inventory {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse inventory {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid inventory entry '{app}': {message}")]
    InvalidEntry { app: String, message: String },
}

/// One deployment application and the hosts that should receive it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppEntry {
    /// Application name; also the name of its serverclass.
    pub name: String,
    /// Package file name on the deployment server.
    pub filename: String,
    /// Host names or glob patterns, in allow-list order.
    pub hosts: Vec<String>,
}

/// Ordered set of deployment applications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Inventory {
    apps: Vec<AppEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    aws_s3_bucket: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    filename: Option<String>,
    #[serde(default)]
    servers: Vec<String>,
}

impl Inventory {
    /// Build an inventory from already-validated entries.
    pub fn new(apps: Vec<AppEntry>, aws_s3_bucket: Option<String>) -> Self {
        Self {
            apps,
            aws_s3_bucket,
        }
    }

    /// Read and validate an inventory file.
    pub fn load(path: &Path) -> Result<Self, InventoryError> {
        let content = std::fs::read_to_string(path).map_err(|source| InventoryError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let inventory = Self::parse(&content, path)?;
        tracing::debug!(
            path = %path.display(),
            apps = inventory.len(),
            "Loaded inventory"
        );
        Ok(inventory)
    }

    /// Parse inventory text. `origin` is only used for error context.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, InventoryError> {
        let table: toml::Table =
            toml::from_str(content).map_err(|source| InventoryError::Parse {
                path: origin.to_path_buf(),
                source,
            })?;

        let aws_s3_bucket = match table.get("aws_s3_bucket") {
            None => None,
            Some(toml::Value::String(bucket)) if bucket.trim().is_empty() => None,
            Some(toml::Value::String(bucket)) => Some(bucket.clone()),
            Some(_) => {
                return Err(InventoryError::InvalidEntry {
                    app: "aws_s3_bucket".to_string(),
                    message: "must be a string".to_string(),
                });
            }
        };

        let apps_table = match table.get("app") {
            None => {
                tracing::warn!(path = %origin.display(), "Inventory has no [app] entries");
                return Ok(Self::new(Vec::new(), aws_s3_bucket));
            }
            Some(toml::Value::Table(apps)) => apps,
            Some(_) => {
                return Err(InventoryError::InvalidEntry {
                    app: "app".to_string(),
                    message: "must be a table of applications".to_string(),
                });
            }
        };

        let mut apps = Vec::with_capacity(apps_table.len());
        for (name, value) in apps_table {
            apps.push(Self::parse_entry(name, value)?);
        }

        Ok(Self::new(apps, aws_s3_bucket))
    }

    fn parse_entry(name: &str, value: &toml::Value) -> Result<AppEntry, InventoryError> {
        let invalid = |message: String| InventoryError::InvalidEntry {
            app: name.to_string(),
            message,
        };

        if name.trim().is_empty() {
            return Err(invalid("application name must not be empty".to_string()));
        }

        let raw: RawEntry = value
            .clone()
            .try_into()
            .map_err(|e: toml::de::Error| invalid(e.message().to_string()))?;

        let filename = match raw.filename {
            Some(f) if !f.trim().is_empty() => f,
            _ => return Err(invalid("filename is required".to_string())),
        };

        if let Some(pos) = raw.servers.iter().position(|h| h.trim().is_empty()) {
            return Err(invalid(format!("servers[{pos}] is empty")));
        }

        Ok(AppEntry {
            name: name.to_string(),
            filename,
            hosts: raw.servers,
        })
    }

    /// Applications in file order.
    pub fn apps(&self) -> &[AppEntry] {
        &self.apps
    }

    /// Look up an application by name.
    pub fn get(&self, name: &str) -> Option<&AppEntry> {
        self.apps.iter().find(|app| app.name == name)
    }

    /// Remote artifact bucket, if configured.
    pub fn aws_s3_bucket(&self) -> Option<&str> {
        self.aws_s3_bucket.as_deref()
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a AppEntry;
    type IntoIter = std::slice::Iter<'a, AppEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.apps.iter()
    }
}
