//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide multiple output formats: Table, JSON, CSV, and YAML.
//! - Implement the `Formatter` trait for every deployment server result type.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings; see `common::output_result`).
//!
//! Invariants:
//! - Tables use tab-separation for consistent alignment in standard terminals.
//! - Batch reports list applications in inventory order in every format.
//!
//! ## Empty-State Handling
//!
//! | Format | Empty State Behavior | Example |
//! |--------|---------------------|---------|
//! | JSON | Valid empty structure | `[]` |
//! | YAML | Valid empty structure | `[]` |
//! | CSV | Headers only, no data | `name\n` |
//! | Table | Human message | `No serverclasses found.` |

use std::str::FromStr;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use splunk_ds_client::{
    AddResult, BatchReport, BindResult, CreateOutcome, DeploymentApp, ReloadStatus,
};
use splunk_ds_config::Inventory;

mod common;
mod csv;
mod json;
mod macros;
mod table;
mod yaml;

pub use common::output_result;
pub use csv::CsvFormatter;
pub use json::JsonFormatter;
pub use table::TableFormatter;
pub use yaml::YamlFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => anyhow::bail!(
                "Invalid output format: {}. Valid options: table, json, csv, yaml",
                s
            ),
        }
    }
}

/// Session details shown by the `session` command.
#[derive(Debug, Clone, Serialize)]
pub struct SessionOutput {
    pub base_url: String,
    pub username: String,
    pub session_key: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub validity_secs: u64,
}

/// Formatter trait for different output types.
pub trait Formatter {
    fn format_serverclasses(&self, names: &[String]) -> Result<String>;

    fn format_apps(&self, apps: &[DeploymentApp]) -> Result<String>;

    fn format_create(&self, outcome: &CreateOutcome) -> Result<String>;

    fn format_add_host(&self, result: &AddResult) -> Result<String>;

    fn format_bind(&self, result: &BindResult) -> Result<String>;

    fn format_reload(&self, status: &ReloadStatus) -> Result<String>;

    fn format_session(&self, session: &SessionOutput) -> Result<String>;

    /// Per-application outcomes of a batch run, in inventory order.
    fn format_batch_report(&self, report: &BatchReport) -> Result<String>;

    fn format_inventory(&self, inventory: &Inventory) -> Result<String>;
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
        OutputFormat::Yaml => Box::new(YamlFormatter),
    }
}
