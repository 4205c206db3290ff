//! CSV formatter implementation.
//!
//! Responsibilities:
//! - Format results as RFC 4180 CSV via the `csv` crate writer.
//!
//! Invariants:
//! - Every output starts with a header row, even when there is no data.
//! - Multi-valued cells (hosts, serverclasses, states) are joined with `;`.

use anyhow::{Context, Result};
use splunk_ds_client::{
    AddResult, BatchReport, BindResult, CreateOutcome, DeploymentApp, ReloadStatus,
};
use splunk_ds_config::Inventory;

use crate::formatters::{Formatter, SessionOutput};

const LIST_SEP: &str = ";";

/// CSV formatter.
pub struct CsvFormatter;

/// Write `headers` and `rows` into a CSV string.
fn write_csv(headers: &[&str], rows: &[Vec<String>]) -> Result<String> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

impl Formatter for CsvFormatter {
    fn format_serverclasses(&self, names: &[String]) -> Result<String> {
        let rows: Vec<Vec<String>> = names.iter().map(|n| vec![n.clone()]).collect();
        write_csv(&["name"], &rows)
    }

    fn format_apps(&self, apps: &[DeploymentApp]) -> Result<String> {
        let rows: Vec<Vec<String>> = apps
            .iter()
            .map(|app| vec![app.name.clone(), app.serverclasses.join(LIST_SEP)])
            .collect();
        write_csv(&["name", "serverclasses"], &rows)
    }

    fn format_create(&self, outcome: &CreateOutcome) -> Result<String> {
        let status = if outcome.is_created() {
            "created"
        } else {
            "already_exists"
        };
        write_csv(
            &["serverclass", "outcome"],
            &[vec![outcome.name().to_string(), status.to_string()]],
        )
    }

    fn format_add_host(&self, result: &AddResult) -> Result<String> {
        write_csv(
            &["serverclass", "key", "host"],
            &[vec![
                result.serverclass.clone(),
                result.key.to_string(),
                result.host.clone(),
            ]],
        )
    }

    fn format_bind(&self, result: &BindResult) -> Result<String> {
        write_csv(
            &["application", "serverclass"],
            &[vec![result.application.clone(), result.serverclass.clone()]],
        )
    }

    fn format_reload(&self, status: &ReloadStatus) -> Result<String> {
        write_csv(&["load_time"], &[vec![status.load_time.to_rfc3339()]])
    }

    fn format_session(&self, session: &SessionOutput) -> Result<String> {
        write_csv(
            &[
                "base_url",
                "username",
                "session_key",
                "issued_at",
                "expires_at",
                "validity_secs",
            ],
            &[vec![
                session.base_url.clone(),
                session.username.clone(),
                session.session_key.clone(),
                session.issued_at.to_rfc3339(),
                session.expires_at.to_rfc3339(),
                session.validity_secs.to_string(),
            ]],
        )
    }

    fn format_batch_report(&self, report: &BatchReport) -> Result<String> {
        let rows: Vec<Vec<String>> = report
            .outcomes
            .iter()
            .map(|o| {
                vec![
                    report.operation.to_string(),
                    o.application.clone(),
                    o.succeeded().to_string(),
                    o.states
                        .iter()
                        .map(|s| s.to_string())
                        .collect::<Vec<_>>()
                        .join(LIST_SEP),
                    o.failed_stage.map(|s| s.to_string()).unwrap_or_default(),
                    o.detail.clone().unwrap_or_default(),
                    o.error.clone().unwrap_or_default(),
                ]
            })
            .collect();
        write_csv(
            &[
                "operation",
                "application",
                "succeeded",
                "states",
                "failed_stage",
                "detail",
                "error",
            ],
            &rows,
        )
    }

    fn format_inventory(&self, inventory: &Inventory) -> Result<String> {
        let rows: Vec<Vec<String>> = inventory
            .apps()
            .iter()
            .map(|app| {
                vec![
                    app.name.clone(),
                    app.filename.clone(),
                    app.hosts.join(LIST_SEP),
                ]
            })
            .collect();
        write_csv(&["application", "filename", "hosts"], &rows)
    }
}
