//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format results as tab-separated tables and short confirmation lines.
//! - Summarize batch reports with a succeeded/failed footer.
//!
//! Does NOT handle:
//! - Other output formats.
//! - File I/O.

use anyhow::Result;
use splunk_ds_client::{
    AddResult, AppOutcome, BatchReport, BindResult, CreateOutcome, DeploymentApp, ReloadStatus,
};
use splunk_ds_config::Inventory;

use crate::formatters::common::{DEFAULT_MISSING_VALUE, join_cell};
use crate::formatters::{Formatter, SessionOutput};

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_serverclasses(&self, names: &[String]) -> Result<String> {
        if names.is_empty() {
            return Ok("No serverclasses found.".to_string());
        }

        let mut output = String::from("NAME\n");
        for name in names {
            output.push_str(name);
            output.push('\n');
        }
        Ok(output)
    }

    fn format_apps(&self, apps: &[DeploymentApp]) -> Result<String> {
        if apps.is_empty() {
            return Ok("No deployment applications found.".to_string());
        }

        let mut output = String::from("NAME\tSERVERCLASSES\n");
        for app in apps {
            output.push_str(&format!(
                "{}\t{}\n",
                app.name,
                join_cell(&app.serverclasses, ", ")
            ));
        }
        Ok(output)
    }

    fn format_create(&self, outcome: &CreateOutcome) -> Result<String> {
        Ok(match outcome {
            CreateOutcome::Created(name) => format!("Serverclass '{}' created.", name),
            CreateOutcome::AlreadyExists(name) => {
                format!("Serverclass '{}' already exists.", name)
            }
        })
    }

    fn format_add_host(&self, result: &AddResult) -> Result<String> {
        Ok(format!(
            "Added '{}' to serverclass '{}' as {}.",
            result.host, result.serverclass, result.key
        ))
    }

    fn format_bind(&self, result: &BindResult) -> Result<String> {
        Ok(format!(
            "Application '{}' bound to serverclass '{}'.",
            result.application, result.serverclass
        ))
    }

    fn format_reload(&self, status: &ReloadStatus) -> Result<String> {
        Ok(format!(
            "Deployment server reloaded (load time: {}).",
            status.load_time.to_rfc3339()
        ))
    }

    fn format_session(&self, session: &SessionOutput) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!("Server: {}\n", session.base_url));
        output.push_str(&format!("User: {}\n", session.username));
        output.push_str(&format!("Session key: {}\n", session.session_key));
        output.push_str(&format!("Issued at: {}\n", session.issued_at.to_rfc3339()));
        output.push_str(&format!("Expires at: {}\n", session.expires_at.to_rfc3339()));
        output.push_str(&format!("Valid for: {}s\n", session.validity_secs));
        Ok(output)
    }

    fn format_batch_report(&self, report: &BatchReport) -> Result<String> {
        if report.outcomes.is_empty() {
            return Ok(format!("{}: no applications in inventory.", report.operation));
        }

        let mut output = String::from("APPLICATION\tRESULT\tSTATES\tDETAIL\n");
        for outcome in &report.outcomes {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\n",
                outcome.application,
                result_label(outcome),
                states_path(outcome),
                outcome_detail(outcome)
            ));
        }
        output.push_str(&format!(
            "\n{}: {} of {} applications succeeded",
            report.operation,
            report.succeeded().count(),
            report.attempted()
        ));

        let failed: Vec<&str> = report.failed().map(|o| o.application.as_str()).collect();
        if !failed.is_empty() {
            output.push_str(&format!(", failed: {}", failed.join(", ")));
        }
        output.push('\n');
        Ok(output)
    }

    fn format_inventory(&self, inventory: &Inventory) -> Result<String> {
        if inventory.is_empty() {
            return Ok("No applications in inventory.".to_string());
        }

        let mut output = String::from("APPLICATION\tFILENAME\tHOSTS\n");
        for app in inventory {
            output.push_str(&format!(
                "{}\t{}\t{}\n",
                app.name,
                app.filename,
                join_cell(&app.hosts, ", ")
            ));
        }
        if let Some(bucket) = inventory.aws_s3_bucket() {
            output.push_str(&format!("\nS3 bucket: {}\n", bucket));
        }
        Ok(output)
    }
}

fn result_label(outcome: &AppOutcome) -> String {
    match outcome.failed_stage {
        None => "ok".to_string(),
        Some(stage) => format!("failed at {}", stage),
    }
}

fn states_path(outcome: &AppOutcome) -> String {
    outcome
        .states
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" > ")
}

fn outcome_detail(outcome: &AppOutcome) -> &str {
    outcome
        .error
        .as_deref()
        .or(outcome.detail.as_deref())
        .unwrap_or(DEFAULT_MISSING_VALUE)
}
