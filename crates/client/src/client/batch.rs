//! Inventory-driven batch operations for [`DeploymentClient`].
//!
//! # What this module handles:
//! - Creating every inventory serverclass
//! - Setting every serverclass allow list
//! - Binding every application to its serverclass
//! - The full per-application sync workflow
//!
//! # Invariants
//! - Applications are processed strictly in inventory order, one request at a time.
//! - A failing application is recorded and the next one is still processed.
//! - Serverclasses are named after their application.

use splunk_ds_config::{AppEntry, Inventory};
use tracing::info;

use crate::batch::{AppOutcome, BatchOperation, BatchReport, Workflow, WorkflowState};
use crate::client::DeploymentClient;
use crate::error::Result;
use crate::models::CreateOutcome;

impl DeploymentClient {
    /// Create a serverclass for every application. Existing ones count as success.
    pub async fn create_all_serverclasses(&self, inventory: &Inventory) -> BatchReport {
        let mut report = BatchReport::new(BatchOperation::CreateServerclasses);
        for app in inventory {
            let mut wf = Workflow::new(&app.name);
            let outcome = match self.check_and_create(&mut wf, app).await {
                Ok(()) => wf.done(),
                Err(e) => wf.fail(&e),
            };
            report.push(outcome);
        }
        log_summary(&report);
        report
    }

    /// Set each application's serverclass allow list from its host list.
    pub async fn add_hosts_to_serverclasses(&self, inventory: &Inventory) -> BatchReport {
        let mut report = BatchReport::new(BatchOperation::AddHosts);
        for app in inventory {
            let mut wf = Workflow::new(&app.name);
            let outcome = match self.bind_hosts(&mut wf, app).await {
                Ok(()) => wf.done(),
                Err(e) => wf.fail(&e),
            };
            report.push(outcome);
        }
        log_summary(&report);
        report
    }

    /// Bind every application to the serverclass of the same name.
    pub async fn bind_all(&self, inventory: &Inventory) -> BatchReport {
        let mut report = BatchReport::new(BatchOperation::BindApps);
        for app in inventory {
            let mut wf = Workflow::new(&app.name);
            wf.enter(WorkflowState::BindApp);
            let outcome = match self.bind_serverclass_to_app(&app.name, &app.name).await {
                Ok(bound) => {
                    wf.note(format!("bound to serverclass {}", bound.serverclass));
                    wf.done()
                }
                Err(e) => wf.fail(&e),
            };
            report.push(outcome);
        }
        log_summary(&report);
        report
    }

    /// Run the full workflow for every application:
    /// `PENDING -> CHECK_EXISTS -> {CREATE | SKIP} -> BIND_HOSTS -> DONE`.
    pub async fn sync(&self, inventory: &Inventory) -> BatchReport {
        let mut report = BatchReport::new(BatchOperation::Sync);
        for app in inventory {
            report.push(self.sync_app(app).await);
        }
        log_summary(&report);
        report
    }

    async fn sync_app(&self, app: &AppEntry) -> AppOutcome {
        let mut wf = Workflow::new(&app.name);
        if let Err(e) = self.check_and_create(&mut wf, app).await {
            return wf.fail(&e);
        }
        match self.bind_hosts(&mut wf, app).await {
            Ok(()) => wf.done(),
            Err(e) => wf.fail(&e),
        }
    }

    /// CHECK_EXISTS is answered by the create call itself.
    async fn check_and_create(&self, wf: &mut Workflow, app: &AppEntry) -> Result<()> {
        wf.enter(WorkflowState::CheckExists);
        match self.create_serverclass(&app.name).await? {
            CreateOutcome::Created(name) => {
                wf.enter(WorkflowState::Create);
                wf.note(format!("created serverclass {name}"));
            }
            CreateOutcome::AlreadyExists(name) => {
                wf.enter(WorkflowState::Skip);
                wf.note(format!("serverclass {name} already exists"));
            }
        }
        Ok(())
    }

    async fn bind_hosts(&self, wf: &mut Workflow, app: &AppEntry) -> Result<()> {
        wf.enter(WorkflowState::BindHosts);
        let result = self.add_all_hosts(&app.name, app.hosts.as_slice()).await?;
        wf.note(format!("{} allow-list entries", result.allow_list.len()));
        Ok(())
    }
}

fn log_summary(report: &BatchReport) {
    info!(
        operation = %report.operation,
        attempted = report.attempted(),
        failed = report.failed().count(),
        "Batch finished"
    );
}
