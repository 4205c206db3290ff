//! Per-application workflow states and batch reports.
//!
//! Responsibilities:
//! - Track the states one application visits during a batch run.
//! - Collect per-application outcomes into a [`BatchReport`].
//!
//! Does NOT handle:
//! - Issuing requests (see `client/batch.rs`).
//!
//! Invariants:
//! - A workflow starts in `Pending` and ends in `Done` or `Failed`.
//! - `Failed` records the stage that was active when the error occurred.
//! - Outcomes keep inventory order.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::ClientError;

/// State of one application in a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowState {
    Pending,
    CheckExists,
    Create,
    Skip,
    BindHosts,
    BindApp,
    Done,
    Failed,
}

impl WorkflowState {
    /// Whether `next` may follow `self`.
    pub fn can_transition_to(self, next: WorkflowState) -> bool {
        use WorkflowState::*;

        matches!(
            (self, next),
            (Pending, CheckExists)
                | (Pending, BindHosts)
                | (CheckExists, Create)
                | (CheckExists, Skip)
                | (Create, BindHosts)
                | (Skip, BindHosts)
                | (Create, Done)
                | (Skip, Done)
                | (BindHosts, Done)
                | (Pending, BindApp)
                | (BindApp, Done)
        ) || (next == Failed && !matches!(self, Done | Failed))
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "PENDING",
            Self::CheckExists => "CHECK_EXISTS",
            Self::Create => "CREATE",
            Self::Skip => "SKIP",
            Self::BindHosts => "BIND_HOSTS",
            Self::BindApp => "BIND_APP",
            Self::Done => "DONE",
            Self::Failed => "FAILED",
        };
        f.write_str(s)
    }
}

/// Which batch operation produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BatchOperation {
    CreateServerclasses,
    AddHosts,
    BindApps,
    Sync,
}

impl fmt::Display for BatchOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::CreateServerclasses => "create-all",
            Self::AddHosts => "add-hosts",
            Self::BindApps => "bind-all",
            Self::Sync => "sync",
        };
        f.write_str(s)
    }
}

/// Result of processing one application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppOutcome {
    pub application: String,
    pub states: Vec<WorkflowState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_stage: Option<WorkflowState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AppOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }

    /// Final state reached.
    pub fn final_state(&self) -> WorkflowState {
        self.states.last().copied().unwrap_or(WorkflowState::Pending)
    }
}

/// State tracker for one application.
#[derive(Debug)]
pub(crate) struct Workflow {
    application: String,
    states: Vec<WorkflowState>,
    details: Vec<String>,
}

impl Workflow {
    pub(crate) fn new(application: &str) -> Self {
        Self {
            application: application.to_string(),
            states: vec![WorkflowState::Pending],
            details: Vec::new(),
        }
    }

    pub(crate) fn current(&self) -> WorkflowState {
        self.states.last().copied().unwrap_or(WorkflowState::Pending)
    }

    /// Move to `next`. Invalid transitions are a programming error and are
    /// logged, not panicked on.
    pub(crate) fn enter(&mut self, next: WorkflowState) {
        let current = self.current();
        if !current.can_transition_to(next) {
            tracing::warn!(
                application = %self.application,
                from = %current,
                to = %next,
                "Unexpected workflow transition"
            );
        }
        debug!(application = %self.application, from = %current, to = %next, "Workflow transition");
        self.states.push(next);
    }

    pub(crate) fn note(&mut self, detail: impl Into<String>) {
        self.details.push(detail.into());
    }

    fn detail(&self) -> Option<String> {
        (!self.details.is_empty()).then(|| self.details.join("; "))
    }

    pub(crate) fn done(mut self) -> AppOutcome {
        self.enter(WorkflowState::Done);
        AppOutcome {
            detail: self.detail(),
            application: self.application,
            states: self.states,
            failed_stage: None,
            error: None,
        }
    }

    pub(crate) fn fail(mut self, error: &ClientError) -> AppOutcome {
        let stage = self.current();
        self.enter(WorkflowState::Failed);
        tracing::warn!(
            application = %self.application,
            stage = %stage,
            error = %error,
            "Application failed"
        );
        AppOutcome {
            detail: self.detail(),
            application: self.application,
            states: self.states,
            failed_stage: Some(stage),
            error: Some(error.to_string()),
        }
    }
}

/// Per-application outcomes of a batch operation, in inventory order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub operation: BatchOperation,
    pub outcomes: Vec<AppOutcome>,
}

impl BatchReport {
    pub fn new(operation: BatchOperation) -> Self {
        Self {
            operation,
            outcomes: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, outcome: AppOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> impl Iterator<Item = &AppOutcome> {
        self.outcomes.iter().filter(|o| o.succeeded())
    }

    pub fn failed(&self) -> impl Iterator<Item = &AppOutcome> {
        self.outcomes.iter().filter(|o| !o.succeeded())
    }

    pub fn is_success(&self) -> bool {
        self.failed().next().is_none()
    }

    /// `Ok(self)` when every application succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::PartialBatchFailure`] when any application failed.
    pub fn into_result(self) -> Result<Self, ClientError> {
        let failed = self.failed().count();
        if failed == 0 {
            Ok(self)
        } else {
            Err(ClientError::PartialBatchFailure {
                failed,
                attempted: self.attempted(),
            })
        }
    }
}
