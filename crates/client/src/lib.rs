//! Splunk deployment server REST client.
//!
//! This crate authenticates against the management API, manages
//! serverclasses and their allow lists, binds deployment applications,
//! triggers reloads, and drives those operations in bulk from an inventory.

mod allowlist;
mod auth;
pub mod batch;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use allowlist::{AllowList, FilterKey, FilterKind, InvalidFilterKey, reconcile};
pub use auth::{Credentials, Session};
pub use batch::{AppOutcome, BatchOperation, BatchReport, WorkflowState};
pub use client::builder::ConnectionBuilder;
pub use client::{Connection, DeploymentClient};
pub use error::{ClientError, Result};
pub use models::{
    AddHostsResult, AddResult, BindResult, CreateOutcome, DeploymentApp, ReloadStatus,
};
