//! Data models for deployment server API responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod applications;
pub mod auth;
pub mod common;
pub mod server;
pub mod serverclasses;

pub use applications::{BindResult, DeploymentApp, DeploymentAppContent};
pub use auth::LoginResponse;
pub use common::{Entry, IgnoredContent, MessageType, SplunkMessage, SplunkMessages, SplunkResponse};
pub use server::{ReloadContent, ReloadStatus};
pub use serverclasses::{AddHostsResult, AddResult, CreateOutcome};
