//! Deployment server client.
//!
//! # Submodules
//! - [`builder`]: connection construction and configuration
//! - `auth`: login, producing a [`Session`]
//! - `serverclasses`, `applications`, `server`: one method per remote action
//! - `batch`: inventory-driven workflows
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Retries or session renewal; every request is sent once
//!
//! # Invariants
//! - A [`DeploymentClient`] can only exist with a [`Session`], so no dependent
//!   call is made before authentication succeeds.
//! - Requests are awaited one at a time.

pub mod builder;

mod applications;
mod auth;
mod batch;
mod server;
mod serverclasses;

use crate::auth::{Credentials, Session};
use crate::error::Result;

/// HTTP connection settings for one deployment server.
#[derive(Debug, Clone)]
pub struct Connection {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
}

impl Connection {
    /// Create a new connection builder.
    pub fn builder() -> builder::ConnectionBuilder {
        builder::ConnectionBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Authenticated client for deployment server operations.
#[derive(Debug, Clone)]
pub struct DeploymentClient {
    pub(crate) conn: Connection,
    pub(crate) session: Session,
}

impl DeploymentClient {
    /// Wrap a connection and a session obtained from [`Connection::authenticate`].
    pub fn new(conn: Connection, session: Session) -> Self {
        Self { conn, session }
    }

    /// Authenticate and build a client in one step.
    pub async fn login(conn: Connection, credentials: &Credentials) -> Result<Self> {
        let session = conn.authenticate(credentials).await?;
        Ok(Self::new(conn, session))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.conn.base_url
    }
}
