//! Serverclass methods for [`DeploymentClient`].
//!
//! # What this module handles:
//! - Listing and creating serverclasses
//! - Adding a single host under a filter key
//! - Replacing the allow list from an ordered host list

use tracing::info;

use crate::allowlist::{FilterKey, reconcile};
use crate::client::DeploymentClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{AddHostsResult, AddResult, CreateOutcome};

impl DeploymentClient {
    /// List serverclass names.
    pub async fn list_serverclasses(&self) -> Result<Vec<String>> {
        endpoints::list_serverclasses(&self.conn.http, &self.conn.base_url, &self.session).await
    }

    /// Create a serverclass; an existing one is not an error.
    pub async fn create_serverclass(&self, name: &str) -> Result<CreateOutcome> {
        endpoints::create_serverclass(&self.conn.http, &self.conn.base_url, &self.session, name)
            .await
    }

    /// Add one host to a serverclass under `key`.
    pub async fn add_host_to_serverclass(
        &self,
        serverclass: &str,
        key: &FilterKey,
        host: &str,
    ) -> Result<AddResult> {
        endpoints::add_host_to_serverclass(
            &self.conn.http,
            &self.conn.base_url,
            &self.session,
            serverclass,
            key,
            host,
        )
        .await
    }

    /// Set the allow list of `serverclass` to `hosts`, in order.
    ///
    /// An empty host list sends nothing.
    pub async fn add_all_hosts<S: AsRef<str>>(
        &self,
        serverclass: &str,
        hosts: &[S],
    ) -> Result<AddHostsResult> {
        let allow_list = reconcile(hosts);

        if allow_list.is_empty() {
            info!(%serverclass, "No hosts listed, leaving allow list unchanged");
        } else {
            endpoints::set_allow_list(
                &self.conn.http,
                &self.conn.base_url,
                &self.session,
                serverclass,
                &allow_list,
            )
            .await?;
        }

        Ok(AddHostsResult {
            serverclass: serverclass.to_string(),
            allow_list,
        })
    }
}
