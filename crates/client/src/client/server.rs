//! Server configuration methods for [`DeploymentClient`].

use crate::client::DeploymentClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::ReloadStatus;

impl DeploymentClient {
    /// Reload the deployment server so new serverclass settings take effect.
    pub async fn reload(&self) -> Result<ReloadStatus> {
        endpoints::reload(&self.conn.http, &self.conn.base_url, &self.session).await
    }
}
