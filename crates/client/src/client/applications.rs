//! Deployment application methods for [`DeploymentClient`].

use crate::client::DeploymentClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{BindResult, DeploymentApp};

impl DeploymentClient {
    /// List deployment applications.
    pub async fn list_deployment_apps(&self) -> Result<Vec<DeploymentApp>> {
        endpoints::list_deployment_apps(&self.conn.http, &self.conn.base_url, &self.session).await
    }

    /// Bind `application` to `serverclass`.
    pub async fn bind_serverclass_to_app(
        &self,
        application: &str,
        serverclass: &str,
    ) -> Result<BindResult> {
        endpoints::bind_serverclass_to_app(
            &self.conn.http,
            &self.conn.base_url,
            &self.session,
            application,
            serverclass,
        )
        .await
    }
}
