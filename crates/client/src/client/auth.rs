//! Login on a [`Connection`].

use crate::auth::{Credentials, Session};
use crate::client::Connection;
use crate::endpoints;
use crate::error::Result;

impl Connection {
    /// Exchange credentials for a session.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError::AuthFailed`] for rejected credentials,
    /// transport failures, or a response without a usable session key.
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<Session> {
        endpoints::login(&self.http, &self.base_url, credentials).await
    }
}
