//! Authenticated session operations.

use dynect_core::{Envelope, Result, Zone};
use reqwest::Method;
use tracing::debug;

use crate::client::{empty_params, DynectClient};

/// An authenticated API session.
///
/// Created by [`DynectClient::login`]. Owns the session token and sends it
/// verbatim as the `Auth-Token` header on every call. [`Session::logout`]
/// consumes the session, so no call can be issued after teardown.
#[derive(Debug)]
pub struct Session {
    client: DynectClient,
    token: String,
}

impl Session {
    pub(crate) fn new(client: DynectClient, token: String) -> Self {
        Self { client, token }
    }

    /// The session token issued by the login call
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// List the account's zones, in server order.
    ///
    /// The endpoint returns resource paths of the form
    /// `/REST/Zone/<name>/`; a path of any other shape fails the whole call
    /// rather than producing an empty name.
    pub async fn list_zones(&self) -> Result<Vec<Zone>> {
        let envelope: Envelope<Vec<String>> = self
            .client
            .request(Method::GET, "/REST/Zone/", &empty_params(), &self.token)
            .await?;
        let paths = envelope.into_data("zone list")?;
        debug!(zones = paths.len(), "zone list received");

        paths
            .iter()
            .map(|path| Zone::from_resource_path(path))
            .collect()
    }

    /// List the nodes of one zone, in server order
    pub async fn list_nodes(&self, zone: &Zone) -> Result<Vec<String>> {
        let path = format!("/REST/NodeList/{zone}/");
        let envelope: Envelope<Vec<String>> = self
            .client
            .request(Method::GET, &path, &empty_params(), &self.token)
            .await?;
        envelope.into_data("node list")
    }

    /// Delete the session, invalidating the token
    pub async fn logout(self) -> Result<()> {
        let envelope: Envelope<serde_json::Value> = self
            .client
            .request(
                Method::DELETE,
                "/REST/Session/",
                &empty_params(),
                &self.token,
            )
            .await?;
        envelope.into_unit()
    }
}
