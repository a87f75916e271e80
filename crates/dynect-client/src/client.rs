//! Main DynECT API client implementation.

use dynect_core::{Credentials, DynectError, Envelope, Result, SessionData};
use reqwest::{Client as HttpClient, Method};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::session::Session;

/// The DynECT API base URL
const DEFAULT_BASE_URL: &str = "https://api2.dynect.net";

/// Default request timeout. The service imposes none of its own; without a
/// bound here an unresponsive server would hang the run indefinitely.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Unauthenticated DynECT API client.
///
/// [`DynectClient::login`] turns it into a [`Session`] carrying the token.
#[derive(Clone, Debug)]
pub struct DynectClient {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    http: HttpClient,
    base_url: String,
}

impl DynectClient {
    /// Create a client against the public API with default settings
    pub fn new() -> Result<Self> {
        DynectClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> DynectClientBuilder {
        DynectClientBuilder::new()
    }

    /// Create a session by posting credentials to the session endpoint.
    ///
    /// On a non-success envelope the diagnostics come back as
    /// [`DynectError::Api`]; nothing further should be attempted with this
    /// account until the cause is resolved.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session> {
        let envelope: Envelope<SessionData> = self
            .request(Method::POST, "/REST/Session/", credentials, "")
            .await?;
        let data = envelope.into_data("session token")?;
        debug!(version = data.version.as_deref(), "session established");
        Ok(Session::new(self.clone(), data.token))
    }

    /// Perform one API request and decode the response envelope.
    ///
    /// Every request carries `Content-Type: application/json` and an
    /// `Auth-Token` header, empty until a session exists. Failures are
    /// reported inside the envelope, not via the HTTP status, so the body is
    /// read and decoded regardless of status; a body that is not parseable
    /// JSON is its own error kind.
    pub(crate) async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        token: &str,
    ) -> Result<Envelope<T>>
    where
        T: DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = format!("{}{}", self.inner.base_url, path);
        debug!(method = %method, url = %url, "API request");

        let response = self
            .inner
            .http
            .request(method, &url)
            .header("Auth-Token", token)
            .json(body)
            .send()
            .await
            .map_err(|e| DynectError::Http(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| DynectError::Http(e.to_string()))?;
        debug!(status = %status, bytes = text.len(), "API response");

        serde_json::from_str(&text).map_err(DynectError::Json)
    }
}

/// Placeholder body for GET/DELETE calls; the API expects a JSON body on
/// every request.
pub(crate) fn empty_params() -> serde_json::Value {
    serde_json::json!({})
}

/// Builder for configuring a [`DynectClient`]
pub struct DynectClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl DynectClientBuilder {
    /// Create a builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("pnz/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the base URL (useful for testing and self-hosted endpoints)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client, validating the base URL
    pub fn build(self) -> Result<DynectClient> {
        let parsed =
            Url::parse(&self.base_url).map_err(|e| DynectError::InvalidUrl(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DynectError::InvalidUrl(format!(
                "unsupported scheme: {}",
                parsed.scheme()
            )));
        }

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| DynectError::Http(e.to_string()))?;

        Ok(DynectClient {
            inner: Arc::new(ClientInner {
                http,
                base_url: self.base_url.trim_end_matches('/').to_string(),
            }),
        })
    }
}

impl Default for DynectClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
