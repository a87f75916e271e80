//! Command implementations.

pub mod list;

use std::path::PathBuf;
use std::time::Duration;

use dynect_client::DynectClient;

/// Shared context for commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// API base URL
    pub api_url: String,

    /// Per-request timeout
    pub timeout: Duration,

    /// Whether node lines were requested (zone lines are always printed)
    pub nodes: bool,

    /// Listing destination; stdout when absent
    pub file: Option<PathBuf>,
}

impl Context {
    /// Create a client against the configured endpoint.
    pub fn client(&self) -> anyhow::Result<DynectClient> {
        let client = DynectClient::builder()
            .base_url(self.api_url.as_str())
            .timeout(self.timeout)
            .build()?;
        Ok(client)
    }
}
