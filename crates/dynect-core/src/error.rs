use crate::types::Message;
use thiserror::Error;

/// Result type alias for DynECT operations
pub type Result<T> = std::result::Result<T, DynectError>;

/// Errors that can occur when talking to the DynECT API
#[derive(Error, Debug)]
pub enum DynectError {
    /// Configuration error (missing or empty credential fields, bad paths)
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP transport failed before a body could be read
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The response body was not parseable JSON
    #[error("malformed API response: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid base URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The API returned a non-success envelope
    #[error("API request failed:\n{}", format_msgs(.msgs))]
    Api {
        /// Diagnostic messages from the response envelope, in server order
        msgs: Vec<Message>,
    },

    /// A success envelope arrived without the payload the call requires
    #[error("API response missing data for {resource}")]
    MissingData {
        /// Description of the expected payload
        resource: String,
    },

    /// A zone resource path did not match `/REST/Zone/<name>/`
    #[error("unrecognized zone resource path: {0:?}")]
    InvalidZonePath(String),
}

impl DynectError {
    /// Returns the diagnostic messages if this is an API failure
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        match self {
            Self::Api { msgs } => msgs,
            _ => &[],
        }
    }

    /// Returns true if the error came from a non-success API envelope
    #[must_use]
    pub const fn is_api_failure(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}

fn format_msgs(msgs: &[Message]) -> String {
    let lines: Vec<String> = msgs.iter().map(ToString::to_string).collect();
    lines.join("\n")
}
