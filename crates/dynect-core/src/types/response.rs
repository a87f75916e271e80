use serde::Deserialize;

use crate::error::{DynectError, Result};
use crate::types::Message;

/// Outcome reported by a response envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    /// The request completed
    Success,
    /// The request failed; `msgs` carries the diagnostics
    Failure,
    /// The request was accepted but has not completed
    Incomplete,
}

impl ApiStatus {
    /// Returns true only for [`ApiStatus::Success`]
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Generic response envelope: `{ status, data, msgs }`
///
/// Every DynECT endpoint wraps its payload in this shape, including error
/// responses, which arrive with a non-success `status` and a populated
/// `msgs` list rather than a bare HTTP error.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    /// Request outcome
    pub status: ApiStatus,

    /// Endpoint-specific payload; may be absent or null on failure
    #[serde(default)]
    pub data: Option<T>,

    /// Diagnostic messages, usually empty on success
    #[serde(default)]
    pub msgs: Vec<Message>,
}

impl<T> Envelope<T> {
    /// Extracts the payload of a success envelope.
    ///
    /// A non-success status becomes [`DynectError::Api`] carrying the
    /// envelope's diagnostics; a success envelope without a payload becomes
    /// [`DynectError::MissingData`] instead of a null-field access.
    pub fn into_data(self, resource: &str) -> Result<T> {
        if self.status.is_success() {
            self.data.ok_or_else(|| DynectError::MissingData {
                resource: resource.to_string(),
            })
        } else {
            Err(DynectError::Api { msgs: self.msgs })
        }
    }

    /// Checks the status of an envelope whose payload does not matter
    pub fn into_unit(self) -> Result<()> {
        if self.status.is_success() {
            Ok(())
        } else {
            Err(DynectError::Api { msgs: self.msgs })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_yields_data() {
        let envelope: Envelope<Vec<String>> =
            serde_json::from_str(r#"{"status": "success", "data": ["a", "b"], "msgs": []}"#)
                .unwrap();
        assert_eq!(envelope.into_data("test").unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn failure_envelope_yields_api_error_with_msgs() {
        let envelope: Envelope<Vec<String>> = serde_json::from_str(
            r#"{
                "status": "failure",
                "data": null,
                "msgs": [
                    {"LVL": "ERROR", "ERR_CD": "INVALID_DATA", "SOURCE": "API-B", "INFO": "bad request"},
                    {"LVL": "INFO", "ERR_CD": null, "SOURCE": "BLL", "INFO": "token: not found"}
                ]
            }"#,
        )
        .unwrap();

        let err = envelope.into_data("test").unwrap_err();
        let msgs = err.messages();
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs[0].info, "bad request");
        assert_eq!(msgs[1].info, "token: not found");
    }

    #[test]
    fn success_envelope_without_data_is_missing_data() {
        let envelope: Envelope<Vec<String>> =
            serde_json::from_str(r#"{"status": "success"}"#).unwrap();
        assert!(matches!(
            envelope.into_data("zone list"),
            Err(DynectError::MissingData { .. })
        ));
    }

    #[test]
    fn incomplete_status_is_not_success() {
        let envelope: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"status": "incomplete", "msgs": []}"#).unwrap();
        assert!(envelope.into_unit().is_err());
    }
}
