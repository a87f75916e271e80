use serde::{Deserialize, Serialize};

use crate::error::{DynectError, Result};

/// Account credentials, serialized verbatim as the session creation body
#[derive(Clone, Serialize)]
pub struct Credentials {
    /// Customer (account) name
    pub customer_name: String,
    /// User name within the account
    pub user_name: String,
    /// Password
    pub password: String,
}

impl Credentials {
    /// Builds a credential set, rejecting empty fields.
    ///
    /// All three fields are required by the session endpoint; catching an
    /// empty one here keeps a doomed login from ever reaching the network.
    pub fn new(
        customer_name: impl Into<String>,
        user_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let creds = Self {
            customer_name: customer_name.into(),
            user_name: user_name.into(),
            password: password.into(),
        };

        if creds.customer_name.is_empty() {
            return Err(DynectError::Config(
                "customer name (cn) required for API login".to_string(),
            ));
        }
        if creds.user_name.is_empty() {
            return Err(DynectError::Config(
                "user name (un) required for API login".to_string(),
            ));
        }
        if creds.password.is_empty() {
            return Err(DynectError::Config(
                "password (pw) required for API login".to_string(),
            ));
        }

        Ok(creds)
    }
}

// Keep the password out of debug output and logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("customer_name", &self.customer_name)
            .field("user_name", &self.user_name)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Payload of a successful session creation
#[derive(Debug, Clone, Deserialize)]
pub struct SessionData {
    /// Opaque session token, sent back as the `Auth-Token` header
    pub token: String,

    /// API version reported by the server
    #[serde(default)]
    pub version: Option<String>,
}
