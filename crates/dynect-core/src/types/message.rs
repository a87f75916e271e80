use serde::{Deserialize, Serialize};

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Unrecoverable server-side failure
    Fatal,
    /// The request failed
    Error,
    /// The request succeeded with caveats
    Warn,
    /// Informational only
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fatal => write!(f, "FATAL"),
            Self::Error => write!(f, "ERROR"),
            Self::Warn => write!(f, "WARN"),
            Self::Info => write!(f, "INFO"),
        }
    }
}

/// One diagnostic entry from a response envelope's `msgs` list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Severity level
    #[serde(rename = "LVL")]
    pub level: Severity,

    /// Machine-readable error code, absent on informational entries
    #[serde(rename = "ERR_CD", default)]
    pub error_code: Option<String>,

    /// Subsystem the message originated from
    #[serde(rename = "SOURCE", default)]
    pub source: String,

    /// Human-readable description
    #[serde(rename = "INFO", default)]
    pub info: String,
}

impl std::fmt::Display for Message {
    /// Renders `LVL: (ERR_CD) SOURCE - INFO`, omitting the code when absent
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: ", self.level)?;
        if let Some(code) = self.error_code.as_deref().filter(|c| !c.is_empty()) {
            write!(f, "({code}) ")?;
        }
        write!(f, "{} - {}", self.source, self.info)
    }
}
