//! Credentials file loading.

use anyhow::{Context as _, Result};
use dynect_core::Credentials;
use serde::Deserialize;
use std::path::Path;

/// Raw key-value credentials file. The key names are the ones the original
/// provider tooling used: `cn` (customer name), `un` (user name), `pw`
/// (password).
#[derive(Debug, Default, Deserialize)]
struct CredentialsFile {
    #[serde(default)]
    cn: Option<String>,
    #[serde(default)]
    un: Option<String>,
    #[serde(default)]
    pw: Option<String>,
}

/// Load and validate credentials.
///
/// A missing file, missing key, or empty value is fatal here, before any
/// network call is made.
pub fn load_credentials(path: &Path) -> Result<Credentials> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("unable to read credentials file {}", path.display()))?;

    let raw: CredentialsFile = toml::from_str(&content)
        .with_context(|| format!("unable to parse credentials file {}", path.display()))?;

    let credentials = Credentials::new(
        raw.cn.unwrap_or_default(),
        raw.un.unwrap_or_default(),
        raw.pw.unwrap_or_default(),
    )
    .with_context(|| format!("incomplete credentials in {}", path.display()))?;

    Ok(credentials)
}
