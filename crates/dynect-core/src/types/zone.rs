use crate::error::{DynectError, Result};

/// A DNS zone under the account.
///
/// The zone listing endpoint returns resource paths rather than bare names;
/// a `Zone` can only be built by parsing one, so an ill-shaped path is
/// caught at the API boundary instead of flowing through as an empty name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Zone(String);

const ZONE_PATH_PREFIX: &str = "/REST/Zone/";

impl Zone {
    /// Extracts the zone name from a path of the form `/REST/Zone/<name>/`.
    ///
    /// Anything else, including a missing trailing slash or an empty name,
    /// is a data error.
    pub fn from_resource_path(path: &str) -> Result<Self> {
        path.strip_prefix(ZONE_PATH_PREFIX)
            .and_then(|rest| rest.strip_suffix('/'))
            .filter(|name| !name.is_empty())
            .map(|name| Self(name.to_string()))
            .ok_or_else(|| DynectError::InvalidZonePath(path.to_string()))
    }

    /// The zone name, e.g. `example.com`
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
