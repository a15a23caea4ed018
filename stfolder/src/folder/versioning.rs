//! File versioning settings.
//!
//! The folder core only stores these; interpreting the strategy and its
//! parameters belongs to the versioning subsystem.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Versioning strategy and its parameters.
///
/// The parameter map is always present: a missing or `null` map in a
/// configuration file reads as empty.
///
/// # Examples
///
/// ```
/// use stfolder::VersioningConfiguration;
///
/// let versioning: VersioningConfiguration =
///     serde_yaml::from_str("type: simple\nparams:\n  keep: \"5\"\n").unwrap();
/// assert!(versioning.is_enabled());
/// assert_eq!(versioning.param("keep"), Some("5"));
///
/// let off: VersioningConfiguration = serde_yaml::from_str("params: null\n").unwrap();
/// assert!(!off.is_enabled());
/// assert!(off.params.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VersioningConfiguration {
    /// Strategy name; empty disables versioning.
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Strategy parameters.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub params: BTreeMap<String, String>,
}

impl VersioningConfiguration {
    /// A strategy with no parameters.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            params: BTreeMap::new(),
        }
    }

    /// Add a parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Whether a strategy is configured.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.kind.is_empty()
    }

    /// Look up one parameter.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<BTreeMap<String, String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
