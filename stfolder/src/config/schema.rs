//! Configuration file schema.

use serde::{Deserialize, Serialize};

use crate::folder::FolderConfiguration;

/// Top-level structure of a folders configuration file.
///
/// Each folder is prepared as it is read, so the paths of a loaded file are
/// already canonical.
///
/// # Examples
///
/// ```
/// use stfolder::config::ConfigFile;
///
/// let config: ConfigFile = serde_yaml::from_str(
///     "folders:\n  - id: docs\n    path: /srv/docs\n",
/// ).unwrap();
/// assert_eq!(config.folders.len(), 1);
/// assert_eq!(config.folders[0].id, "docs");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Configured folders, in file order.
    #[serde(default)]
    pub folders: Vec<FolderConfiguration>,
}
