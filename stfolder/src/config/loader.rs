//! Configuration file discovery and loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::folder_set::FolderSet;
use crate::config::schema::ConfigFile;
use crate::error::{Error, Result};

/// Directory under the home directory holding the default configuration.
pub const CONFIG_DIR_NAME: &str = ".stfolder";

/// File name of the default configuration.
pub const CONFIG_FILE_NAME: &str = "folders.yaml";

/// Loads folder configuration files.
///
/// # Examples
///
/// ```
/// use stfolder::config::ConfigLoader;
///
/// let config = ConfigLoader::from_yaml_str("folders: []\n").unwrap();
/// assert!(config.folders.is_empty());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Parse a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the YAML is invalid or does not
    /// match the schema.
    pub fn from_yaml_str(text: &str) -> Result<ConfigFile> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the file does not exist, an error if it
    /// cannot be read, and [`Error::Configuration`] if the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<ConfigFile> {
        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::NotFound {
                resource: format!("configuration file {}", path.display()),
            },
            _ => Error::InvalidPath {
                path: path.to_path_buf(),
                reason: format!("Failed to read configuration file: {e}"),
            },
        })?;

        log::debug!("Loaded configuration from {}", path.display());
        Self::from_yaml_str(&contents)
    }

    /// Load a file and collect its validated folders.
    ///
    /// # Errors
    ///
    /// Returns any load error, or the first validation failure.
    pub fn load_folder_set(path: &Path) -> Result<FolderSet> {
        FolderSet::from_config(Self::load_file(path)?)
    }

    /// Default configuration path, `~/.stfolder/folders.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        let home = home::home_dir().ok_or_else(|| Error::Validation {
            field: "home_directory".into(),
            message: "Cannot determine home directory".into(),
        })?;
        Ok(home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }
}
