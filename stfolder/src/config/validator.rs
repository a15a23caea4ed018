//! Configuration validation.
//!
//! Validation covers the identity and path fields only. Tuning knobs and
//! versioning parameters are stored as given.

use std::collections::HashSet;

use crate::config::schema::ConfigFile;
use crate::error::{Error, Result};
use crate::folder::FolderConfiguration;

/// Validates folders and configuration files.
///
/// # Examples
///
/// ```
/// use stfolder::config::{ConfigFile, ConfigValidator};
///
/// ConfigValidator::validate(&ConfigFile::default()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate every folder in a configuration file and reject repeated ids.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found, in file order.
    pub fn validate(config: &ConfigFile) -> Result<()> {
        let mut seen = HashSet::new();
        for folder in &config.folders {
            Self::validate_folder(folder)?;
            if !seen.insert(folder.id.as_str()) {
                return Err(Error::DuplicateFolder {
                    id: folder.id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Validate a single folder.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the id or path is empty, the id
    /// contains a null byte, or a device appears twice.
    pub fn validate_folder(folder: &FolderConfiguration) -> Result<()> {
        Self::validate_id(&folder.id)?;

        if folder.raw_path.trim().is_empty() {
            return Err(Error::Validation {
                field: format!("folders.{}.path", folder.id),
                message: "folder path cannot be empty".into(),
            });
        }

        let mut devices = HashSet::new();
        for device in &folder.devices {
            if device.device_id.is_empty() {
                return Err(Error::Validation {
                    field: format!("folders.{}.devices", folder.id),
                    message: "device id cannot be empty".into(),
                });
            }
            if !devices.insert(&device.device_id) {
                return Err(Error::Validation {
                    field: format!("folders.{}.devices", folder.id),
                    message: format!("device {} is listed more than once", device.device_id),
                });
            }
        }

        Ok(())
    }

    fn validate_id(id: &str) -> Result<()> {
        if id.trim().is_empty() {
            return Err(Error::Validation {
                field: "folders.id".into(),
                message: "folder id cannot be empty".into(),
            });
        }
        if id.contains('\0') {
            return Err(Error::Validation {
                field: "folders.id".into(),
                message: "folder id cannot contain null bytes".into(),
            });
        }
        Ok(())
    }
}
