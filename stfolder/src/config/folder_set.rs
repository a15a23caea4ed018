//! Keyed collection of prepared folders.

use std::collections::BTreeMap;

use crate::config::schema::ConfigFile;
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};
use crate::folder::FolderConfiguration;

/// Validated folders keyed by id.
///
/// Folders are stored by value. Reading one back, or cloning the whole map,
/// yields records that share the cached canonical paths.
///
/// # Examples
///
/// ```
/// use stfolder::config::FolderSet;
/// use stfolder::FolderConfiguration;
///
/// let mut set = FolderSet::new();
/// set.insert(FolderConfiguration::new("docs", "/srv/docs")).unwrap();
///
/// let docs = set.get("docs").unwrap();
/// assert_eq!(docs.path(), set.folder_map()["docs"].path());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FolderSet {
    folders: BTreeMap<String, FolderConfiguration>,
}

impl FolderSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a configuration file and collect its folders.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure, or a duplicate-id error.
    pub fn from_config(config: ConfigFile) -> Result<Self> {
        ConfigValidator::validate(&config)?;
        let mut set = Self::new();
        for folder in config.folders {
            set.insert(folder)?;
        }
        Ok(set)
    }

    /// Validate `folder`, sort its devices, and add it.
    ///
    /// # Errors
    ///
    /// Returns a validation error, or [`Error::DuplicateFolder`] if the id
    /// is already present.
    pub fn insert(&mut self, mut folder: FolderConfiguration) -> Result<()> {
        ConfigValidator::validate_folder(&folder)?;
        if self.folders.contains_key(&folder.id) {
            return Err(Error::DuplicateFolder { id: folder.id });
        }
        folder.sort_devices();
        self.folders.insert(folder.id.clone(), folder);
        Ok(())
    }

    /// Look up a folder by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FolderConfiguration> {
        self.folders.get(id)
    }

    /// Look up a folder by id, failing if it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown id.
    pub fn require(&self, id: &str) -> Result<&FolderConfiguration> {
        self.get(id).ok_or_else(|| Error::NotFound {
            resource: format!("folder {id}"),
        })
    }

    /// Folders in id order.
    pub fn iter(&self) -> impl Iterator<Item = &FolderConfiguration> {
        self.folders.values()
    }

    /// Folder ids in order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.folders.keys().map(String::as_str)
    }

    /// Number of folders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    /// Whether the set holds no folders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// An independent copy of every folder, keyed by id.
    #[must_use]
    pub fn folder_map(&self) -> BTreeMap<String, FolderConfiguration> {
        self.folders.clone()
    }
}
