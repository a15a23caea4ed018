//! Configuration files for synchronized folders.
//!
//! A configuration file is a YAML document with a `folders` list. Keys use
//! the camelCase spellings (`path`, `tempDirPath`, `rescanIntervalS`,
//! `devices[].deviceID`, ...). Every folder is prepared while it is read.
//!
//! # Examples
//!
//! ```
//! use stfolder::config::{ConfigLoader, FolderSet};
//!
//! let config = ConfigLoader::from_yaml_str(
//!     "folders:\n  - id: docs\n    path: /srv/docs\n    rescanIntervalS: -1\n",
//! ).unwrap();
//! let set = FolderSet::from_config(config).unwrap();
//!
//! let docs = set.require("docs").unwrap();
//! assert_eq!(docs.rescan_interval_s, 0);
//! ```

pub mod folder_set;
pub mod loader;
pub mod schema;
pub mod validator;

pub use folder_set::FolderSet;
pub use loader::ConfigLoader;
pub use schema::ConfigFile;
pub use validator::ConfigValidator;
