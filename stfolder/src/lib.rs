#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # stfolder
//!
//! A library for resolving synchronized-folder paths.
//!
//! It turns user-supplied folder and temp-directory paths, which may be
//! relative or start with a tilde, into absolute canonical strings. These are
//! computed once per folder record and read back cheaply from any copy.
//!
//! ## Core Types
//!
//! - [`FolderConfiguration`]: A folder record with cached canonical paths
//! - [`PathCanonicalizer`](path::PathCanonicalizer) and [`PlatformFamily`](path::PlatformFamily): Path conventions
//! - [`FolderDeviceConfiguration`] and [`DeviceId`]: Devices a folder is shared with
//! - [`IntervalPolicy`]: Clamping of interval settings
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`], [`LogLevel`] and [`DiagnosticSink`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use stfolder::path::{FixedEnvironment, PathCanonicalizer, PlatformFamily};
//! use stfolder::FolderConfiguration;
//!
//! let canonicalizer = PathCanonicalizer::new(
//!     PlatformFamily::Unix,
//!     FixedEnvironment::new().with_current_dir("/srv"),
//! );
//!
//! let mut folder = FolderConfiguration::default();
//! folder.id = "docs".to_string();
//! folder.raw_path = "docs".to_string();
//! folder.temp_dir_path = "/tmp/elsewhere".to_string();
//! folder.prepare_with(&canonicalizer);
//!
//! assert_eq!(folder.path(), "/srv/docs/");
//! // Temp dirs outside the folder fall back to the folder itself
//! assert_eq!(folder.temp_path(), "/srv/docs/");
//! ```

pub mod config;
pub mod error;
pub mod folder;
pub mod interval;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{ConfigFile, ConfigLoader, ConfigValidator, FolderSet};
pub use error::{Error, Result};
pub use folder::{
    DeviceId, FolderConfiguration, FolderDeviceConfiguration, FolderType, PullOrder,
    VersioningConfiguration,
};
pub use interval::{IntervalPolicy, MAX_RESCAN_INTERVAL_S};
pub use logging::{init_logger, CollectingSink, DiagnosticSink, LogFacade, LogLevel, Logger};
pub use path::{PathRelationship, PlatformFamily};
