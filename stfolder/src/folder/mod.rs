//! Synchronized folder records.
//!
//! [`FolderConfiguration`] holds one folder's settings and the canonical
//! paths derived from them. The supporting types describe who the folder is
//! shared with ([`FolderDeviceConfiguration`]), how old versions are kept
//! ([`VersioningConfiguration`]) and where its marker file lives
//! ([`marker`]).

pub mod configuration;
pub mod device;
pub mod marker;
pub mod types;
pub mod versioning;

pub use configuration::FolderConfiguration;
pub use device::{compare_devices, sort_devices, DeviceId, FolderDeviceConfiguration};
pub use marker::{
    create_marker, create_marker_with, has_marker, marker_path, DirectoryOps,
    SystemDirectoryOps, MARKER_NAME,
};
pub use types::{FolderType, PullOrder};
pub use versioning::VersioningConfiguration;
