//! Devices a folder is shared with.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, totally ordered device identifier.
///
/// # Examples
///
/// ```
/// use stfolder::DeviceId;
///
/// let a = DeviceId::new("AAAA-BBBB");
/// let b = DeviceId::new("CCCC-DDDD");
/// assert!(a < b);
/// assert_eq!(a.as_str(), "AAAA-BBBB");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    /// Wrap an identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the zero (empty) identifier.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeviceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for DeviceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One device a folder is shared with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FolderDeviceConfiguration {
    /// The device the folder is shared with.
    #[serde(rename = "deviceID")]
    pub device_id: DeviceId,

    /// The device that introduced this share, if any.
    #[serde(
        rename = "introducedBy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub introduced_by: Option<DeviceId>,
}

impl FolderDeviceConfiguration {
    /// Share with `device_id`, introduced by nobody.
    #[must_use]
    pub fn new(device_id: impl Into<DeviceId>) -> Self {
        Self {
            device_id: device_id.into(),
            introduced_by: None,
        }
    }

    /// Record the introducing device.
    #[must_use]
    pub fn introduced_by(mut self, introducer: impl Into<DeviceId>) -> Self {
        self.introduced_by = Some(introducer.into());
        self
    }
}

/// Order two device associations by device id.
#[must_use]
pub fn compare_devices(a: &FolderDeviceConfiguration, b: &FolderDeviceConfiguration) -> Ordering {
    a.device_id.cmp(&b.device_id)
}

/// Sort device associations ascending by device id.
///
/// The sort is stable: entries with equal ids keep their relative order.
///
/// # Examples
///
/// ```
/// use stfolder::folder::{sort_devices, FolderDeviceConfiguration};
///
/// let mut devices = vec![
///     FolderDeviceConfiguration::new("D3"),
///     FolderDeviceConfiguration::new("D1"),
///     FolderDeviceConfiguration::new("D2"),
/// ];
/// sort_devices(&mut devices);
/// let ids: Vec<_> = devices.iter().map(|d| d.device_id.as_str()).collect();
/// assert_eq!(ids, ["D1", "D2", "D3"]);
/// ```
pub fn sort_devices(devices: &mut [FolderDeviceConfiguration]) {
    devices.sort_by(compare_devices);
}
