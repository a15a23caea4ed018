//! The folder configuration record.
//!
//! A [`FolderConfiguration`] carries the user's raw folder and temp-dir paths
//! together with their canonical forms. The canonical forms are computed once
//! by [`FolderConfiguration::prepare`], which runs on construction and on
//! deserialization, and are then read back without touching the filesystem.
//! Clones share the cached values.
//!
//! Mutating `raw_path` or `temp_dir_path` does not refresh the cache; call
//! `prepare` again afterwards.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;
use crate::folder::device::{sort_devices, DeviceId, FolderDeviceConfiguration};
use crate::folder::marker;
use crate::folder::types::{FolderType, PullOrder};
use crate::folder::versioning::VersioningConfiguration;
use crate::interval::IntervalPolicy;
use crate::logging::{DiagnosticSink, LogFacade};
use crate::path::{is_contained, PathCanonicalizer, PathEnvironment};

/// A synchronized folder.
///
/// # Examples
///
/// ```
/// use stfolder::path::{FixedEnvironment, PathCanonicalizer, PlatformFamily};
/// use stfolder::FolderConfiguration;
///
/// let canonicalizer = PathCanonicalizer::new(
///     PlatformFamily::Unix,
///     FixedEnvironment::new().with_home("/home/alice"),
/// );
///
/// let mut folder = FolderConfiguration::default();
/// folder.id = "photos".to_string();
/// folder.raw_path = "~/Photos".to_string();
/// folder.temp_dir_path = "~/Photos/.tmp".to_string();
/// folder.prepare_with(&canonicalizer);
///
/// assert_eq!(folder.path(), "/home/alice/Photos/");
/// assert_eq!(folder.temp_path(), "/home/alice/Photos/.tmp/");
/// ```
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(remote = "Self", rename_all = "camelCase", deny_unknown_fields)]
pub struct FolderConfiguration {
    /// Identifier, unique within a configuration.
    pub id: String,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Folder path as configured. May be relative or start with a tilde.
    #[serde(rename = "path", default)]
    pub raw_path: String,

    /// Send/receive mode.
    #[serde(rename = "type", default)]
    pub folder_type: FolderType,

    /// Devices the folder is shared with.
    #[serde(default)]
    pub devices: Vec<FolderDeviceConfiguration>,

    /// Seconds between full rescans.
    #[serde(default)]
    pub rescan_interval_s: i32,

    /// Ignore permission bits when comparing files.
    #[serde(default)]
    pub ignore_perms: bool,

    /// Normalize file name encoding automatically.
    #[serde(default)]
    pub auto_normalize: bool,

    /// Minimum free disk space, in percent.
    #[serde(default)]
    pub min_disk_free_pct: f64,

    /// Versioning strategy.
    #[serde(default)]
    pub versioning: VersioningConfiguration,

    /// Files handled concurrently.
    #[serde(default)]
    pub copiers: i32,

    /// Blocks fetched concurrently.
    #[serde(default)]
    pub pullers: i32,

    /// Hashing routines; less than one means one per core.
    #[serde(default)]
    pub hashers: i32,

    /// Pull order.
    #[serde(default)]
    pub order: PullOrder,

    /// Ignore deletes from remote devices.
    #[serde(default)]
    pub ignore_delete: bool,

    /// Seconds between scan progress updates.
    #[serde(default)]
    pub scan_progress_interval_s: i32,

    /// Seconds to sleep between pulls.
    #[serde(default)]
    pub puller_sleep_s: i32,

    /// Seconds to pause after a failed pull.
    #[serde(default)]
    pub puller_pause_s: i32,

    /// Conflict copies to keep; negative keeps all.
    #[serde(default)]
    pub max_conflicts: i32,

    /// Do not create sparse files.
    #[serde(default)]
    pub disable_sparse_files: bool,

    /// Do not exchange temporary indexes.
    #[serde(default)]
    pub disable_temp_indexes: bool,

    /// Fsync files after writing.
    #[serde(default)]
    pub fsync: bool,

    /// Do not compute weak hashes.
    #[serde(default)]
    pub disable_weak_hash: bool,

    /// Folder is paused.
    #[serde(default)]
    pub paused: bool,

    /// Temp directory as configured. Empty means the folder itself.
    #[serde(default)]
    pub temp_dir_path: String,

    /// Legacy read-only flag; migrated to [`FolderType::SendOnly`] on load.
    #[serde(rename = "ro", default, skip_serializing)]
    pub deprecated_read_only: bool,

    #[serde(skip)]
    cached_path: String,

    #[serde(skip)]
    cached_temp_path: String,
}

/// Canonical folder and temp paths derived from the raw fields.
struct DerivedPaths {
    path: String,
    temp_path: String,
}

fn derive_paths<E: PathEnvironment>(
    raw_path: &str,
    temp_dir_path: &str,
    canonicalizer: &PathCanonicalizer<E>,
) -> DerivedPaths {
    let path = canonicalizer.canonicalize(raw_path);
    let mut temp_path = if temp_dir_path.is_empty() {
        path.clone()
    } else {
        canonicalizer.canonicalize(temp_dir_path)
    };

    // Temp files outside the folder tree go to the folder root instead
    if !temp_path.is_empty() && !is_contained(&path, &temp_path, canonicalizer.platform()) {
        log::debug!("Temp dir {temp_path:?} is not inside {path:?}; using the folder root");
        temp_path.clone_from(&path);
    }

    DerivedPaths { path, temp_path }
}

impl FolderConfiguration {
    /// Create a prepared folder using the host platform and environment.
    ///
    /// # Examples
    ///
    /// ```
    /// use stfolder::FolderConfiguration;
    ///
    /// let folder = FolderConfiguration::new("default", "");
    /// assert_eq!(folder.path(), "");
    /// assert_eq!(folder.temp_path(), "");
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, raw_path: impl Into<String>) -> Self {
        Self::new_with(id, raw_path, &PathCanonicalizer::system())
    }

    /// Create a prepared folder using `canonicalizer`.
    #[must_use]
    pub fn new_with<E: PathEnvironment>(
        id: impl Into<String>,
        raw_path: impl Into<String>,
        canonicalizer: &PathCanonicalizer<E>,
    ) -> Self {
        let mut folder = Self {
            id: id.into(),
            raw_path: raw_path.into(),
            ..Self::default()
        };
        folder.prepare_with(canonicalizer);
        folder
    }

    /// Recompute cached paths using the host platform and environment.
    pub fn prepare(&mut self) {
        self.prepare_with(&PathCanonicalizer::system());
    }

    /// Normalize the raw paths, recompute the cached paths, and clamp the
    /// rescan interval. Running it again changes nothing.
    pub fn prepare_with<E: PathEnvironment>(&mut self, canonicalizer: &PathCanonicalizer<E>) {
        if !self.raw_path.is_empty() {
            self.raw_path = canonicalizer.fix(&self.raw_path);
        }
        if !self.temp_dir_path.is_empty() {
            self.temp_dir_path = canonicalizer.fix(&self.temp_dir_path);
        }

        let derived = derive_paths(&self.raw_path, &self.temp_dir_path, canonicalizer);
        self.cached_path = derived.path;
        self.cached_temp_path = derived.temp_path;

        self.rescan_interval_s = IntervalPolicy::RESCAN.clamp(self.rescan_interval_s);
    }

    /// Whether the cached paths are missing for a non-empty raw path.
    #[must_use]
    pub fn needs_preparation(&self) -> bool {
        self.cached_path.is_empty() && !self.raw_path.is_empty()
    }

    /// Canonical absolute folder path; empty when no path is configured.
    ///
    /// Reports through the `log` facade if the folder was never prepared.
    #[must_use]
    pub fn path(&self) -> Cow<'_, str> {
        self.path_with(&LogFacade, &PathCanonicalizer::system())
    }

    /// Canonical folder path, reporting an unprepared record to `sink` and
    /// recomputing it with `canonicalizer`.
    #[must_use]
    pub fn path_with<E: PathEnvironment>(
        &self,
        sink: &dyn DiagnosticSink,
        canonicalizer: &PathCanonicalizer<E>,
    ) -> Cow<'_, str> {
        if self.needs_preparation() {
            sink.emit(&format!(
                "uncached path call for folder {:?}; prepare() was not run",
                self.id
            ));
            return Cow::Owned(self.recompute(canonicalizer).path);
        }
        Cow::Borrowed(&self.cached_path)
    }

    /// Directory for temporary files: the canonical temp dir when it lies
    /// inside the folder, otherwise the folder path.
    ///
    /// Reports through the `log` facade if the folder was never prepared.
    #[must_use]
    pub fn temp_path(&self) -> Cow<'_, str> {
        self.temp_path_with(&LogFacade, &PathCanonicalizer::system())
    }

    /// Temp directory, reporting a missing cached value for a configured
    /// folder path or temp dir to `sink` and recomputing it with
    /// `canonicalizer`.
    #[must_use]
    pub fn temp_path_with<E: PathEnvironment>(
        &self,
        sink: &dyn DiagnosticSink,
        canonicalizer: &PathCanonicalizer<E>,
    ) -> Cow<'_, str> {
        let temp_uncached = self.cached_temp_path.is_empty() && !self.temp_dir_path.is_empty();
        if temp_uncached || self.needs_preparation() {
            sink.emit(&format!(
                "uncached temp path call for folder {:?}; prepare() was not run",
                self.id
            ));
            return Cow::Owned(self.recompute(canonicalizer).temp_path);
        }
        Cow::Borrowed(&self.cached_temp_path)
    }

    fn recompute<E: PathEnvironment>(&self, canonicalizer: &PathCanonicalizer<E>) -> DerivedPaths {
        let fix = |raw: &str| {
            if raw.is_empty() {
                String::new()
            } else {
                canonicalizer.fix(raw)
            }
        };
        derive_paths(
            &fix(&self.raw_path),
            &fix(&self.temp_dir_path),
            canonicalizer,
        )
    }

    /// Whether the folder marker exists.
    #[must_use]
    pub fn has_marker(&self) -> bool {
        marker::has_marker(&self.path())
    }

    /// Create the folder marker if it is missing.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MarkerCreation`] if the marker cannot be
    /// written.
    pub fn create_marker(&self) -> Result<()> {
        marker::create_marker(&self.path())
    }

    /// Human-readable name: the id, or the quoted label followed by the id.
    ///
    /// # Examples
    ///
    /// ```
    /// use stfolder::FolderConfiguration;
    ///
    /// let mut folder = FolderConfiguration::new("abcd-1234", "");
    /// assert_eq!(folder.description(), "abcd-1234");
    ///
    /// folder.label = Some("Photos".to_string());
    /// assert_eq!(folder.description(), "\"Photos\" (abcd-1234)");
    /// ```
    #[must_use]
    pub fn description(&self) -> String {
        match self.label.as_deref() {
            None | Some("") => self.id.clone(),
            Some(label) => format!("{label:?} ({})", self.id),
        }
    }

    /// Ids of the devices the folder is shared with, in list order.
    #[must_use]
    pub fn device_ids(&self) -> Vec<DeviceId> {
        self.devices.iter().map(|d| d.device_id.clone()).collect()
    }

    /// Sort the device list by device id.
    pub fn sort_devices(&mut self) {
        sort_devices(&mut self.devices);
    }
}

impl<'de> Deserialize<'de> for FolderConfiguration {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut folder = FolderConfiguration::deserialize(deserializer)?;
        if folder.deprecated_read_only {
            folder.folder_type = FolderType::SendOnly;
            folder.deprecated_read_only = false;
        }
        folder.prepare();
        Ok(folder)
    }
}

impl Serialize for FolderConfiguration {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        FolderConfiguration::serialize(self, serializer)
    }
}
