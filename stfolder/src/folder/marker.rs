//! The `.stfolder` marker file.
//!
//! A folder root carries an empty marker file so that a missing or unmounted
//! directory is never mistaken for an emptied one.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::logging::{DiagnosticSink, LogFacade};

/// Name of the marker file directly under a folder root.
pub const MARKER_NAME: &str = ".stfolder";

/// Filesystem operations performed after the marker is written.
pub trait DirectoryOps {
    /// Flush directory metadata to stable storage.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn sync_dir(&self, dir: &Path) -> io::Result<()>;

    /// Hide a file from directory listings.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn hide_file(&self, path: &Path) -> io::Result<()>;
}

/// [`DirectoryOps`] backed by the host operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDirectoryOps;

impl DirectoryOps for SystemDirectoryOps {
    fn sync_dir(&self, dir: &Path) -> io::Result<()> {
        sync_dir(dir)
    }

    fn hide_file(&self, path: &Path) -> io::Result<()> {
        hide_file(path)
    }
}

#[cfg(unix)]
fn sync_dir(dir: &Path) -> io::Result<()> {
    File::open(dir)?.sync_all()
}

// Directory handles cannot be flushed on Windows
#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(windows)]
#[allow(unsafe_code)]
fn hide_file(path: &Path) -> io::Result<()> {
    use windows::core::HSTRING;
    use windows::Win32::Storage::FileSystem::{
        GetFileAttributesW, SetFileAttributesW, FILE_ATTRIBUTE_HIDDEN, FILE_FLAGS_AND_ATTRIBUTES,
        INVALID_FILE_ATTRIBUTES,
    };

    let wide = HSTRING::from(path);
    let attrs = unsafe { GetFileAttributesW(&wide) };
    if attrs == INVALID_FILE_ATTRIBUTES {
        return Err(io::Error::last_os_error());
    }
    unsafe {
        SetFileAttributesW(
            &wide,
            FILE_FLAGS_AND_ATTRIBUTES(attrs | FILE_ATTRIBUTE_HIDDEN.0),
        )
    }
    .map_err(io::Error::other)
}

// A leading dot already hides the marker
#[cfg(not(windows))]
fn hide_file(_path: &Path) -> io::Result<()> {
    Ok(())
}

/// Location of the marker for a canonical folder path.
#[must_use]
pub fn marker_path(folder_path: &str) -> PathBuf {
    Path::new(folder_path).join(MARKER_NAME)
}

/// Whether the marker exists under `folder_path`.
#[must_use]
pub fn has_marker(folder_path: &str) -> bool {
    fs::metadata(marker_path(folder_path)).is_ok()
}

/// Create the marker under `folder_path` using the host filesystem.
///
/// # Errors
///
/// Returns [`Error::MarkerCreation`] if the marker file cannot be created.
pub fn create_marker(folder_path: &str) -> Result<()> {
    create_marker_with(folder_path, &SystemDirectoryOps, &LogFacade)
}

/// Create the marker under `folder_path` if it does not exist yet.
///
/// After the file is written the folder directory is synced; a sync failure
/// is reported to `sink` and otherwise ignored. Hiding the marker is best
/// effort.
///
/// # Errors
///
/// Returns [`Error::MarkerCreation`] if the marker file cannot be created.
///
/// # Examples
///
/// ```
/// use stfolder::folder::{create_marker_with, has_marker, SystemDirectoryOps};
/// use stfolder::CollectingSink;
///
/// let dir = tempfile::tempdir().unwrap();
/// let folder = format!("{}/", dir.path().display());
/// let sink = CollectingSink::new();
///
/// create_marker_with(&folder, &SystemDirectoryOps, &sink).unwrap();
/// assert!(has_marker(&folder));
/// ```
pub fn create_marker_with(
    folder_path: &str,
    ops: &dyn DirectoryOps,
    sink: &dyn DiagnosticSink,
) -> Result<()> {
    let marker = marker_path(folder_path);
    if fs::metadata(&marker).is_ok() {
        return Ok(());
    }

    File::create(&marker).map_err(|source| Error::MarkerCreation {
        path: marker.clone(),
        source,
    })?;

    let dir = marker.parent().unwrap_or_else(|| Path::new(folder_path));
    if let Err(e) = ops.sync_dir(dir) {
        sink.emit(&format!("fsync {} failed: {e}", dir.display()));
    }
    if let Err(e) = ops.hide_file(&marker) {
        log::debug!("Could not hide {}: {e}", marker.display());
    }

    Ok(())
}
