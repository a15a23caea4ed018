//! Directory path fixing.
//!
//! Configured folder and temp-directory paths are stored in one canonical
//! directory form so that `/a/b`, `/a/b/` and `/a/b///` all compare equal,
//! and so that a bare drive like `C:` means its root.

use crate::path::normalize::clean;
use crate::path::platform::PlatformFamily;

/// Normalize a directory path to a single canonical directory form.
///
/// The path is cleaned as if a separator had been appended to it, which
/// collapses any number of trailing separators and turns a bare drive into
/// its root. On Unix the result then ends with exactly one separator, so a
/// trailing symlink is later entered rather than named; on Windows no
/// trailing separator is added.
///
/// Callers must not pass an empty path.
///
/// # Examples
///
/// ```
/// use stfolder::path::fix_path;
/// use stfolder::path::PlatformFamily;
///
/// assert_eq!(fix_path("/a/b///", PlatformFamily::Unix), "/a/b/");
/// assert_eq!(fix_path("/a/b", PlatformFamily::Unix), "/a/b/");
/// assert_eq!(fix_path("/", PlatformFamily::Unix), "/");
///
/// assert_eq!(fix_path("C:", PlatformFamily::Windows), r"C:\");
/// assert_eq!(fix_path(r"C:\somedir\", PlatformFamily::Windows), r"C:\somedir");
/// ```
#[must_use]
pub fn fix_path(path: &str, platform: PlatformFamily) -> String {
    debug_assert!(!path.is_empty(), "fix_path called with an empty path");

    let mut fixed = clean(&format!("{path}{}", platform.separator()), platform);

    if platform.keeps_trailing_separator() && !platform.ends_with_separator(&fixed) {
        fixed.push(platform.separator());
    }
    fixed
}
