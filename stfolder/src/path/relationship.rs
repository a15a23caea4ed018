//! Path relationship checking.
//!
//! This module computes lexical relative paths and, from them, how two paths
//! relate in the directory hierarchy. It is what keeps a folder's temp
//! directory inside the folder.

use std::fmt;

use crate::path::normalize::clean;
use crate::path::platform::PlatformFamily;

/// Compute `target` relative to `base`.
///
/// Both paths are cleaned first. Returns `None` when no relative path
/// exists: one path is rooted and the other is not, the volumes differ, or
/// `base` keeps `..` components that `target` lacks. Windows comparisons are
/// case-insensitive.
///
/// # Examples
///
/// ```
/// use stfolder::path::relative;
/// use stfolder::path::PlatformFamily;
///
/// let unix = PlatformFamily::Unix;
/// assert_eq!(relative("/data/f1/", "/data/f1/.tmp/", unix).as_deref(), Some(".tmp"));
/// assert_eq!(relative("/data/f1/", "/data/f1/", unix).as_deref(), Some("."));
/// assert_eq!(relative("/data/f1/", "/other/tmp/", unix).as_deref(), Some("../../other/tmp"));
/// assert_eq!(relative("/data", "relative", unix), None);
/// ```
#[must_use]
pub fn relative(base: &str, target: &str, platform: PlatformFamily) -> Option<String> {
    let base_volume = platform.from_slash(platform.volume_name(base)).into_owned();
    let target_volume = platform.from_slash(platform.volume_name(target)).into_owned();
    let base = clean(base, platform);
    let target = clean(target, platform);

    if platform.same_name(&base, &target) {
        return Some(".".to_string());
    }

    let mut base_rest = &base[base_volume.len()..];
    let target_rest = &target[target_volume.len()..];
    if base_rest == "." {
        base_rest = "";
    }

    let base_rooted = base_rest.starts_with(platform.separator())
        || (base_rest.is_empty() && base_volume.len() > 2);
    let target_rooted = target_rest.starts_with(platform.separator());
    if base_rooted != target_rooted || !platform.same_name(&base_volume, &target_volume) {
        return None;
    }

    let split = |s: &str| -> Vec<String> {
        s.split(platform.separator())
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .map(str::to_string)
            .collect()
    };
    let base_parts = split(base_rest);
    let target_parts = split(target_rest);

    let common = base_parts
        .iter()
        .zip(&target_parts)
        .take_while(|(b, t)| platform.same_name(b, t))
        .count();

    let climbs = &base_parts[common..];
    if climbs.iter().any(|part| part == "..") {
        return None;
    }

    let mut parts: Vec<&str> = climbs.iter().map(|_| "..").collect();
    parts.extend(target_parts[common..].iter().map(String::as_str));

    if parts.is_empty() {
        Some(".".to_string())
    } else {
        Some(parts.join(&platform.separator().to_string()))
    }
}

/// Whether `target` lies within the subtree rooted at `base` (or is `base`).
///
/// A target is contained when a relative path from `base` exists and does
/// not begin with a `..` component. Directory names that merely start with
/// two dots, like `..cache`, are ordinary children.
#[must_use]
pub fn is_contained(base: &str, target: &str, platform: PlatformFamily) -> bool {
    relative(base, target, platform).is_some_and(|rel| {
        rel.split(platform.separator())
            .next()
            .is_some_and(|first| first != "..")
    })
}

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use stfolder::path::{PathRelationship, PlatformFamily};
///
/// let unix = PlatformFamily::Unix;
/// assert_eq!(
///     PathRelationship::between("/home/user/", "/home/user/project/", unix),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are the same after cleaning.
    Same,

    /// Neither path contains the other, or they cannot be compared at all
    /// (different volumes, or one of them is relative).
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// Trailing separators, repeated separators and `.` components do not
    /// matter.
    ///
    /// # Examples
    ///
    /// ```
    /// use stfolder::path::{PathRelationship, PlatformFamily};
    ///
    /// let unix = PlatformFamily::Unix;
    /// assert_eq!(PathRelationship::between("/a", "/a/b", unix), PathRelationship::Ancestor);
    /// assert_eq!(PathRelationship::between("/a/b", "/a", unix), PathRelationship::Descendant);
    /// assert_eq!(PathRelationship::between("/a/", "/a", unix), PathRelationship::Same);
    /// assert_eq!(PathRelationship::between("/a", "/b", unix), PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &str, path2: &str, platform: PlatformFamily) -> Self {
        match relative(path1, path2, platform) {
            Some(rel) if rel == "." => Self::Same,
            Some(_) if is_contained(path1, path2, platform) => Self::Ancestor,
            Some(_) if is_contained(path2, path1, platform) => Self::Descendant,
            _ => Self::Unrelated,
        }
    }

    /// Check if the relationship is hierarchical (not unrelated).
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Check if `path` is within `directory` (descendant or same).
    ///
    /// # Examples
    ///
    /// ```
    /// use stfolder::path::{PathRelationship, PlatformFamily};
    ///
    /// let unix = PlatformFamily::Unix;
    /// assert!(PathRelationship::is_within("/data/f1/.tmp/", "/data/f1/", unix));
    /// assert!(PathRelationship::is_within("/data/f1/", "/data/f1/", unix));
    /// assert!(!PathRelationship::is_within("/other/", "/data/f1/", unix));
    /// ```
    #[must_use]
    pub fn is_within(path: &str, directory: &str, platform: PlatformFamily) -> bool {
        is_contained(directory, path, platform)
    }
}

impl fmt::Display for PathRelationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ancestor => write!(f, "ancestor"),
            Self::Descendant => write!(f, "descendant"),
            Self::Same => write!(f, "same"),
            Self::Unrelated => write!(f, "unrelated"),
        }
    }
}
