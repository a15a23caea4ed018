//! Lexical path normalization.
//!
//! This module provides the string-level building blocks of
//! canonicalization:
//! - Lexical cleaning (duplicate separators, `.` and `..` components)
//! - Joining path elements
//! - Expanding a leading tilde (`~`, `~user`) to a home directory
//! - Converting relative paths to absolute paths
//!
//! Nothing here touches the filesystem; symlinks are never resolved.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::path::environment::PathEnvironment;
use crate::path::platform::PlatformFamily;

/// Lexically clean a path.
///
/// Repeated separators collapse to one, `.` components vanish, and `..`
/// components remove the preceding component. A `..` that would climb above
/// the root of a rooted path is dropped; on a relative path it is kept. The
/// result never ends with a separator unless it is a root, and an empty
/// result becomes `.`. On Windows alternate separators become `\`.
///
/// # Examples
///
/// ```
/// use stfolder::path::normalize::clean;
/// use stfolder::path::PlatformFamily;
///
/// let unix = PlatformFamily::Unix;
/// assert_eq!(clean("/a/./b/../c//", unix), "/a/c");
/// assert_eq!(clean("/../a", unix), "/a");
/// assert_eq!(clean("../a/..", unix), "..");
/// assert_eq!(clean("", unix), ".");
///
/// let windows = PlatformFamily::Windows;
/// assert_eq!(clean("C:/a//b/", windows), r"C:\a\b");
/// assert_eq!(clean("C:", windows), "C:.");
/// ```
#[must_use]
pub fn clean(path: &str, platform: PlatformFamily) -> String {
    let vol_len = platform.volume_name_len(path);
    let volume = platform.from_slash(&path[..vol_len]).into_owned();
    let rest = &path[vol_len..];

    if rest.is_empty() {
        if vol_len > 1 && path.chars().take(2).all(|c| platform.is_separator(c)) {
            // Bare UNC volume
            return volume;
        }
        return volume + ".";
    }

    let rooted = rest.chars().next().is_some_and(|c| platform.is_separator(c));
    let mut segments: Vec<&str> = Vec::new();

    for segment in rest.split(|c| platform.is_separator(c)) {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else if !rooted {
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }

    let separator = platform.separator();
    let mut out = volume;
    if rooted {
        out.push(separator);
    }
    out.push_str(&segments.join(&separator.to_string()));
    if !rooted && segments.is_empty() {
        out.push('.');
    }
    out
}

/// Join path elements with the platform separator and clean the result.
///
/// Empty elements are ignored; joining only empty elements yields an empty
/// string.
///
/// # Examples
///
/// ```
/// use stfolder::path::normalize::join;
/// use stfolder::path::PlatformFamily;
///
/// assert_eq!(join(&["/home/alice", "sync/"], PlatformFamily::Unix), "/home/alice/sync");
/// assert_eq!(join(&["", ""], PlatformFamily::Unix), "");
/// ```
#[must_use]
pub fn join(parts: &[&str], platform: PlatformFamily) -> String {
    let separator = platform.separator().to_string();
    let joined = parts
        .iter()
        .copied()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(&separator);

    if joined.is_empty() {
        joined
    } else {
        clean(&joined, platform)
    }
}

/// Expand a leading tilde to a home directory.
///
/// `~` and `~/rest` use the current user's home directory; `~user` and
/// `~user/rest` use the named user's. Paths without a leading tilde are
/// returned unchanged (apart from separator conversion on Windows).
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if the required home directory is unknown.
///
/// # Examples
///
/// ```
/// use stfolder::path::normalize::expand_tilde;
/// use stfolder::path::{FixedEnvironment, PlatformFamily};
///
/// let env = FixedEnvironment::new().with_home("/home/alice");
/// let unix = PlatformFamily::Unix;
///
/// assert_eq!(expand_tilde("~", &env, unix).unwrap(), "/home/alice");
/// assert_eq!(expand_tilde("~/sync", &env, unix).unwrap(), "/home/alice/sync");
/// assert_eq!(expand_tilde("/abs", &env, unix).unwrap(), "/abs");
/// assert!(expand_tilde("~bob/sync", &env, unix).is_err());
/// ```
pub fn expand_tilde<E: PathEnvironment>(
    path: &str,
    env: &E,
    platform: PlatformFamily,
) -> Result<String> {
    let path = platform.from_slash(path);
    if !path.starts_with('~') {
        return Ok(path.into_owned());
    }
    let rest = &path[1..];

    let (user, tail) = match rest.find(|c| platform.is_separator(c)) {
        Some(idx) => (&rest[..idx], Some(&rest[idx + 1..])),
        None => (rest, None),
    };

    let home = if user.is_empty() {
        env.home_dir().ok_or_else(|| Error::InvalidPath {
            path: PathBuf::from(path.to_string()),
            reason: "cannot determine home directory".to_string(),
        })?
    } else {
        env.user_home_dir(user).ok_or_else(|| Error::InvalidPath {
            path: PathBuf::from(path.to_string()),
            reason: format!("cannot determine home directory of user {user}"),
        })?
    };

    match tail {
        None => Ok(home),
        Some(tail) => Ok(join(&[&home, tail], platform)),
    }
}

/// Make a path absolute against the current working directory.
///
/// Absolute paths are only cleaned. On Windows a rooted path without a
/// volume (`\data`) takes the working directory's volume, and a
/// drive-relative path (`D:data`) on another drive is rooted at that drive.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if the working directory is unavailable.
///
/// # Examples
///
/// ```
/// use stfolder::path::normalize::absolutize;
/// use stfolder::path::{FixedEnvironment, PlatformFamily};
///
/// let env = FixedEnvironment::new().with_current_dir("/work");
/// let unix = PlatformFamily::Unix;
///
/// assert_eq!(absolutize("sync/f1", &env, unix).unwrap(), "/work/sync/f1");
/// assert_eq!(absolutize("../f1", &env, unix).unwrap(), "/f1");
/// assert_eq!(absolutize("/data//f1/", &env, unix).unwrap(), "/data/f1");
/// ```
pub fn absolutize<E: PathEnvironment>(
    path: &str,
    env: &E,
    platform: PlatformFamily,
) -> Result<String> {
    if platform.is_absolute(path) {
        return Ok(clean(path, platform));
    }

    let cwd = env.current_dir().map_err(|e| Error::InvalidPath {
        path: PathBuf::from(path),
        reason: format!("cannot get current directory: {e}"),
    })?;

    let volume = platform.volume_name(path);
    if platform == PlatformFamily::Windows {
        let cwd_volume = platform.volume_name(&cwd);
        if volume.is_empty() && path.chars().next().is_some_and(|c| platform.is_separator(c)) {
            return Ok(clean(&format!("{cwd_volume}{path}"), platform));
        }
        if !volume.is_empty() && !platform.same_name(volume, cwd_volume) {
            let rest = &path[volume.len()..];
            return Ok(clean(&format!("{volume}\\{rest}"), platform));
        }
        if !volume.is_empty() {
            return Ok(join(&[&cwd, &path[volume.len()..]], platform));
        }
    }

    Ok(join(&[&cwd, path], platform))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::environment::FixedEnvironment;

    const UNIX: PlatformFamily = PlatformFamily::Unix;
    const WIN: PlatformFamily = PlatformFamily::Windows;

    fn env() -> FixedEnvironment {
        FixedEnvironment::new()
            .with_home("/home/alice")
            .with_user("bob", "/home/bob")
            .with_current_dir("/work")
    }

    fn win_env() -> FixedEnvironment {
        FixedEnvironment::new()
            .with_home(r"C:\Users\alice")
            .with_current_dir(r"C:\work")
    }

    #[test]
    fn test_clean_unix() {
        assert_eq!(clean("/a/./b/../c", UNIX), "/a/c");
        assert_eq!(clean("/a/b/../../c", UNIX), "/c");
        assert_eq!(clean("/", UNIX), "/");
        assert_eq!(clean("///", UNIX), "/");
        assert_eq!(clean("/a/b///", UNIX), "/a/b");
        assert_eq!(clean("a/b/", UNIX), "a/b");
        assert_eq!(clean(".", UNIX), ".");
        assert_eq!(clean("./", UNIX), ".");
    }

    #[test]
    fn test_clean_parent_above_root_is_dropped() {
        assert_eq!(clean("/a/../..", UNIX), "/");
        assert_eq!(clean("/../../x", UNIX), "/x");
    }

    #[test]
    fn test_clean_relative_keeps_leading_parent() {
        assert_eq!(clean("../../a", UNIX), "../../a");
        assert_eq!(clean("a/../../b", UNIX), "../b");
        assert_eq!(clean("a/..", UNIX), ".");
    }

    #[test]
    fn test_clean_windows() {
        assert_eq!(clean(r"C:\a\.\b\..\c\", WIN), r"C:\a\c");
        assert_eq!(clean(r"C:\", WIN), r"C:\");
        assert_eq!(clean(r"C:\..", WIN), r"C:\");
        assert_eq!(clean("c:/x/y", WIN), r"c:\x\y");
        assert_eq!(clean(r"\\host\share\a\..", WIN), r"\\host\share\");
        assert_eq!(clean("//host/share", WIN), r"\\host\share");
        assert_eq!(clean(r"\\?\C:\data\", WIN), r"\\?\C:\data");
    }

    #[test]
    fn test_clean_does_not_split_on_backslash_for_unix() {
        assert_eq!(clean(r"/a\b/", UNIX), r"/a\b");
    }

    #[test]
    fn test_join() {
        assert_eq!(join(&["/a", "b", "c/"], UNIX), "/a/b/c");
        assert_eq!(join(&["/a", "", "b"], UNIX), "/a/b");
        assert_eq!(join(&["/a", "../b"], UNIX), "/b");
        assert_eq!(join(&[r"C:\a", "b"], WIN), r"C:\a\b");
        assert_eq!(join(&[], UNIX), "");
    }

    #[test]
    fn test_expand_tilde_home() {
        assert_eq!(expand_tilde("~", &env(), UNIX).unwrap(), "/home/alice");
    }

    #[test]
    fn test_expand_tilde_with_path() {
        assert_eq!(
            expand_tilde("~/test", &env(), UNIX).unwrap(),
            "/home/alice/test"
        );
        assert_eq!(expand_tilde("~/", &env(), UNIX).unwrap(), "/home/alice");
    }

    #[test]
    fn test_expand_tilde_named_user() {
        assert_eq!(expand_tilde("~bob", &env(), UNIX).unwrap(), "/home/bob");
        assert_eq!(
            expand_tilde("~bob/music", &env(), UNIX).unwrap(),
            "/home/bob/music"
        );
    }

    #[test]
    fn test_expand_tilde_unknown_user() {
        let err = expand_tilde("~carol/x", &env(), UNIX).unwrap_err();
        assert!(err.to_string().contains("carol"));
    }

    #[test]
    fn test_expand_tilde_without_home() {
        let result = expand_tilde("~/x", &FixedEnvironment::new(), UNIX);
        assert!(matches!(result, Err(Error::InvalidPath { .. })));
    }

    #[test]
    fn test_expand_tilde_absolute_unchanged() {
        assert_eq!(
            expand_tilde("/absolute/path", &env(), UNIX).unwrap(),
            "/absolute/path"
        );
        assert_eq!(expand_tilde("a/~/b", &env(), UNIX).unwrap(), "a/~/b");
    }

    #[test]
    fn test_expand_tilde_windows() {
        assert_eq!(
            expand_tilde("~/Sync", &win_env(), WIN).unwrap(),
            r"C:\Users\alice\Sync"
        );
        assert_eq!(
            expand_tilde(r"~\Sync", &win_env(), WIN).unwrap(),
            r"C:\Users\alice\Sync"
        );
        assert_eq!(expand_tilde("D:/x", &win_env(), WIN).unwrap(), r"D:\x");
    }

    #[test]
    fn test_absolutize_relative() {
        assert_eq!(absolutize("rel/path", &env(), UNIX).unwrap(), "/work/rel/path");
        assert_eq!(absolutize(".", &env(), UNIX).unwrap(), "/work");
    }

    #[test]
    fn test_absolutize_absolute_is_cleaned() {
        assert_eq!(absolutize("/a/./b/", &env(), UNIX).unwrap(), "/a/b");
    }

    #[test]
    fn test_absolutize_without_working_dir() {
        let result = absolutize("rel", &FixedEnvironment::new(), UNIX);
        assert!(matches!(result, Err(Error::InvalidPath { .. })));
        // Absolute paths never need the working directory
        assert_eq!(
            absolutize("/abs", &FixedEnvironment::new(), UNIX).unwrap(),
            "/abs"
        );
    }

    #[test]
    fn test_absolutize_windows() {
        assert_eq!(absolutize("sync", &win_env(), WIN).unwrap(), r"C:\work\sync");
        assert_eq!(absolutize(r"\data", &win_env(), WIN).unwrap(), r"C:\data");
        assert_eq!(absolutize("c:sync", &win_env(), WIN).unwrap(), r"C:\work\sync");
        assert_eq!(absolutize("D:sync", &win_env(), WIN).unwrap(), r"D:\sync");
    }

    // Property-based tests
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn path_strategy() -> impl Strategy<Value = String> {
            prop::collection::vec("[a-zA-Z0-9_-]{1,10}", 1..=5)
                .prop_map(|parts| format!("/{}", parts.join("/")))
        }

        fn path_with_dots_strategy() -> impl Strategy<Value = String> {
            prop::collection::vec(
                prop_oneof![
                    Just(".".to_string()),
                    Just("..".to_string()),
                    Just(String::new()),
                    "[a-zA-Z0-9_-]{1,10}".prop_map(|s| s),
                ],
                1..=8,
            )
            .prop_map(|parts| format!("/{}", parts.join("/")))
        }

        proptest! {
            /// Cleaning is idempotent
            #[test]
            fn clean_idempotent(s in path_with_dots_strategy()) {
                let once = clean(&s, UNIX);
                prop_assert_eq!(clean(&once, UNIX), once.clone());
            }

            /// Cleaned rooted paths contain no `.` or `..` components
            #[test]
            fn clean_no_dot_components(s in path_with_dots_strategy()) {
                let cleaned = clean(&s, UNIX);
                for segment in cleaned.split('/') {
                    prop_assert_ne!(segment, ".");
                    prop_assert_ne!(segment, "..");
                }
            }

            /// Cleaned paths never end with a separator unless they are the root
            #[test]
            fn clean_no_trailing_separator(s in path_with_dots_strategy()) {
                let cleaned = clean(&s, UNIX);
                prop_assert!(cleaned == "/" || !cleaned.ends_with('/'));
            }

            /// Absolutization always produces absolute paths
            #[test]
            fn absolutize_always_absolute(s in "[a-zA-Z0-9_./-]{1,30}") {
                let result = absolutize(&s, &env(), UNIX).unwrap();
                prop_assert!(UNIX.is_absolute(&result));
            }

            /// Already-clean absolute paths pass through untouched
            #[test]
            fn absolutize_clean_absolute_unchanged(s in path_strategy()) {
                prop_assert_eq!(absolutize(&s, &env(), UNIX).unwrap(), s);
            }
        }
    }
}
