//! Platform path conventions.
//!
//! Canonical folder paths are plain strings whose formatting depends on the
//! platform family: Unix-like systems use `/` and keep a trailing separator,
//! Windows-like systems use `\`, accept `/` as an alternate separator, and
//! carry drive letters or UNC volumes. Every string operation in this crate
//! takes the family as an explicit parameter so both conventions can be
//! exercised on any host.

use std::borrow::Cow;
use std::fmt;

/// The family of path conventions a string is interpreted under.
///
/// # Examples
///
/// ```
/// use stfolder::path::PlatformFamily;
///
/// assert_eq!(PlatformFamily::Unix.separator(), '/');
/// assert_eq!(PlatformFamily::Windows.separator(), '\\');
/// assert!(PlatformFamily::Windows.is_absolute(r"C:\data"));
/// assert!(!PlatformFamily::Unix.is_absolute("data"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformFamily {
    /// POSIX-style paths: `/` separator, trailing separator kept on folders.
    Unix,
    /// Windows-style paths: `\` separator, volumes, `\\?\` long-path prefix.
    Windows,
}

impl PlatformFamily {
    /// The family of the platform this crate was compiled for.
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    /// The primary directory separator.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Unix => '/',
            Self::Windows => '\\',
        }
    }

    /// Whether `c` separates directory components under this family.
    #[must_use]
    pub const fn is_separator(self, c: char) -> bool {
        match self {
            Self::Unix => c == '/',
            Self::Windows => c == '\\' || c == '/',
        }
    }

    /// Whether canonical folder paths end with a separator.
    #[must_use]
    pub const fn keeps_trailing_separator(self) -> bool {
        matches!(self, Self::Unix)
    }

    /// Length in bytes of the leading volume name.
    ///
    /// Always zero on Unix. On Windows this is the drive (`C:`) or the UNC
    /// `\\host\share` prefix; the long-path form `\\?\C:` parses as a UNC
    /// volume with host `?`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stfolder::path::PlatformFamily;
    ///
    /// assert_eq!(PlatformFamily::Windows.volume_name_len(r"C:\data"), 2);
    /// assert_eq!(PlatformFamily::Windows.volume_name_len(r"\\host\share\x"), 12);
    /// assert_eq!(PlatformFamily::Windows.volume_name_len(r"\\?\C:\data"), 6);
    /// assert_eq!(PlatformFamily::Unix.volume_name_len("/data"), 0);
    /// ```
    #[must_use]
    pub fn volume_name_len(self, path: &str) -> usize {
        if self == Self::Unix {
            return 0;
        }

        let bytes = path.as_bytes();
        let is_slash = |b: u8| b == b'\\' || b == b'/';

        if bytes.len() < 2 {
            return 0;
        }
        if bytes[1] == b':' && bytes[0].is_ascii_alphabetic() {
            return 2;
        }

        // \\host\share
        let len = bytes.len();
        if len >= 5 && is_slash(bytes[0]) && is_slash(bytes[1]) && !is_slash(bytes[2]) && bytes[2] != b'.'
        {
            let mut n = 3;
            while n < len - 1 {
                if is_slash(bytes[n]) {
                    n += 1;
                    if is_slash(bytes[n]) || bytes[n] == b'.' {
                        return 0;
                    }
                    while n < len && !is_slash(bytes[n]) {
                        n += 1;
                    }
                    return n;
                }
                n += 1;
            }
        }

        0
    }

    /// The leading volume name of `path` (empty on Unix).
    #[must_use]
    pub fn volume_name(self, path: &str) -> &str {
        &path[..self.volume_name_len(path)]
    }

    /// Whether `path` is absolute under this family.
    ///
    /// A Windows path is absolute when it is UNC-rooted or carries a volume
    /// followed by a separator; `C:data` is drive-relative.
    #[must_use]
    pub fn is_absolute(self, path: &str) -> bool {
        match self {
            Self::Unix => path.starts_with('/'),
            Self::Windows => {
                let vol_len = self.volume_name_len(path);
                if vol_len == 0 {
                    return false;
                }
                let mut chars = path.chars();
                if chars.next().is_some_and(|c| self.is_separator(c))
                    && chars.next().is_some_and(|c| self.is_separator(c))
                {
                    return true;
                }
                path[vol_len..]
                    .chars()
                    .next()
                    .is_some_and(|c| self.is_separator(c))
            }
        }
    }

    /// Whether `path` ends with a separator.
    #[must_use]
    pub fn ends_with_separator(self, path: &str) -> bool {
        path.chars().next_back().is_some_and(|c| self.is_separator(c))
    }

    /// Replace alternate separators with the primary one.
    #[must_use]
    pub fn from_slash(self, path: &str) -> Cow<'_, str> {
        match self {
            Self::Windows if path.contains('/') => Cow::Owned(path.replace('/', "\\")),
            _ => Cow::Borrowed(path),
        }
    }

    /// Compare two path segments or volumes.
    ///
    /// Windows file names are case-insensitive.
    #[must_use]
    pub fn same_name(self, a: &str, b: &str) -> bool {
        match self {
            Self::Unix => a == b,
            Self::Windows => a == b || a.to_lowercase() == b.to_lowercase(),
        }
    }
}

impl Default for PlatformFamily {
    fn default() -> Self {
        Self::host()
    }
}

impl fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unix => write!(f, "unix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}
