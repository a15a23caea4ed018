//! Path canonicalization.
//!
//! A canonical path is absolute and formatted for direct filesystem use on
//! its platform family:
//! - Unix: ends with exactly one `/`, so a trailing symlink is entered
//! - Windows: non-UNC absolute paths carry the `\\?\` long-path prefix
//!
//! Canonicalization never fails. Each step that cannot complete leaves the
//! path as it was and the pipeline carries on, so a misconfigured path still
//! yields a usable string.

use crate::path::environment::{PathEnvironment, SystemEnvironment};
use crate::path::fixer::fix_path;
use crate::path::normalize::{absolutize, expand_tilde};
use crate::path::platform::PlatformFamily;

/// Prefix enabling long path support on Windows.
pub const LONG_PATH_PREFIX: &str = r"\\?\";

/// Canonicalizes raw path strings for one platform family.
///
/// # Examples
///
/// ```
/// use stfolder::path::{FixedEnvironment, PathCanonicalizer, PlatformFamily};
///
/// let env = FixedEnvironment::new()
///     .with_home("/home/alice")
///     .with_current_dir("/work");
/// let canonicalizer = PathCanonicalizer::new(PlatformFamily::Unix, env);
///
/// assert_eq!(canonicalizer.canonicalize("~/Sync"), "/home/alice/Sync/");
/// assert_eq!(canonicalizer.canonicalize("photos"), "/work/photos/");
/// assert_eq!(canonicalizer.canonicalize("/data/f1/"), "/data/f1/");
/// assert_eq!(canonicalizer.canonicalize(""), "");
/// ```
#[derive(Debug, Clone)]
pub struct PathCanonicalizer<E = SystemEnvironment> {
    platform: PlatformFamily,
    environment: E,
}

impl PathCanonicalizer<SystemEnvironment> {
    /// A canonicalizer for the host platform and process environment.
    #[must_use]
    pub fn system() -> Self {
        Self::new(PlatformFamily::host(), SystemEnvironment)
    }
}

impl Default for PathCanonicalizer<SystemEnvironment> {
    fn default() -> Self {
        Self::system()
    }
}

impl<E: PathEnvironment> PathCanonicalizer<E> {
    /// Create a canonicalizer for `platform` reading from `environment`.
    #[must_use]
    pub fn new(platform: PlatformFamily, environment: E) -> Self {
        Self {
            platform,
            environment,
        }
    }

    /// The platform family paths are formatted for.
    #[must_use]
    pub fn platform(&self) -> PlatformFamily {
        self.platform
    }

    /// The environment home and working directories are read from.
    #[must_use]
    pub fn environment(&self) -> &E {
        &self.environment
    }

    /// Normalize a directory path; see [`fix_path`].
    #[must_use]
    pub fn fix(&self, path: &str) -> String {
        fix_path(path, self.platform)
    }

    /// Canonicalize a raw path string.
    ///
    /// 1. An empty path stays empty.
    /// 2. A leading tilde is expanded; on failure the path is kept.
    /// 3. A relative path is made absolute against the working directory;
    ///    on failure the path is kept.
    /// 4. Windows: an absolute path not starting with `\\` gets the
    ///    [`LONG_PATH_PREFIX`].
    /// 5. Unix: a separator is appended if missing.
    #[must_use]
    pub fn canonicalize(&self, raw: &str) -> String {
        if raw.is_empty() {
            return String::new();
        }

        let platform = self.platform;
        let mut cleaned = raw.to_string();

        match expand_tilde(&cleaned, &self.environment, platform) {
            Ok(expanded) => cleaned = expanded,
            Err(e) => log::debug!("Keeping {cleaned:?} unexpanded: {e}"),
        }

        // The string check is far cheaper than resolving the working directory
        if !platform.is_absolute(&cleaned) {
            match absolutize(&cleaned, &self.environment, platform) {
                Ok(absolute) => cleaned = absolute,
                Err(e) => log::debug!("Keeping {cleaned:?} relative: {e}"),
            }
        }

        match platform {
            PlatformFamily::Windows => {
                if platform.is_absolute(&cleaned) && !cleaned.starts_with(r"\\") {
                    cleaned.insert_str(0, LONG_PATH_PREFIX);
                }
            }
            PlatformFamily::Unix => {
                if !platform.ends_with_separator(&cleaned) {
                    cleaned.push(platform.separator());
                }
            }
        }

        cleaned
    }
}

/// Canonicalize `raw` for the host platform and process environment.
///
/// # Examples
///
/// ```
/// use stfolder::path::canonicalize;
///
/// assert_eq!(canonicalize(""), "");
/// let canonical = canonicalize("some/relative/dir");
/// assert_eq!(canonicalize(&canonical), canonical);
/// ```
#[must_use]
pub fn canonicalize(raw: &str) -> String {
    PathCanonicalizer::system().canonicalize(raw)
}
