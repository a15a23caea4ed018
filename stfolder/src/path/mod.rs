//! Path handling for synchronized folders.
//!
//! This module turns user-supplied folder paths into canonical strings that
//! can be cached on a folder configuration and compared directly.
//!
//! # Key Concepts
//!
//! ## Fixing
//!
//! [`fix_path`] gives a directory path exactly one spelling: separators are
//! collapsed, `.` and `..` are resolved lexically, and on Unix the path ends
//! with a single `/`.
//!
//! ## Canonicalization
//!
//! [`PathCanonicalizer`] expands a leading tilde, makes the path absolute,
//! and applies the platform convention: a trailing `/` on Unix, the `\\?\`
//! long-path prefix on Windows. It never fails; a step that cannot complete
//! leaves the path unchanged.
//!
//! ## Platform families
//!
//! All string operations take a [`PlatformFamily`], and home and working
//! directories come from a [`PathEnvironment`], so both conventions can be
//! tested on any host.
//!
//! # Examples
//!
//! ```
//! use stfolder::path::{fix_path, FixedEnvironment, PathCanonicalizer, PlatformFamily};
//!
//! let env = FixedEnvironment::new().with_current_dir("/srv");
//! let canonicalizer = PathCanonicalizer::new(PlatformFamily::Unix, env);
//!
//! let fixed = fix_path("sync/docs//", PlatformFamily::Unix);
//! assert_eq!(fixed, "sync/docs/");
//! assert_eq!(canonicalizer.canonicalize(&fixed), "/srv/sync/docs/");
//! ```
//!
//! # Path Relationships
//!
//! ```
//! use stfolder::path::{PathRelationship, PlatformFamily};
//!
//! let rel = PathRelationship::between("/data/f1/", "/data/f1/.tmp/", PlatformFamily::Unix);
//! assert_eq!(rel, PathRelationship::Ancestor);
//! assert!(rel.is_hierarchical());
//! ```

pub mod canonicalize;
pub mod environment;
pub mod fixer;
pub mod normalize;
pub mod platform;
pub mod relationship;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use canonicalize::{canonicalize, PathCanonicalizer, LONG_PATH_PREFIX};
pub use environment::{FixedEnvironment, PathEnvironment, SystemEnvironment};
pub use fixer::fix_path;
pub use platform::PlatformFamily;
pub use relationship::{is_contained, relative, PathRelationship};
