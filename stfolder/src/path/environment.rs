//! Process environment consulted during canonicalization.
//!
//! Tilde expansion needs home directories and absolutification needs the
//! current working directory. Both are read through [`PathEnvironment`] so
//! tests can pin them instead of depending on the host.

use std::collections::BTreeMap;
use std::env;
use std::io;

/// Source of home and working directories.
///
/// # Examples
///
/// ```
/// use stfolder::path::{FixedEnvironment, PathEnvironment};
///
/// let env = FixedEnvironment::new()
///     .with_home("/home/alice")
///     .with_user("bob", "/home/bob")
///     .with_current_dir("/work");
///
/// assert_eq!(env.home_dir().as_deref(), Some("/home/alice"));
/// assert_eq!(env.user_home_dir("bob").as_deref(), Some("/home/bob"));
/// assert_eq!(env.current_dir().unwrap(), "/work");
/// ```
pub trait PathEnvironment {
    /// Home directory of the current user.
    fn home_dir(&self) -> Option<String>;

    /// Home directory of the named user, for `~user` expansion.
    fn user_home_dir(&self, user: &str) -> Option<String>;

    /// The current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined or is
    /// not valid UTF-8.
    fn current_dir(&self) -> io::Result<String>;
}

impl<E: PathEnvironment + ?Sized> PathEnvironment for &E {
    fn home_dir(&self) -> Option<String> {
        (**self).home_dir()
    }

    fn user_home_dir(&self, user: &str) -> Option<String> {
        (**self).user_home_dir(user)
    }

    fn current_dir(&self) -> io::Result<String> {
        (**self).current_dir()
    }
}

/// The real process environment.
///
/// `~user` resolves only for the current user (matched against `USER` or
/// `USERNAME`); other users' home directories are not looked up.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl PathEnvironment for SystemEnvironment {
    fn home_dir(&self) -> Option<String> {
        home::home_dir().and_then(|p| p.into_os_string().into_string().ok())
    }

    fn user_home_dir(&self, user: &str) -> Option<String> {
        let current = env::var("USER").or_else(|_| env::var("USERNAME")).ok()?;
        if current == user {
            self.home_dir()
        } else {
            None
        }
    }

    fn current_dir(&self) -> io::Result<String> {
        env::current_dir()?.into_os_string().into_string().map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                "current directory is not valid UTF-8",
            )
        })
    }
}

/// A fixed environment, for tests and tooling that must not touch the host.
#[derive(Debug, Clone, Default)]
pub struct FixedEnvironment {
    home: Option<String>,
    users: BTreeMap<String, String>,
    current_dir: Option<String>,
}

impl FixedEnvironment {
    /// An environment with no home and no working directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current user's home directory.
    #[must_use]
    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Register a named user's home directory.
    #[must_use]
    pub fn with_user(mut self, user: impl Into<String>, home: impl Into<String>) -> Self {
        self.users.insert(user.into(), home.into());
        self
    }

    /// Set the current working directory.
    #[must_use]
    pub fn with_current_dir(mut self, dir: impl Into<String>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }
}

impl PathEnvironment for FixedEnvironment {
    fn home_dir(&self) -> Option<String> {
        self.home.clone()
    }

    fn user_home_dir(&self, user: &str) -> Option<String> {
        self.users.get(user).cloned()
    }

    fn current_dir(&self) -> io::Result<String> {
        self.current_dir.clone().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no working directory configured")
        })
    }
}
