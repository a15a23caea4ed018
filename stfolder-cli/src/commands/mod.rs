//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Print the prepared paths for an ad-hoc folder
//! - `show`: Show configured folders
//! - `init_marker`: Create a folder's marker file
//! - `has_marker`: Assert that a folder's marker file exists
//! - `validate`: Validate the configuration file
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod has_marker;
pub mod init_marker;
pub mod resolve;
pub mod show;
pub mod validate;

pub use completions::CompletionsCommand;
pub use has_marker::HasMarkerCommand;
pub use init_marker::InitMarkerCommand;
pub use resolve::ResolveCommand;
pub use show::ShowCommand;
pub use validate::ValidateCommand;
