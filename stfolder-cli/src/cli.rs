//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, HasMarkerCommand, InitMarkerCommand, ResolveCommand, ShowCommand,
    ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for inspecting synchronized folder configurations.
#[derive(Parser)]
#[command(name = "stfolder")]
#[command(version, about = "Resolve and inspect synchronized folder paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the configuration file location
    #[arg(long, value_name = "PATH", global = true, env = "STFOLDER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the prepared paths for an ad-hoc folder
    Resolve(ResolveCommand),

    /// Show configured folders
    Show(ShowCommand),

    /// Create the marker file for a configured folder
    InitMarker(InitMarkerCommand),

    /// Check whether a configured folder has its marker file
    HasMarker(HasMarkerCommand),

    /// Validate the configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
