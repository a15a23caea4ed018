//! Utility functions for CLI operations.
//!
//! This module provides common helpers used across CLI commands:
//! configuration loading, folder lookup, and output formatting.

use crate::error::CliError;
use clap::ValueEnum;
use serde::Serialize;
use std::path::PathBuf;
use stfolder::config::{ConfigLoader, FolderSet};
use stfolder::path::PathCanonicalizer;
use stfolder::{init_logger, DiagnosticSink, FolderConfiguration, Logger};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the configuration file location.
    pub config: Option<PathBuf>,
}

impl GlobalOptions {
    /// Logger honoring the verbosity flags.
    pub fn logger(&self) -> Logger {
        init_logger(self.verbose, self.quiet)
    }
}

/// Output format for folder listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
}

/// Resolve the configuration file path from global options.
///
/// Priority: `--config` (or `STFOLDER_CONFIG`) > `~/.stfolder/folders.yaml`.
pub fn config_path(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match global.config {
        Some(ref path) => Ok(path.clone()),
        None => ConfigLoader::default_path().map_err(CliError::from),
    }
}

/// Load and validate the configured folders.
pub fn load_folder_set(global: &GlobalOptions) -> Result<FolderSet, CliError> {
    let path = config_path(global)?;
    global
        .logger()
        .debug(&format!("Loading folders from {}", path.display()));
    ConfigLoader::load_folder_set(&path).map_err(CliError::from)
}

/// Serializable summary of a prepared folder.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderView {
    /// Folder id.
    pub id: String,
    /// Label, or the id when unlabeled.
    pub description: String,
    /// Configured path after normalization.
    pub raw_path: String,
    /// Canonical folder path.
    pub path: String,
    /// Canonical temp directory.
    pub temp_path: String,
    /// Clamped rescan interval.
    pub rescan_interval_s: i32,
    /// Folder type.
    #[serde(rename = "type")]
    pub folder_type: String,
    /// Device ids in canonical order.
    pub devices: Vec<String>,
}

impl FolderView {
    /// Summarize `folder`, reporting an unprepared record to `sink`.
    pub fn new(folder: &FolderConfiguration, sink: &dyn DiagnosticSink) -> Self {
        let canonicalizer = PathCanonicalizer::system();
        Self {
            id: folder.id.clone(),
            description: folder.description(),
            raw_path: folder.raw_path.clone(),
            path: folder.path_with(sink, &canonicalizer).into_owned(),
            temp_path: folder.temp_path_with(sink, &canonicalizer).into_owned(),
            rescan_interval_s: folder.rescan_interval_s,
            folder_type: folder.folder_type.to_string(),
            devices: folder
                .device_ids()
                .into_iter()
                .map(|id| id.to_string())
                .collect(),
        }
    }

    /// Multi-line text rendering.
    pub fn to_text(&self) -> String {
        let devices = if self.devices.is_empty() {
            "-".to_string()
        } else {
            self.devices.join(", ")
        };
        format!(
            "{}\n  path:      {}\n  temp path: {}\n  rescan:    {}s\n  type:      {}\n  devices:   {}",
            self.description, self.path, self.temp_path, self.rescan_interval_s, self.folder_type, devices
        )
    }
}

/// Print folders in the requested format.
pub fn print_folders(views: &[FolderView], format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => {
            let blocks: Vec<String> = views.iter().map(FolderView::to_text).collect();
            println!("{}", blocks.join("\n\n"));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(views)?);
        }
    }
    Ok(())
}
