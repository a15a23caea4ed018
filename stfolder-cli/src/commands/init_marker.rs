//! Command to create a folder's marker file.

use crate::error::CliError;
use crate::utils::{load_folder_set, GlobalOptions};
use clap::Args;
use stfolder::folder::{create_marker_with, has_marker, marker_path, SystemDirectoryOps};
use stfolder::path::PathCanonicalizer;

/// Create the `.stfolder` marker for a configured folder.
#[derive(Args)]
pub struct InitMarkerCommand {
    /// Folder id
    #[arg(value_name = "ID")]
    pub id: String,
}

impl InitMarkerCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let set = load_folder_set(global)?;
        let folder = set.require(&self.id)?;
        let logger = global.logger();
        let path = folder.path_with(&logger, &PathCanonicalizer::system());

        if has_marker(&path) {
            logger.info(&format!("Marker already present for {}", folder.description()));
            return Ok(());
        }

        create_marker_with(&path, &SystemDirectoryOps, &logger)?;

        if !global.quiet {
            println!("{}", marker_path(&path).display());
        }
        Ok(())
    }
}
