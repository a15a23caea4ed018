//! Command to assert that a folder's marker file exists.

use crate::error::CliError;
use crate::utils::{load_folder_set, GlobalOptions};
use clap::Args;
use stfolder::folder::{has_marker, marker_path};
use stfolder::path::PathCanonicalizer;

/// Exit successfully if the marker exists, with code 1 otherwise.
#[derive(Args)]
pub struct HasMarkerCommand {
    /// Folder id
    #[arg(value_name = "ID")]
    pub id: String,

    /// Invert the assertion (fail if the marker exists)
    #[arg(long)]
    pub not: bool,
}

impl HasMarkerCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let set = load_folder_set(global)?;
        let folder = set.require(&self.id)?;
        let logger = global.logger();
        let path = folder.path_with(&logger, &PathCanonicalizer::system());
        let marker = marker_path(&path);

        let present = has_marker(&path);
        if present != self.not {
            logger.info(&format!("Checked {}", marker.display()));
            return Ok(());
        }

        let msg = if self.not {
            format!("Assertion failed: marker exists at {}", marker.display())
        } else {
            format!("Assertion failed: no marker at {}", marker.display())
        };
        Err(CliError::SemanticFailure(msg))
    }
}
