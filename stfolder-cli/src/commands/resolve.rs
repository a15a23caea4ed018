//! Command to show the prepared paths for an ad-hoc folder.

use crate::error::CliError;
use crate::utils::{print_folders, FolderView, GlobalOptions, OutputFormat};
use clap::Args;
use stfolder::FolderConfiguration;

/// Prepare a folder from command-line values and print its canonical paths.
#[derive(Args)]
pub struct ResolveCommand {
    /// Folder path (may be relative or start with ~)
    #[arg(long, value_name = "PATH")]
    pub path: String,

    /// Temp directory path
    #[arg(long, value_name = "PATH")]
    pub temp_dir: Option<String>,

    /// Rescan interval in seconds
    #[arg(long, value_name = "SECONDS", allow_negative_numbers = true)]
    pub rescan_interval: Option<i32>,

    /// Folder id used in the output
    #[arg(long, default_value = "adhoc")]
    pub id: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.path.is_empty() {
            return Err(CliError::InvalidArguments(
                "--path cannot be empty".to_string(),
            ));
        }

        let mut folder = FolderConfiguration::default();
        folder.id = self.id;
        folder.raw_path = self.path;
        folder.temp_dir_path = self.temp_dir.unwrap_or_default();
        folder.rescan_interval_s = self.rescan_interval.unwrap_or_default();
        folder.prepare();

        let logger = global.logger();
        let view = FolderView::new(&folder, &logger);
        logger.debug(&format!("Resolved {} to {}", folder.raw_path, view.path));

        print_folders(&[view], self.format)
    }
}
