//! Command to show configured folders.

use crate::error::CliError;
use crate::utils::{load_folder_set, print_folders, FolderView, GlobalOptions, OutputFormat};
use clap::Args;

/// Show prepared folders from the configuration file.
#[derive(Args)]
pub struct ShowCommand {
    /// Only show the folder with this id
    #[arg(value_name = "ID")]
    pub id: Option<String>,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "text",
        env = "STFOLDER_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,
}

impl ShowCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let set = load_folder_set(global)?;
        let logger = global.logger();

        let views: Vec<FolderView> = match self.id {
            Some(ref id) => vec![FolderView::new(set.require(id)?, &logger)],
            None => set
                .iter()
                .map(|folder| FolderView::new(folder, &logger))
                .collect(),
        };

        if views.is_empty() {
            if !global.quiet {
                eprintln!("No folders configured");
            }
            return Ok(());
        }

        print_folders(&views, self.format)
    }
}
