//! Command to validate a folders configuration file.

use crate::error::CliError;
use crate::utils::{config_path, GlobalOptions};
use clap::Args;
use std::path::PathBuf;
use stfolder::config::{ConfigLoader, ConfigValidator};

/// Validate a folders configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate (default: the global configuration)
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: Option<PathBuf>,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Locate the file
        let path = match self.config_path {
            Some(path) => path,
            None => config_path(global)?,
        };
        if !path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                path.display()
            )));
        }

        // 2. Parse the file
        let config = match ConfigLoader::load_file(&path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Parse error: {e}");
                return Err(CliError::SemanticFailure(
                    "Configuration file is invalid".to_string(),
                ));
            }
        };

        // 3. Validate the folders
        match ConfigValidator::validate(&config) {
            Ok(()) => {
                if !global.quiet {
                    println!(
                        "Configuration is valid ({} folders)",
                        config.folders.len()
                    );
                }
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Configuration validation failed".to_string(),
                ))
            }
        }
    }
}
