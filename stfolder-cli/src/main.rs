//! Main entry point for the stfolder CLI.
//!
//! This is the command-line interface for inspecting synchronized folder
//! configurations:
//! - `resolve`: Print the prepared paths for an ad-hoc folder
//! - `show`: Show configured folders
//! - `init-marker` / `has-marker`: Manage folder marker files
//! - `validate`: Validate the configuration file
//!
//! Folder diagnostics are routed through the stderr [`stfolder::Logger`].
//! No `log` backend is installed, so the library's facade-level debug notes
//! (for example a tilde that could not be expanded) are discarded.

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::InitMarker(cmd) => cmd.execute(&global),
        cli::Command::HasMarker(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
