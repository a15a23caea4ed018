//! Build script for stfolder-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("stfolder")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve and inspect synchronized folder paths")
        .long_about(
            "Command-line tool for resolving synchronized folder paths into their canonical \
             form and managing folder marker files",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Override the configuration file location")
                .value_name("PATH")
                .global(true)
                .env("STFOLDER_CONFIG"),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Print the prepared paths for an ad-hoc folder")
                .long_about(
                    "Canonicalize a folder path and temp directory exactly as a configured \
                     folder would be",
                ),
            Command::new("show")
                .about("Show configured folders")
                .long_about("Display the canonical paths of folders from the configuration file"),
            Command::new("init-marker")
                .about("Create the marker file for a configured folder")
                .long_about("Create the .stfolder marker in the folder root if it is missing"),
            Command::new("has-marker")
                .about("Check whether a configured folder has its marker file")
                .long_about("Exit with status 0 if the .stfolder marker exists, 1 otherwise"),
            Command::new("validate")
                .about("Validate the configuration file")
                .long_about("Check a folders configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("stfolder.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
