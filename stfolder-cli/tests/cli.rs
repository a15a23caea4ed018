//! Integration tests for the stfolder CLI.
//!
//! These tests run the compiled binary against temporary configuration
//! files and check output and exit codes.

mod common;

use common::{canonical_dir, TestEnv};
use predicates::prelude::*;

#[test]
fn test_cli_no_arguments() {
    let env = TestEnv::new();

    env.command_bare()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version_flag() {
    let env = TestEnv::new();

    env.command_bare()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("stfolder"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_help_flag() {
    let env = TestEnv::new();

    env.command_bare()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains(
            "Resolve and inspect synchronized folder paths",
        ));
}

#[cfg(unix)]
#[test]
fn test_resolve_text_output() {
    let env = TestEnv::new();
    let folder = env.create_dir("docs");

    env.command_bare()
        .args(["resolve", "--path"])
        .arg(format!("{}//sub/..", folder.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "path:      {}",
            canonical_dir(&folder)
        )))
        .stdout(predicate::str::contains("rescan:    0s"));
}

#[cfg(unix)]
#[test]
fn test_resolve_json_output() {
    let env = TestEnv::new();
    let folder = env.create_dir("docs");

    let output = env
        .command_bare()
        .args(["resolve", "--id", "docs", "--format", "json", "--path"])
        .arg(&folder)
        .arg("--temp-dir")
        .arg(folder.join(".tmp"))
        .output()
        .expect("Failed to run stfolder");
    assert!(output.status.success());

    let views: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    let view = &views[0];
    assert_eq!(view["id"], "docs");
    assert_eq!(view["path"], canonical_dir(&folder));
    assert_eq!(
        view["tempPath"],
        canonical_dir(&folder.join(".tmp")).as_str()
    );
    assert_eq!(view["type"], "sendreceive");
}

#[cfg(unix)]
#[test]
fn test_resolve_temp_outside_folder_falls_back() {
    let env = TestEnv::new();
    let folder = env.create_dir("docs");
    let elsewhere = env.create_dir("elsewhere");

    env.command_bare()
        .args(["resolve", "--path"])
        .arg(&folder)
        .arg("--temp-dir")
        .arg(&elsewhere)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "temp path: {}",
            canonical_dir(&folder)
        )));
}

#[test]
fn test_resolve_clamps_negative_interval() {
    let env = TestEnv::new();

    env.command_bare()
        .args(["resolve", "--path", "/srv/docs", "--rescan-interval", "-5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rescan:    0s"));
}

#[test]
fn test_resolve_clamps_large_interval() {
    let env = TestEnv::new();

    env.command_bare()
        .args([
            "resolve",
            "--path",
            "/srv/docs",
            "--rescan-interval",
            "999999999",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("rescan:    31536000s"));
}

#[test]
fn test_resolve_rejects_empty_path() {
    let env = TestEnv::new();

    env.command_bare()
        .args(["resolve", "--path", ""])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("--path cannot be empty"));
}

#[cfg(unix)]
#[test]
fn test_show_all_folders() {
    let env = TestEnv::new();
    let docs = env.create_dir("docs");
    let photos = env.create_dir("photos");
    env.write_folders(&[("docs", &docs), ("photos", &photos)]);

    env.command()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains(canonical_dir(&docs)))
        .stdout(predicate::str::contains(canonical_dir(&photos)));
}

#[cfg(unix)]
#[test]
fn test_show_single_folder_json() {
    let env = TestEnv::new();
    let docs = env.create_dir("docs");
    let photos = env.create_dir("photos");
    env.write_folders(&[("docs", &docs), ("photos", &photos)]);

    let output = env
        .command()
        .args(["show", "photos", "--format", "json"])
        .output()
        .expect("Failed to run stfolder");
    assert!(output.status.success());

    let views: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    assert_eq!(views.as_array().map(Vec::len), Some(1));
    assert_eq!(views[0]["id"], "photos");
    assert_eq!(views[0]["path"], canonical_dir(&photos));
}

#[test]
fn test_show_empty_configuration() {
    let env = TestEnv::new();
    env.write_config("folders: []\n");

    env.command()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No folders configured"));
}

#[test]
fn test_show_unknown_folder_exits_not_found() {
    let env = TestEnv::new();
    let docs = env.create_dir("docs");
    env.write_folders(&[("docs", &docs)]);

    env.command()
        .args(["show", "music"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("folder music"));
}

#[test]
fn test_show_missing_config_exits_not_found() {
    let env = TestEnv::new();

    env.command().arg("show").assert().code(3);
}

#[test]
fn test_show_reads_config_from_environment() {
    let env = TestEnv::new();
    let docs = env.create_dir("docs");
    env.write_folders(&[("docs", &docs)]);

    env.command_bare()
        .env("STFOLDER_CONFIG", &env.config_path)
        .args(["show", "docs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("docs"));
}

#[test]
fn test_init_marker_then_has_marker() {
    let env = TestEnv::new();
    let docs = env.create_dir("docs");
    env.write_folders(&[("docs", &docs)]);

    env.command()
        .args(["has-marker", "docs"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Assertion failed"));

    env.command()
        .args(["init-marker", "docs"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".stfolder"));
    assert!(docs.join(".stfolder").exists());

    env.command().args(["has-marker", "docs"]).assert().success();
    env.command()
        .args(["has-marker", "docs", "--not"])
        .assert()
        .code(1);
}

#[test]
fn test_init_marker_is_idempotent() {
    let env = TestEnv::new();
    let docs = env.create_dir("docs");
    env.write_folders(&[("docs", &docs)]);

    env.command().args(["init-marker", "docs"]).assert().success();
    env.command()
        .args(["init-marker", "docs", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_init_marker_in_missing_directory_fails() {
    let env = TestEnv::new();
    let missing = env.path().join("not-there");
    env.write_folders(&[("docs", &missing)]);

    env.command()
        .args(["init-marker", "docs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
    assert!(!missing.exists());
}

#[test]
fn test_has_marker_not_on_missing_marker() {
    let env = TestEnv::new();
    let docs = env.create_dir("docs");
    env.write_folders(&[("docs", &docs)]);

    env.command()
        .args(["has-marker", "docs", "--not"])
        .assert()
        .success();
}

#[test]
fn test_validate_valid_config() {
    let env = TestEnv::new();
    let docs = env.create_dir("docs");
    let photos = env.create_dir("photos");
    env.write_folders(&[("docs", &docs), ("photos", &photos)]);

    env.command()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid (2 folders)"));
}

#[test]
fn test_validate_explicit_path() {
    let env = TestEnv::new();
    let other = env.path().join("other.yaml");
    std::fs::write(&other, "folders:\n  - id: docs\n    path: /srv/docs\n")
        .expect("Failed to write config");

    env.command_bare()
        .arg("validate")
        .arg(&other)
        .assert()
        .success()
        .stdout(predicate::str::contains("(1 folders)"));
}

#[test]
fn test_validate_unknown_field() {
    let env = TestEnv::new();
    env.write_config("folders:\n  - id: docs\n    path: /srv/docs\n    colour: blue\n");

    env.command()
        .arg("validate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Parse error"));
}

#[test]
fn test_validate_duplicate_ids() {
    let env = TestEnv::new();
    env.write_config(
        "folders:\n  - id: docs\n    path: /srv/a\n  - id: docs\n    path: /srv/b\n",
    );

    env.command()
        .arg("validate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn test_validate_missing_file() {
    let env = TestEnv::new();

    env.command()
        .arg("validate")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_show_rejects_duplicate_ids() {
    let env = TestEnv::new();
    env.write_config(
        "folders:\n  - id: docs\n    path: /srv/a\n  - id: docs\n    path: /srv/b\n",
    );

    env.command().arg("show").assert().code(7);
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();

    env.command_bare()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stfolder"));
}
