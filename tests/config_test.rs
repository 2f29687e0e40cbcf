// tests/config_test.rs
mod common;

use std::fs;
use std::path::Path;

use common::*;
use serial_test::serial;
use set_version_number::cli::{run_update_workflow, UpdateWorkflowArgs};
use set_version_number::config::{load_config, Config, CONFIG_FILE_NAME};

#[test]
fn test_load_from_explicit_file() {
    let config = load_config(
        Some(Path::new("tests/fixtures/config_strict.toml")),
        Path::new("."),
    )
    .expect("Failed to load test config");
    assert!(config.behavior.strict);
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("absent.toml");
    assert!(load_config(Some(&missing), dir.path()).is_err());
}

#[test]
fn test_invalid_toml_is_config_error() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "[behavior\nstrict = ").unwrap();

    let err = load_config(None, dir.path()).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
fn test_project_config_is_found_in_root() {
    let project = fixture_project();
    fs::write(
        project.path().join(CONFIG_FILE_NAME),
        "[behavior]\nstrict = true\n",
    )
    .unwrap();

    let config = load_config(None, project.path()).unwrap();
    assert!(config.behavior.strict);
}

#[test]
fn test_project_config_enables_strict_workflow() {
    let project = project_with("// no constants\n", RESOURCE_FIXTURE);
    fs::write(
        project.path().join(CONFIG_FILE_NAME),
        "[behavior]\nstrict = true\n",
    )
    .unwrap();

    let result = run_update_workflow(UpdateWorkflowArgs {
        versions: vec!["1.2.3".to_string()],
        root: project.path().to_path_buf(),
        quiet: true,
        ..Default::default()
    });

    assert!(result.is_err());
    assert_eq!(read_resource(project.path()), RESOURCE_FIXTURE);
}

#[test]
fn test_workflow_result() {
    let project = fixture_project();

    let result = run_update_workflow(UpdateWorkflowArgs {
        versions: vec!["0.18.3".to_string()],
        root: project.path().to_path_buf(),
        quiet: true,
        ..Default::default()
    })
    .unwrap();

    assert_eq!(result.version, "0.18.3");
    assert_eq!(result.changed_files.len(), 2);
    assert!(result.written);
    assert_eq!(result.warnings, 0);
}

#[cfg(target_os = "linux")]
#[test]
#[serial]
fn test_user_config_dir_fallback() {
    let config_home = tempfile::TempDir::new().unwrap();
    fs::write(
        config_home.path().join(CONFIG_FILE_NAME),
        "[behavior]\nstrict = true\n",
    )
    .unwrap();
    let project = tempfile::TempDir::new().unwrap();

    let previous = std::env::var_os("XDG_CONFIG_HOME");
    std::env::set_var("XDG_CONFIG_HOME", config_home.path());
    let config = load_config(None, project.path());
    match previous {
        Some(value) => std::env::set_var("XDG_CONFIG_HOME", value),
        None => std::env::remove_var("XDG_CONFIG_HOME"),
    }

    assert!(config.unwrap().behavior.strict);
}

#[test]
#[serial]
fn test_defaults_without_any_file() {
    let project = tempfile::TempDir::new().unwrap();
    let empty_home = tempfile::TempDir::new().unwrap();

    let previous = std::env::var_os("XDG_CONFIG_HOME");
    std::env::set_var("XDG_CONFIG_HOME", empty_home.path());
    let config = load_config(None, project.path());
    match previous {
        Some(value) => std::env::set_var("XDG_CONFIG_HOME", value),
        None => std::env::remove_var("XDG_CONFIG_HOME"),
    }

    assert_eq!(config.unwrap(), Config::default());
}
