#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const HEADER_FIXTURE: &str = include_str!("../fixtures/loot_version.h");
pub const RESOURCE_FIXTURE: &str = include_str!("../fixtures/resource.rc");

pub fn header_path(root: &Path) -> PathBuf {
    root.join("include").join("loot").join("loot_version.h")
}

pub fn resource_path(root: &Path) -> PathBuf {
    root.join("src").join("api").join("resource.rc")
}

/// Lays out a scratch project with the given header and resource contents.
pub fn project_with(header: &str, resource: &str) -> TempDir {
    let dir = TempDir::new().expect("Could not create temp dir");
    let header_file = header_path(dir.path());
    let resource_file = resource_path(dir.path());

    fs::create_dir_all(header_file.parent().unwrap()).unwrap();
    fs::create_dir_all(resource_file.parent().unwrap()).unwrap();
    fs::write(&header_file, header).unwrap();
    fs::write(&resource_file, resource).unwrap();

    dir
}

pub fn fixture_project() -> TempDir {
    project_with(HEADER_FIXTURE, RESOURCE_FIXTURE)
}

pub fn read_header(root: &Path) -> String {
    fs::read_to_string(header_path(root)).unwrap()
}

pub fn read_resource(root: &Path) -> String {
    fs::read_to_string(resource_path(root)).unwrap()
}
