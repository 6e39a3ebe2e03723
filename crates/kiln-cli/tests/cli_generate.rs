#![allow(deprecated)] // cargo_bin is deprecated but still supported by assert_cmd

//! End-to-end tests for `kiln generate`.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "src/scss/tabulator.scss", "");
    write(root, "src/scss/themes/tabulator_simple.scss", "");
    write(root, "src/js/builds/esm.js", "");
    write(root, "src/js/builds/usd.js", "");
    write(root, "src/js/builds/jquery_wrapper.js", "(function(){})();\r\n");
    dir
}

fn kiln(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("kiln").unwrap();
    cmd.env_remove("KILN_TARGET")
        .env_remove("RUST_LOG")
        .arg("--no-color")
        .arg("--root")
        .arg(root);
    cmd
}

fn descriptors(output: &[u8]) -> Vec<Value> {
    let value: Value = serde_json::from_slice(output).unwrap();
    value.as_array().unwrap().clone()
}

#[test]
fn release_prints_all_descriptors() {
    let project = project();
    let output = kiln(project.path())
        .args(["generate", "6.3.0"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let list = descriptors(&output);
    assert_eq!(list.len(), 2 * 2 + 4);
    let families: Vec<&str> = list.iter().map(|d| d["family"].as_str().unwrap()).collect();
    assert_eq!(
        families,
        ["stylesheet", "stylesheet", "stylesheet", "stylesheet", "esm", "esm", "umd", "umd"]
    );
    assert!(project.path().join("dist/js/jquery_wrapper.js").is_file());
}

#[test]
fn env_argument_selects_dev_target() {
    let project = project();
    let output = kiln(project.path())
        .args(["generate", "6.3.0", "umd"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let list = descriptors(&output);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["family"], "umd");
    assert_eq!(list[0]["output"]["name"], "Tabulator");
}

#[test]
fn env_variable_is_a_fallback() {
    let project = project();
    let output = kiln(project.path())
        .env("KILN_TARGET", "esm")
        .args(["generate", "6.3.0"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let list = descriptors(&output);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["family"], "esm");
}

#[test]
fn output_file_receives_pretty_json() {
    let project = project();
    let target = project.path().join("build/descriptors.json");

    kiln(project.path())
        .args(["generate", "6.3.0", "css", "--pretty", "--output"])
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&target).unwrap();
    assert!(written.contains("\n  {"));
    assert_eq!(descriptors(written.as_bytes()).len(), 2);
}

#[test]
fn config_file_overrides_layout() {
    let project = project();
    write(
        project.path(),
        "kiln.toml",
        "[layout]\ndist_dir = \"build\"\n\n[project]\nname = \"Grid\"\n",
    );

    let output = kiln(project.path())
        .args(["generate", "6.3.0", "umd"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let list = descriptors(&output);
    assert_eq!(list[0]["output"]["file"], "build/js/tabulator.js");
    assert_eq!(list[0]["output"]["name"], "Grid");
}

#[test]
fn invalid_version_fails() {
    let project = project();
    kiln(project.path())
        .args(["generate", "six"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid version 'six'"));
}

#[test]
fn missing_explicit_config_fails() {
    let project = project();
    kiln(project.path())
        .args(["--config", "missing.toml", "generate", "6.3.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.toml"));
}

#[test]
fn missing_styles_tree_fails() {
    let project = project();
    fs::remove_dir_all(project.path().join("src/scss")).unwrap();

    kiln(project.path())
        .args(["generate", "6.3.0", "css"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to discover stylesheets"));
}

#[test]
fn missing_root_fails() {
    let project = project();
    kiln(&project.path().join("absent"))
        .args(["generate", "6.3.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("project root not found"));
}
