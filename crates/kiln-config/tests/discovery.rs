//! Tests for config file discovery and loading

use kiln_config::{ConfigDiscovery, ConfigError, ConfigSource};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn discovers_kiln_toml() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("kiln.toml"),
        r#"
[project]
name = "Grid"
file_prefix = "grid"

[layout]
wrappers = ["jquery_wrapper.js", "vue_wrapper.js"]
"#,
    )
    .unwrap();

    let discovery = ConfigDiscovery::new(dir.path());
    let found = discovery.find().unwrap();
    assert!(matches!(found, ConfigSource::Toml(_)));
    assert_eq!(found.path().file_name().unwrap(), "kiln.toml");

    let config = discovery.load().unwrap();
    assert_eq!(config.project.name, "Grid");
    assert_eq!(config.project.file_prefix, "grid");
    assert_eq!(config.project.author, "Oliver Folkerd");
    assert_eq!(config.layout.wrappers.len(), 2);
    assert_eq!(config.layout.root, dir.path().to_path_buf());
}

#[test]
fn discovers_package_json() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{
  "name": "tabulator-tables",
  "kiln": {
    "layout": { "dist_dir": "build" }
  }
}"#,
    )
    .unwrap();

    let discovery = ConfigDiscovery::new(dir.path());
    assert!(matches!(
        discovery.find(),
        Some(ConfigSource::PackageJson(_))
    ));

    let config = discovery.load().unwrap();
    assert_eq!(config.layout.dist_dir, PathBuf::from("build"));
}

#[test]
fn package_json_without_field_is_ignored() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.json"), r#"{ "name": "x" }"#).unwrap();

    let discovery = ConfigDiscovery::new(dir.path());
    assert!(discovery.find().is_none());
}

#[test]
fn toml_takes_precedence_over_package_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("kiln.toml"), "[project]\nname = \"FromToml\"\n").unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{ "kiln": { "project": { "name": "FromPackage" } } }"#,
    )
    .unwrap();

    let config = ConfigDiscovery::new(dir.path()).load().unwrap();
    assert_eq!(config.project.name, "FromToml");
}

#[test]
fn missing_config_yields_rooted_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ConfigDiscovery::new(dir.path()).load().unwrap();
    assert_eq!(config.layout.root, dir.path().to_path_buf());
    assert_eq!(config.project.name, "Tabulator");
}

#[test]
fn ignored_codes_merge_with_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("kiln.toml"),
        "[warnings.ignored_codes]\nTHIS_IS_UNDEFINED = true\n",
    )
    .unwrap();

    let config = ConfigDiscovery::new(dir.path()).load().unwrap();
    let codes = &config.warnings.ignored_codes;
    assert_eq!(codes.get("FILE_NAME_CONFLICT"), Some(&true));
    assert_eq!(codes.get("THIS_IS_UNDEFINED"), Some(&true));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = ConfigDiscovery::new(dir.path())
        .load_from("custom.toml")
        .unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(path) if path.ends_with("custom.toml")));
}

#[test]
fn explicit_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("release.toml"),
        "[layout]\ndist_dir = \"out\"\n",
    )
    .unwrap();

    let config = ConfigDiscovery::new(dir.path())
        .load_from("release.toml")
        .unwrap();
    assert_eq!(config.layout.dist_dir, PathBuf::from("out"));
}

#[test]
fn invalid_toml_reports_invalid_value() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("kiln.toml"), "[layout]\nwrappers = 7\n").unwrap();

    let err = ConfigDiscovery::new(dir.path()).load().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}
