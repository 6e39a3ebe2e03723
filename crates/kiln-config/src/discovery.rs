//! File-based config discovery for CLI use
//!
//! Handles finding kiln configuration files in a project root.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::KilnConfig;
use crate::error::{ConfigError, Result};

/// Dedicated config file name.
pub const CONFIG_FILE: &str = "kiln.toml";

/// Field consulted when configuration lives in `package.json`.
pub const PACKAGE_JSON_FIELD: &str = "kiln";

/// Where a configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Toml(PathBuf),
    PackageJson(PathBuf),
}

impl ConfigSource {
    /// Classify an explicit path by file name.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            ConfigSource::PackageJson(path)
        } else {
            ConfigSource::Toml(path)
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::Toml(path) | ConfigSource::PackageJson(path) => path,
        }
    }
}

/// File-based configuration discovery
///
/// # Example
///
/// ```no_run
/// use kiln_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config source in the root directory
    ///
    /// Searches in this order:
    /// 1. TOML config: kiln.toml
    /// 2. package.json (kiln field)
    pub fn find(&self) -> Option<ConfigSource> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.is_file() {
            return Some(ConfigSource::Toml(toml_path));
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.is_file() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed
                        .get(PACKAGE_JSON_FIELD)
                        .is_some_and(|field| !field.is_null())
                    {
                        return Some(ConfigSource::PackageJson(pkg_path));
                    }
                }
            }
        }

        None
    }

    /// Load config from the discovered source, falling back to defaults
    /// when the project carries no configuration.
    pub fn load(&self) -> Result<KilnConfig> {
        let source = self.find();
        match &source {
            Some(found) => tracing::debug!(path = %found.path().display(), "config discovered"),
            None => tracing::debug!(root = %self.root.display(), "no config file, using defaults"),
        }
        KilnConfig::load(&self.root, source.as_ref())
    }

    /// Load config from an explicit file path
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file does not exist.
    pub fn load_from(&self, path: impl AsRef<Path>) -> Result<KilnConfig> {
        let path = self.root.join(path.as_ref());
        if !path.is_file() {
            return Err(ConfigError::NotFound(path));
        }
        KilnConfig::load(&self.root, Some(&ConfigSource::from_path(path)))
    }
}

/// Read the `kiln` field of a package.json file.
pub(crate) fn read_package_json_field(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;

    let parsed: Value = serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
        field: "package.json".to_string(),
        hint: Some(format!("Invalid JSON: {}", e)),
    })?;

    match parsed.get(PACKAGE_JSON_FIELD) {
        Some(value) if value.is_object() => Ok(value.clone()),
        Some(_) => Err(ConfigError::InvalidValue {
            field: PACKAGE_JSON_FIELD.to_string(),
            hint: Some("The 'kiln' field must be an object".to_string()),
        }),
        None => Err(ConfigError::InvalidValue {
            field: PACKAGE_JSON_FIELD.to_string(),
            hint: Some("Add a 'kiln' field to your package.json".to_string()),
        }),
    }
}

/// Discover and load config from the current directory (convenience function)
pub fn discover() -> Result<KilnConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}
