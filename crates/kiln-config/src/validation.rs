//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation.

use std::path::{Component, Path, PathBuf};

use crate::config::KilnConfig;
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &KilnConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use kiln_config::{ConfigValidator, KilnConfig, SchemaValidator};
///
/// SchemaValidator.validate(&KilnConfig::default()).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &KilnConfig) -> Result<()> {
        if config.project.name.trim().is_empty() {
            return Err(schema_error(
                "project name cannot be empty",
                "Set 'project.name' to the library's global name",
            ));
        }

        if config.project.file_prefix.trim().is_empty() {
            return Err(schema_error(
                "file prefix cannot be empty",
                "Set 'project.file_prefix', e.g. \"tabulator\"",
            ));
        }

        let layout = &config.layout;
        let relative_paths = [
            ("layout.styles_dir", layout.styles_dir.as_path()),
            ("layout.builds_dir", layout.builds_dir.as_path()),
            ("layout.dist_dir", layout.dist_dir.as_path()),
        ];
        for (field, path) in relative_paths {
            if !is_contained(path) {
                return Err(schema_error(
                    format!("{field} must be a relative path inside the project"),
                    "Use a path relative to the project root without '..'",
                ));
            }
        }

        if layout.dist_dir.components().all(|c| c == Component::CurDir) {
            return Err(schema_error(
                "layout.dist_dir cannot be the project root",
                "The output directory is emptied on every release build",
            ));
        }

        let dist = normalized(&layout.dist_dir);
        let sources = [
            ("layout.styles_dir", &layout.styles_dir),
            ("layout.builds_dir", &layout.builds_dir),
        ];
        for (field, path) in sources {
            let source = normalized(path);
            if source.starts_with(&dist) || dist.starts_with(&source) {
                return Err(schema_error(
                    format!("layout.dist_dir overlaps {field}"),
                    "Move 'layout.dist_dir' outside the source directories",
                ));
            }
        }

        if layout.stylesheet_extension.trim_start_matches('.').is_empty() {
            return Err(schema_error(
                "layout.stylesheet_extension cannot be empty",
                "Use an extension such as \"scss\"",
            ));
        }

        for wrapper in &layout.wrappers {
            if wrapper.trim().is_empty() || !is_contained(Path::new(wrapper)) {
                return Err(schema_error(
                    format!("invalid wrapper file name: {wrapper:?}"),
                    "Wrapper entries are file names inside 'layout.builds_dir'",
                ));
            }
        }

        for code in config.warnings.ignored_codes.keys() {
            if code.trim().is_empty() {
                return Err(schema_error(
                    "warning codes cannot be empty",
                    "Remove empty keys from 'warnings.ignored_codes'",
                ));
            }
        }

        if config.warnings.circular_exceptions.iter().any(|f| f.is_empty()) {
            return Err(schema_error(
                "circular exception fragments cannot be empty",
                "An empty fragment would match every importer",
            ));
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs schema validation, then checks that the project root exists.
pub struct FsValidator;

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &KilnConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        if !config.layout.root.is_dir() {
            return Err(ConfigError::RootNotFound(config.layout.root.clone()));
        }

        Ok(())
    }
}

impl KilnConfig {
    /// Run schema validation.
    pub fn validate(&self) -> Result<()> {
        SchemaValidator.validate(self)
    }
}

fn schema_error(message: impl Into<String>, hint: impl Into<String>) -> ConfigError {
    ConfigError::SchemaValidation {
        message: message.into(),
        hint: Some(hint.into()),
    }
}

/// `path` without `.` components.
fn normalized(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

fn is_contained(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
