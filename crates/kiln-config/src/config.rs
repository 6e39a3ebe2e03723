//! High-level configuration structure for kiln.
//!
//! This module provides the main `KilnConfig` struct and the layered loading
//! logic. For file discovery, see the `discovery` module.

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use path_clean::PathClean;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::discovery::ConfigSource;
use crate::error::{ConfigError, Result as ConfigResult};
use crate::layout::LayoutOptions;
use crate::project::ProjectOptions;
use crate::settings::GlobalSettings;
use crate::warnings::WarningOptions;

/// Prefix for environment overrides, e.g. `KILN_PROJECT__NAME=Grid`.
pub const ENV_PREFIX: &str = "KILN_";

/// Environment keys under [`ENV_PREFIX`] that are not configuration fields.
const RESERVED_ENV_KEYS: &[&str] = &["target"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KilnConfig {
    #[serde(default)]
    pub project: ProjectOptions,

    #[serde(default)]
    pub layout: LayoutOptions,

    #[serde(default)]
    pub warnings: WarningOptions,

    #[serde(default)]
    pub settings: GlobalSettings,
}

impl KilnConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use kiln_config::KilnConfig;
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "project": { "name": "Grid", "file_prefix": "grid" }
    /// });
    ///
    /// let config = KilnConfig::from_value(value).unwrap();
    /// assert_eq!(config.project.name, "Grid");
    /// assert_eq!(config.layout.esm_entry, "esm.js");
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Defaults rooted at `root`.
    pub fn rooted(root: impl AsRef<Path>) -> Self {
        let mut config = Self::default();
        config.layout.root = root.as_ref().to_path_buf().clean();
        config
    }

    /// Load configuration from layered sources.
    ///
    /// Priority: environment variables > config file > defaults.
    /// A relative `layout.root` is resolved against `root`.
    pub fn load(root: impl AsRef<Path>, source: Option<&ConfigSource>) -> ConfigResult<Self> {
        let root = root.as_ref();
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        match source {
            Some(ConfigSource::Toml(path)) => {
                tracing::debug!(path = %path.display(), "loading TOML config");
                figment = figment.merge(Toml::file_exact(path));
            }
            Some(ConfigSource::PackageJson(path)) => {
                tracing::debug!(path = %path.display(), "loading package.json config");
                let value = crate::discovery::read_package_json_field(path)?;
                figment = figment.merge(Serialized::defaults(value));
            }
            None => {}
        }

        figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .split("__")
                .ignore(RESERVED_ENV_KEYS),
        );

        let mut config: KilnConfig = figment.extract()?;
        config.layout.root = root.join(&config.layout.root).clean();
        Ok(config)
    }
}
