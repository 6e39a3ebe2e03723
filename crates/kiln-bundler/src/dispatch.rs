//! Mode dispatch: which builders run, and in which minification variants.

use std::fmt;

use kiln_config::KilnConfig;

use crate::banner::VersionBanner;
use crate::descriptor::BundleDescriptor;
use crate::fs::{clear_dist, copy_wrappers};
use crate::Result;
use crate::targets::{TargetContext, esm, stylesheet, umd};

/// Dev-mode target selected by a present `env` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WatchTarget {
    Css,
    Esm,
    Umd,
    Wrappers,
    /// Any unrecognized value: stylesheets and ES module only
    Default,
}

impl WatchTarget {
    /// Map an `env` value to a target. Never fails: unknown values select
    /// the reduced default set.
    pub fn parse(env: &str) -> Self {
        match env {
            "css" => WatchTarget::Css,
            "esm" => WatchTarget::Esm,
            "umd" => WatchTarget::Umd,
            "wrappers" => WatchTarget::Wrappers,
            _ => WatchTarget::Default,
        }
    }
}

impl fmt::Display for WatchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WatchTarget::Css => "css",
            WatchTarget::Esm => "esm",
            WatchTarget::Umd => "umd",
            WatchTarget::Wrappers => "wrappers",
            WatchTarget::Default => "default",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildMode {
    /// Clean, copy wrappers, every family unminified then minified
    Release,
    /// Single family (or the default set), unminified, non-destructive
    Watch(WatchTarget),
}

impl BuildMode {
    /// Absent or empty `env` selects a release build; any other value
    /// selects watch mode.
    pub fn from_env(env: Option<&str>) -> Self {
        match env {
            None | Some("") => BuildMode::Release,
            Some(env) => BuildMode::Watch(WatchTarget::parse(env)),
        }
    }
}

/// Top-level descriptor generator for one release version.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    config: KilnConfig,
    banner: VersionBanner,
}

impl Orchestrator {
    /// Validate the configuration and the version before anything touches
    /// the filesystem.
    pub fn new(config: KilnConfig, version: &str) -> Result<Self> {
        config.validate()?;
        let banner = VersionBanner::new(version, &config.project)?;
        Ok(Self { config, banner })
    }

    pub fn config(&self) -> &KilnConfig {
        &self.config
    }

    pub fn banner(&self) -> &VersionBanner {
        &self.banner
    }

    pub fn bundle(&self, mode: BuildMode) -> Result<Vec<BundleDescriptor>> {
        let descriptors = match mode {
            BuildMode::Release => self.build()?,
            BuildMode::Watch(target) => self.watch(target)?,
        };

        tracing::debug!(count = descriptors.len(), ?mode, "descriptors generated");
        Ok(descriptors)
    }

    fn context(&self) -> TargetContext<'_> {
        TargetContext::new(&self.config, &self.banner)
    }

    fn watch(&self, target: WatchTarget) -> Result<Vec<BundleDescriptor>> {
        tracing::info!(%target, "Building dev package bundles");
        let ctx = self.context();

        let descriptors = match target {
            WatchTarget::Css => stylesheet::build(&ctx, false)?,
            WatchTarget::Esm => vec![esm::build(&ctx, false)],
            WatchTarget::Umd => vec![umd::build(&ctx, false)],
            WatchTarget::Wrappers => {
                copy_wrappers(&self.config.layout)?;
                Vec::new()
            }
            WatchTarget::Default => {
                let mut descriptors = stylesheet::build(&ctx, false)?;
                descriptors.push(esm::build(&ctx, false));
                descriptors
            }
        };

        Ok(descriptors)
    }

    fn build(&self) -> Result<Vec<BundleDescriptor>> {
        let layout = &self.config.layout;

        tracing::info!(dir = %layout.dist_root().display(), "Clearing dist files");
        clear_dist(&layout.dist_root())?;

        tracing::info!(count = layout.wrappers.len(), "Building wrappers");
        copy_wrappers(layout)?;

        tracing::info!(version = %self.banner.version(), "Building production package bundles");
        let ctx = self.context();

        let stylesheets = [stylesheet::build(&ctx, false)?, stylesheet::build(&ctx, true)?];
        let modules = [esm::build(&ctx, false), esm::build(&ctx, true)];
        let universal = [umd::build(&ctx, false), umd::build(&ctx, true)];

        Ok(stylesheets
            .into_iter()
            .flatten()
            .chain(modules)
            .chain(universal)
            .collect())
    }
}

/// Generate descriptors for the project in the current directory.
///
/// Configuration is discovered from `kiln.toml` or `package.json`, falling
/// back to defaults.
pub fn generate(version: &str, env: Option<&str>) -> Result<Vec<BundleDescriptor>> {
    generate_with(kiln_config::discover()?, version, env)
}

/// Generate descriptors with an explicit configuration.
pub fn generate_with(
    config: KilnConfig,
    version: &str,
    env: Option<&str>,
) -> Result<Vec<BundleDescriptor>> {
    Orchestrator::new(config, version)?.bundle(BuildMode::from_env(env))
}
