//! # kiln-bundler
//!
//! Turns a release version and an optional dev target into the ordered list
//! of bundle descriptors an external bundling engine executes.
//!
//! The crate never bundles anything itself. It discovers entry points,
//! assembles typed transform pipelines, attaches warning policies and the
//! line-ending output hook, and performs the two synchronous filesystem
//! chores of a release build: emptying the output directory and copying the
//! static wrapper files.
//!
//! ## Quick Start
//!
//! ```no_run
//! use kiln_bundler::{BuildMode, Orchestrator};
//! use kiln_config::KilnConfig;
//!
//! # fn main() -> kiln_bundler::Result<()> {
//! let orchestrator = Orchestrator::new(KilnConfig::rooted("."), "6.3.0")?;
//!
//! // Full release: clean, copy wrappers, every family minified and not
//! let release = orchestrator.bundle(BuildMode::from_env(None))?;
//!
//! // Dev iteration on the stylesheets only
//! let css = orchestrator.bundle(BuildMode::from_env(Some("css")))?;
//!
//! assert_eq!(css.len() * 2 + 4, release.len());
//! # Ok(()) }
//! ```

pub mod banner;
pub mod descriptor;
pub mod dispatch;
pub mod eol;
pub mod fs;
pub mod hooks;
pub mod pipeline;
pub mod targets;
pub mod warnings;

// Logging utilities (optional, enabled with "logging" feature)
#[cfg(feature = "logging")]
pub mod logging;

#[cfg(feature = "logging")]
pub use logging::{LogLevel, init_logging, init_logging_from_env};

pub use banner::VersionBanner;
pub use descriptor::{
    BundleDescriptor, ExportMode, Input, OutputFormat, OutputSpec, Outputs, TargetFamily,
};
pub use dispatch::{BuildMode, Orchestrator, WatchTarget, generate, generate_with};
pub use eol::{EolNormalizer, normalize_eol};
pub use hooks::{ArtifactContent, ArtifactKind, OutputArtifact, OutputHook};
pub use pipeline::{BannerOptions, Capability, CommentStyle, StylesheetOptions, TransformStep};
pub use warnings::{CodePolicy, WarningEvent, WarningPolicy, WarningPredicate, report_warning};

use std::path::PathBuf;

/// Errors raised while generating descriptors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The release version is not a semantic version.
    #[error("Invalid version '{version}': {source}")]
    InvalidVersion {
        version: String,
        #[source]
        source: semver::Error,
    },

    /// Configuration could not be loaded or failed validation.
    #[error("Invalid configuration: {0}")]
    Config(#[from] kiln_config::ConfigError),

    /// Filesystem operation failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Walking the stylesheet source tree failed.
    #[error("Failed to discover stylesheets under {}: {source}", .root.display())]
    Discovery {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Result type alias for kiln operations.
pub type Result<T> = std::result::Result<T, Error>;
