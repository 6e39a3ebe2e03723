//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Bundler(kiln_bundler::Error::InvalidVersion { version, source }) => {
            miette::miette!(
                help = "Pass a semantic version such as 6.3.0",
                "Invalid version '{}': {}",
                version,
                source
            )
        }
        CliError::Bundler(kiln_bundler::Error::Discovery { root, source }) => {
            miette::miette!(
                help = "Check layout.styles_dir in kiln.toml or pass --root",
                "Failed to discover stylesheets under {}: {}",
                root.display(),
                source
            )
        }
        CliError::Config(e) => miette::miette!(
            help = "Check kiln.toml, the \"kiln\" field of package.json and KILN_* variables",
            "Configuration error: {}",
            e
        ),
        _ => miette::miette!("{}", err),
    }
}
