use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::Family;

/// Available kiln subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate bundle descriptors
    ///
    /// Without ENV this is a release build: the output directory is emptied,
    /// wrappers are copied and every target is emitted minified and not.
    /// With ENV only the selected dev target is emitted.
    Generate(GenerateArgs),

    /// Filter engine warnings through a target's suppression policy
    ///
    /// Reads one JSON warning event per line and reports those the policy
    /// does not suppress.
    FilterWarnings(FilterWarningsArgs),
}

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Release version (semantic version, used in the license banner)
    #[arg(value_name = "VERSION")]
    pub version: String,

    /// Dev target: css, esm, umd or wrappers
    ///
    /// Any other value builds the stylesheets and the ES module.
    #[arg(value_name = "ENV", env = "KILN_TARGET")]
    pub env: Option<String>,

    /// Write descriptors to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the filter-warnings command
#[derive(Args, Debug)]
pub struct FilterWarningsArgs {
    /// Target family whose policy applies
    #[arg(short, long, value_enum, default_value = "esm")]
    pub family: Family,

    /// File of JSON-line warning events (stdin when omitted)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Echo reported events as JSON lines on stdout instead of logging them
    #[arg(long)]
    pub json: bool,
}
