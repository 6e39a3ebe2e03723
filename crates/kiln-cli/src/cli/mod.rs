//! Command-line interface definition for kiln.
//!
//! # Command Structure
//!
//! - `kiln generate <VERSION> [ENV]` - print the bundle descriptors
//! - `kiln filter-warnings` - apply a target's warning policy to engine output

mod commands;
pub mod enums;

use clap::Parser;
use kiln_bundler::LogLevel;
use std::path::PathBuf;

pub use commands::{Command, FilterWarningsArgs, GenerateArgs};
pub use enums::Family;

/// Kiln - bundle descriptors for component library releases
#[derive(Parser, Debug)]
#[command(
    name = "kiln",
    version,
    about = "Bundle descriptors for component library releases",
    long_about = "Kiln decides what a release build of the component library produces.\n\
                  It discovers entry points, assembles per-target transform pipelines and\n\
                  prints them as descriptors for the bundling engine to execute."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Project root
    #[arg(long, global = true, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Explicit config file (kiln.toml or package.json), relative to the root
    ///
    /// When omitted, kiln.toml is used if present, then the "kiln" field of
    /// package.json, then built-in defaults.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Log level forced by `--verbose` or `--quiet`.
    pub fn log_level_override(&self) -> Option<LogLevel> {
        if self.verbose {
            Some(LogLevel::Debug)
        } else if self.quiet {
            Some(LogLevel::Error)
        } else {
            None
        }
    }
}
