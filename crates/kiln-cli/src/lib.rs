//! Kiln CLI - bundle descriptors for component library releases.
//!
//! Thin command-line layer over `kiln-bundler`:
//!
//! - [`cli`] - argument definitions (clap derive)
//! - [`commands`] - `generate` and `filter-warnings`
//! - [`error`] - error types and miette conversion
//! - [`logger`] - tracing subscriber setup
//!
//! # Example
//!
//! ```rust,no_run
//! use clap::Parser;
//! use kiln_cli::{cli::Cli, commands};
//!
//! let args = Cli::parse_from(["kiln", "generate", "6.3.0", "css"]);
//! commands::run(args).unwrap();
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;

pub use error::{CliError, Result, cli_error_to_miette};
