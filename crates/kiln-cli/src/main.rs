//! Kiln CLI entry point.
//!
//! Parses arguments, loads the project configuration, installs logging and
//! dispatches to the selected command.

use clap::Parser;
use kiln_cli::{cli, commands, error};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    commands::run(args).map_err(error::cli_error_to_miette)
}
