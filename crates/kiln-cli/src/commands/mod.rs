//! Command implementations for the kiln CLI.
//!
//! - [`generate`] - print bundle descriptors
//! - [`filter_warnings`] - apply a warning policy to engine output
//!
//! [`run`] loads the project configuration once, installs logging from the
//! global flags and configured settings, then hands both to the command.

pub mod filter_warnings;
pub mod generate;

pub use filter_warnings::execute as filter_warnings_execute;
pub use generate::execute as generate_execute;

use kiln_bundler::LogLevel;
use kiln_config::{ConfigDiscovery, ConfigValidator, FsValidator, KilnConfig};

use crate::cli::{Cli, Command};
use crate::error::{CliError, Result};
use crate::logger;

/// Run the parsed command line.
pub fn run(args: Cli) -> Result<()> {
    let config = load_config(&args)?;

    let configured = configured_level(&config)?;
    logger::init_logger(
        args.log_level_override(),
        configured,
        args.no_color || config.settings.no_color,
    );
    tracing::debug!(root = %config.layout.root.display(), "configuration loaded");

    match args.command {
        Command::Generate(generate_args) => generate_execute(generate_args, config),
        Command::FilterWarnings(filter_args) => filter_warnings_execute(filter_args, &config),
    }
}

/// Load and validate configuration for `--root`, from `--config` when given.
pub fn load_config(args: &Cli) -> Result<KilnConfig> {
    let discovery = ConfigDiscovery::new(&args.root);
    let config = match &args.config {
        Some(path) => discovery.load_from(path)?,
        None => discovery.load()?,
    };
    FsValidator.validate(&config)?;
    Ok(config)
}

fn configured_level(config: &KilnConfig) -> Result<Option<LogLevel>> {
    config
        .settings
        .log_level
        .as_deref()
        .map(str::parse::<LogLevel>)
        .transpose()
        .map_err(|e: String| CliError::InvalidArgument(format!("settings.log_level: {e}")))
}
