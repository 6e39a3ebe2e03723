//! Logging infrastructure for the kiln CLI.
//!
//! Logs go to stderr so stdout stays clean for descriptor JSON.
//!
//! The filter is chosen in this order:
//! 1. `--verbose` / `--quiet`
//! 2. `RUST_LOG`
//! 3. `settings.log_level` from the project configuration
//! 4. info

use kiln_bundler::LogLevel;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const CRATES: [&str; 3] = ["kiln_bundler", "kiln_config", "kiln_cli"];

/// Filter directives applying `level` to the kiln crates.
pub fn directives(level: LogLevel) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={}", level.as_filter()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global subscriber.
///
/// `forced` comes from the command line and wins over everything;
/// `configured` is only used when `RUST_LOG` is unset.
pub fn init_logger(forced: Option<LogLevel>, configured: Option<LogLevel>, no_color: bool) {
    let filter = match forced {
        Some(level) => EnvFilter::new(directives(level)),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(directives(configured.unwrap_or_default()))),
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    // A second call (tests driving several commands) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Whether stderr supports color, honoring `NO_COLOR` and `FORCE_COLOR`.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::Term::stderr().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives_cover_every_crate() {
        assert_eq!(
            directives(LogLevel::Debug),
            "kiln_bundler=debug,kiln_config=debug,kiln_cli=debug"
        );
    }

    #[test]
    fn test_silent_turns_logging_off() {
        assert!(directives(LogLevel::Silent).split(',').all(|d| d.ends_with("=off")));
    }

    #[test]
    fn test_directives_parse_as_filter() {
        for level in [LogLevel::Error, LogLevel::Warn, LogLevel::Info] {
            let _filter = EnvFilter::new(directives(level));
        }
    }
}
