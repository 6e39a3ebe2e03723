//! Subscriber setup for binaries embedding kiln (`logging` feature).
//!
//! The library itself only emits `tracing` events; this module is for
//! applications that want a ready-made compact stderr subscriber.

use std::fmt;
use std::str::FromStr;
use std::sync::Once;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INSTALLED: Once = Once::new();

/// Verbosity of kiln output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Silent,
    Error,
    Warn,
    /// Phase messages (clearing, wrappers, bundles)
    #[default]
    Info,
    /// Per-descriptor and per-file detail
    Debug,
}

impl LogLevel {
    /// Directive value understood by `EnvFilter`.
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Silent => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Silent => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = match s.trim().to_ascii_lowercase().as_str() {
            "silent" | "off" => LogLevel::Silent,
            "error" => LogLevel::Error,
            "warn" | "warning" => LogLevel::Warn,
            "info" => LogLevel::Info,
            "debug" | "trace" => LogLevel::Debug,
            other => return Err(format!("unknown log level '{other}'")),
        };
        Ok(level)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter())
    }
}

/// Install a compact stderr subscriber at `level`.
///
/// `RUST_LOG` directives are layered on top. Only the first call in a
/// process has an effect, and nothing is installed when another global
/// subscriber already exists.
///
/// ```rust,no_run
/// use kiln_bundler::{LogLevel, init_logging};
///
/// init_logging(LogLevel::Debug);
/// ```
pub fn init_logging(level: LogLevel) {
    install(
        EnvFilter::builder()
            .with_default_directive(LevelFilter::from(level).into())
            .from_env_lossy(),
    );
}

/// Install a subscriber driven by `RUST_LOG` alone, defaulting to info.
pub fn init_logging_from_env() {
    init_logging(LogLevel::default());
}

fn install(filter: EnvFilter) {
    INSTALLED.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .compact()
                    .with_target(false)
                    .without_time(),
            )
            .try_init();
    });
}
