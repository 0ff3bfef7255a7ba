//! Diagnostic logging using `tracing` and `tracing-subscriber`
//!
//! The library emits `debug` events for each rejected rule and `trace`
//! events for accepted inputs. Events carry the field and rule code only;
//! input values are never logged.
//!
//! The binary installs a stderr subscriber with [`init_logging`]. `RUST_LOG`
//! takes precedence over the verbosity flag when it is set.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt::MakeWriter};

/// Configuration for logging behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    /// Level applied when `RUST_LOG` is unset
    pub level: Level,
    /// Whether to use ANSI colors in log lines
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// Create a `LogConfig` from the CLI `-v` count
    ///
    /// - 0: warn
    /// - 1 (`-v`): info
    /// - 2 (`-vv`): debug
    /// - 3+ (`-vvv`): trace
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }
}

/// Install the global subscriber, writing to stderr
///
/// Does nothing if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) {
    init_logging_with_writer(config, std::io::stderr);
}

/// Install the global subscriber with a custom writer
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let result = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(config.level))
        .with_writer(writer)
        .with_ansi(config.with_ansi)
        .with_target(false)
        .without_time()
        .try_init();

    if result.is_err() {
        tracing::debug!("global subscriber already installed");
    }
}

/// Build an `EnvFilter` from the given level, respecting `RUST_LOG`
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Dependencies stay at warn
        EnvFilter::new(format!(
            "warn,user_validator={level}",
            level = level.as_str().to_lowercase()
        ))
    })
}
