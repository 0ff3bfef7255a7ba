//! Common helper functions shared across CLI commands

use crate::cli::args::{ColorChoice, OutputFormat};
use crate::config::{DEFAULT_CONFIG_FILE, ValidatorConfig};
use crate::error::ConfigError;
use crate::output::{HumanFormatter, JsonlFormatter};
use crate::report::CheckReport;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use termcolor::StandardStream;

/// Every checked field was accepted
pub const EXIT_SUCCESS: i32 = 0;
/// A field was rejected
pub const EXIT_REJECTED: i32 = 1;
/// Configuration or I/O failure
pub const EXIT_ERROR: i32 = 2;

/// Load the validator configuration
///
/// An explicit `path` must exist. Without one, `user-validator.toml` in the
/// working directory is used if present and defaults apply otherwise.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed or validated.
pub(crate) fn load_config(path: Option<&Path>) -> Result<ValidatorConfig, ConfigError> {
    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading configuration");
            ValidatorConfig::load(path)
        }
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                tracing::info!(path = DEFAULT_CONFIG_FILE, "loading configuration");
                ValidatorConfig::load(default_path)
            } else {
                tracing::debug!("no configuration file, using defaults");
                Ok(ValidatorConfig::default())
            }
        }
    }
}

/// Map the CLI color flag onto termcolor, resolving `auto` against stdout
pub(crate) fn color_choice(choice: ColorChoice) -> termcolor::ColorChoice {
    match choice {
        ColorChoice::Always => termcolor::ColorChoice::Always,
        ColorChoice::Never => termcolor::ColorChoice::Never,
        ColorChoice::Auto => {
            if io::stdout().is_terminal() {
                termcolor::ColorChoice::Auto
            } else {
                termcolor::ColorChoice::Never
            }
        }
    }
}

/// Whether log lines on stderr should carry ANSI colors
pub fn log_ansi(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stderr().is_terminal(),
    }
}

/// Print a check report to stdout in the requested format
pub(crate) fn print_report(
    report: &CheckReport,
    format: OutputFormat,
    color: ColorChoice,
) -> io::Result<()> {
    match format {
        OutputFormat::Human => {
            let mut stdout = StandardStream::stdout(color_choice(color));
            HumanFormatter::new().write(report, &mut stdout)?;
            stdout.flush()
        }
        OutputFormat::Jsonl => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(JsonlFormatter::new().format(report).as_bytes())?;
            stdout.flush()
        }
    }
}

/// Exit code for a finished check
pub(crate) fn exit_code(report: &CheckReport) -> i32 {
    if report.is_valid() {
        EXIT_SUCCESS
    } else {
        EXIT_REJECTED
    }
}
