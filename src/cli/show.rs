//! Config command implementation
//!
//! Prints the configuration the validation commands would use: the defaults
//! overridden by the loaded configuration file, with every key filled in.

use crate::cli::args::OutputFormat;
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS, load_config};
use crate::config::ValidatorConfig;
use crate::error::ConfigError;
use crate::output::JsonlFormatter;
use std::path::Path;

/// Run the config command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 2: Error
pub fn run_show_config(config_path: Option<&Path>, format: OutputFormat) -> i32 {
    match render_config(config_path, format) {
        Ok(output) => {
            print!("{}", output);
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

/// Render the effective configuration in the requested format
pub fn render_config(
    config_path: Option<&Path>,
    format: OutputFormat,
) -> Result<String, ConfigError> {
    let validator = load_config(config_path)?.to_validator();
    let effective = ValidatorConfig::effective(&validator);

    match format {
        OutputFormat::Human => effective.to_toml_string(),
        OutputFormat::Jsonl => Ok(JsonlFormatter::new().format_config(&effective)),
    }
}
