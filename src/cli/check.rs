//! Validation commands
//!
//! Implements `email`, `username`, `password` and `check`. Each loads the
//! configuration, builds a Validator, validates the given values and prints
//! a report.

use crate::cli::args::{ColorChoice, OutputFormat};
use crate::cli::common::{EXIT_ERROR, exit_code, load_config, print_report};
use crate::report::{CheckReport, Submission};
use crate::types::Field;
use crate::validator::Validator;
use std::path::Path;

/// What a validation command was asked to check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    Email(&'a str),
    Username(&'a str),
    Password {
        username: Option<&'a str>,
        password: &'a str,
    },
    Submission(Submission<'a>),
}

/// Options shared by all validation commands
#[derive(Debug, Clone, Copy)]
pub struct CheckOptions<'a> {
    pub config: Option<&'a Path>,
    pub format: OutputFormat,
    pub color: ColorChoice,
}

/// Run a validation command
///
/// # Returns
///
/// Exit code:
/// - 0: every checked field was accepted
/// - 1: a field was rejected
/// - 2: configuration or output error
pub fn run_check(target: Target<'_>, options: CheckOptions<'_>) -> i32 {
    let config = match load_config(options.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return EXIT_ERROR;
        }
    };

    let validator = config.to_validator();
    let report = validate(&validator, target);

    if let Some(error) = report.error() {
        tracing::info!(field = %error.field(), rule = error.code(), "validation failed");
    }

    if let Err(e) = print_report(&report, options.format, options.color) {
        eprintln!("Error: failed to write output: {}", e);
        return EXIT_ERROR;
    }

    exit_code(&report)
}

/// Validate `target` with `validator`
pub fn validate(validator: &Validator, target: Target<'_>) -> CheckReport {
    match target {
        Target::Email(email) => {
            CheckReport::single(Field::Email, validator.validate_email(Some(email)))
        }
        Target::Username(username) => {
            CheckReport::single(Field::Username, validator.validate_username(Some(username)))
        }
        Target::Password { username, password } => CheckReport::single(
            Field::Password,
            validator.validate_password(username, Some(password)),
        ),
        Target::Submission(submission) => CheckReport::run(validator, &submission),
    }
}
