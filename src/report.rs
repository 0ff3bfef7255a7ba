#![forbid(unsafe_code)]

//! Outcome of validating one or more fields
//!
//! A [`CheckReport`] records the result for each field that was checked. A
//! multi-field check stops at the first rejected field, so a report holds at
//! most one error.

use crate::error::ValidationError;
use crate::types::Field;
use crate::validator::Validator;

/// Values submitted for a multi-field check
///
/// A `None` field is not checked at all; it is not treated as a null input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Submission<'a> {
    pub email: Option<&'a str>,
    pub username: Option<&'a str>,
    pub password: Option<&'a str>,
}

/// Result of checking a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOutcome {
    pub field: Field,
    pub error: Option<ValidationError>,
}

impl FieldOutcome {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Results of a check, in the order fields were validated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub outcomes: Vec<FieldOutcome>,
}

impl CheckReport {
    /// Report for a single validation call
    pub fn single(field: Field, result: Result<(), ValidationError>) -> Self {
        let mut report = CheckReport::default();
        report.record(field, result);
        report
    }

    /// Validate the submitted fields in the order email, username, password
    ///
    /// Stops at the first rejected field. The password is compared against
    /// the submitted username, if any.
    pub fn run(validator: &Validator, submission: &Submission<'_>) -> Self {
        let mut report = CheckReport::default();

        if let Some(email) = submission.email
            && !report.record(Field::Email, validator.validate_email(Some(email)))
        {
            return report;
        }

        if let Some(username) = submission.username
            && !report.record(Field::Username, validator.validate_username(Some(username)))
        {
            return report;
        }

        if let Some(password) = submission.password {
            report.record(
                Field::Password,
                validator.validate_password(submission.username, Some(password)),
            );
        }

        report
    }

    /// Whether every checked field was accepted
    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(FieldOutcome::is_valid)
    }

    /// The error that stopped the check, if any
    pub fn error(&self) -> Option<&ValidationError> {
        self.outcomes.iter().find_map(|o| o.error.as_ref())
    }

    /// Record a result, returning whether it was accepted
    fn record(&mut self, field: Field, result: Result<(), ValidationError>) -> bool {
        let accepted = result.is_ok();
        self.outcomes.push(FieldOutcome {
            field,
            error: result.err(),
        });
        accepted
    }
}
