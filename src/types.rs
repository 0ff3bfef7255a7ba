#![forbid(unsafe_code)]

//! Core domain types for user-validator
//!
//! This module defines the small vocabulary shared by the validator, the
//! error types and the output formatters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The user-supplied fields that can be validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Email,
    Username,
    Password,
}

impl Field {
    /// Returns the field name as a static string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Username => "username",
            Field::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of a length bound an input fell on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthViolation {
    TooShort,
    TooLong,
}

impl LengthViolation {
    /// Returns "short" or "long", used when building messages
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthViolation::TooShort => "short",
            LengthViolation::TooLong => "long",
        }
    }
}

/// Counts the characters of an input the way length bounds are measured
///
/// Lengths are Unicode scalar values, not bytes: `"€"` has length 1.
pub fn char_length(value: &str) -> usize {
    value.chars().count()
}
