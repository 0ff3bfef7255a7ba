//! Error types for user-validator
//!
//! This module defines the error types used throughout the crate. Every
//! validation rule has its own `ValidationError` variant so callers can match
//! on the rule that rejected an input.

use crate::types::{Field, LengthViolation};

/// A rejected input, one variant per validation rule
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// No email was supplied
    #[error("Email is null")]
    NullEmail,

    /// Email does not match the configured email pattern
    #[error("Email format is not valid")]
    InvalidEmailFormat,

    /// No username was supplied
    #[error("Username is null")]
    UsernameIsNull,

    /// Username does not match the configured username pattern
    #[error("Username has no correct format")]
    InvalidUsernameFormat,

    /// Username is outside the configured length bounds
    #[error("Username is too {}", .0.as_str())]
    InvalidUsernameLength(LengthViolation),

    /// No password was supplied
    #[error("Password is null")]
    NullPassword,

    /// Password contains characters the password pattern does not allow
    #[error("Invalid characters in password")]
    InvalidPasswordFormat,

    /// Password is identical to the username
    #[error("Password should be different than username")]
    InvalidPassword,

    /// Password is outside the configured length bounds
    #[error("Password too {}", .0.as_str())]
    InvalidPasswordLength(LengthViolation),

    /// A configured pattern could not be compiled
    #[error("Invalid {field} pattern: {message}")]
    InvalidPattern { field: Field, message: String },
}

impl ValidationError {
    /// The field this error was raised for
    pub fn field(&self) -> Field {
        match self {
            ValidationError::NullEmail | ValidationError::InvalidEmailFormat => Field::Email,
            ValidationError::UsernameIsNull
            | ValidationError::InvalidUsernameFormat
            | ValidationError::InvalidUsernameLength(_) => Field::Username,
            ValidationError::NullPassword
            | ValidationError::InvalidPasswordFormat
            | ValidationError::InvalidPassword
            | ValidationError::InvalidPasswordLength(_) => Field::Password,
            ValidationError::InvalidPattern { field, .. } => *field,
        }
    }

    /// Stable snake_case identifier of the violated rule
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::NullEmail => "null_email",
            ValidationError::InvalidEmailFormat => "invalid_email_format",
            ValidationError::UsernameIsNull => "username_is_null",
            ValidationError::InvalidUsernameFormat => "invalid_username_format",
            ValidationError::InvalidUsernameLength(_) => "invalid_username_length",
            ValidationError::NullPassword => "null_password",
            ValidationError::InvalidPasswordFormat => "invalid_password_format",
            ValidationError::InvalidPassword => "invalid_password",
            ValidationError::InvalidPasswordLength(_) => "invalid_password_length",
            ValidationError::InvalidPattern { .. } => "invalid_pattern",
        }
    }
}

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML or has unknown keys
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The configuration parsed but describes an unusable validator
    #[error("Invalid configuration: {0}")]
    Validation(String),
}
