#![forbid(unsafe_code)]

//! user-validator: configurable validation for email, username and password
//!
//! A [`Validator`] checks each field against a format pattern and, for
//! usernames and passwords, a length range. Validation stops at the first
//! violated rule and reports it as a distinct [`ValidationError`] variant.
//!
//! ```
//! use user_validator::{ValidationError, Validator};
//!
//! let validator = Validator::default();
//! assert!(validator.validate_email(Some("alice@example.com")).is_ok());
//! assert_eq!(
//!     validator.validate_password(Some("alice"), Some("alice")),
//!     Err(ValidationError::InvalidPassword)
//! );
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod report;
pub mod rules;
pub mod types;
pub mod validator;

// Re-export error types for convenient access
pub use error::{ConfigError, ValidationError};

// Re-export core domain types for convenient access
pub use config::ValidatorConfig;
pub use types::{Field, LengthViolation};
pub use validator::{Validator, ValidatorBuilder};
