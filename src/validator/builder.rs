//! Staged construction of a Validator

use super::Validator;
use crate::rules::{FieldPattern, LengthBounds};
use crate::types::Field;

/// Default email pattern
pub const DEFAULT_EMAIL_PATTERN: &str = concat!(
    "^[A-Za-z0-9+._%-]{1,256}",
    "@",
    "[A-Za-z0-9][A-Za-z0-9-]{0,64}",
    r"(\.[A-Za-z0-9][A-Za-z0-9-]{1,25})+$",
);

/// Default username pattern
pub const DEFAULT_USERNAME_PATTERN: &str = "^[-_A-Za-z0-9]*$";

pub const DEFAULT_USERNAME_MIN_LENGTH: usize = 3;
pub const DEFAULT_USERNAME_MAX_LENGTH: usize = 25;

/// Default password pattern
pub const DEFAULT_PASSWORD_PATTERN: &str = "^[A-Za-z0-9_.,&%€@#~]*$";

pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 6;
pub const DEFAULT_PASSWORD_MAX_LENGTH: usize = 20;

/// Builder for [`Validator`]
///
/// Starts from the defaults above. Each setter overwrites one value and
/// returns the builder, so calls chain:
///
/// ```
/// use user_validator::Validator;
///
/// let validator = Validator::builder()
///     .username_min_length(5)
///     .password_max_length(64)
///     .build();
/// assert!(validator.validate_username(Some("abcd")).is_err());
/// ```
///
/// Overrides are not checked against each other or compiled here; an
/// uncompilable pattern is reported when its field is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorBuilder {
    email_pattern: String,
    username_pattern: String,
    username_min_length: usize,
    username_max_length: usize,
    password_pattern: String,
    password_min_length: usize,
    password_max_length: usize,
}

impl Default for ValidatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidatorBuilder {
    /// Create a builder holding the default configuration
    pub fn new() -> Self {
        ValidatorBuilder {
            email_pattern: DEFAULT_EMAIL_PATTERN.to_string(),
            username_pattern: DEFAULT_USERNAME_PATTERN.to_string(),
            username_min_length: DEFAULT_USERNAME_MIN_LENGTH,
            username_max_length: DEFAULT_USERNAME_MAX_LENGTH,
            password_pattern: DEFAULT_PASSWORD_PATTERN.to_string(),
            password_min_length: DEFAULT_PASSWORD_MIN_LENGTH,
            password_max_length: DEFAULT_PASSWORD_MAX_LENGTH,
        }
    }

    #[must_use]
    pub fn email_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.email_pattern = pattern.into();
        self
    }

    #[must_use]
    pub fn username_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.username_pattern = pattern.into();
        self
    }

    #[must_use]
    pub fn password_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.password_pattern = pattern.into();
        self
    }

    #[must_use]
    pub fn username_min_length(mut self, length: usize) -> Self {
        self.username_min_length = length;
        self
    }

    #[must_use]
    pub fn username_max_length(mut self, length: usize) -> Self {
        self.username_max_length = length;
        self
    }

    #[must_use]
    pub fn password_min_length(mut self, length: usize) -> Self {
        self.password_min_length = length;
        self
    }

    #[must_use]
    pub fn password_max_length(mut self, length: usize) -> Self {
        self.password_max_length = length;
        self
    }

    /// Snapshot the staged values into an immutable Validator
    pub fn build(&self) -> Validator {
        Validator {
            email: FieldPattern::new(Field::Email, self.email_pattern.as_str()),
            username: FieldPattern::new(Field::Username, self.username_pattern.as_str()),
            username_length: LengthBounds::new(self.username_min_length, self.username_max_length),
            password: FieldPattern::new(Field::Password, self.password_pattern.as_str()),
            password_length: LengthBounds::new(self.password_min_length, self.password_max_length),
        }
    }
}
