#![forbid(unsafe_code)]

//! Email, username and password validation
//!
//! Each `validate_*` method is a linear chain of guard clauses. The first
//! failing guard returns its error and no later guard runs. Every guard but
//! the last is a no-op when the input is absent, so a `None` input is always
//! reported by the final null check and never as a format or length error.

pub mod builder;

pub use builder::ValidatorBuilder;

use crate::error::ValidationError;
use crate::rules::{FieldPattern, LengthBounds};
use crate::types::Field;

/// Immutable set of validation rules
///
/// Built with [`ValidatorBuilder`]. Patterns are compiled once at build
/// time; a Validator can be shared across threads and reused freely.
#[derive(Debug, Clone)]
pub struct Validator {
    pub(crate) email: FieldPattern,
    pub(crate) username: FieldPattern,
    pub(crate) username_length: LengthBounds,
    pub(crate) password: FieldPattern,
    pub(crate) password_length: LengthBounds,
}

impl Default for Validator {
    fn default() -> Self {
        ValidatorBuilder::new().build()
    }
}

impl Validator {
    /// Start building a Validator from the default rules
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    pub fn email_pattern(&self) -> &str {
        self.email.as_str()
    }

    pub fn username_pattern(&self) -> &str {
        self.username.as_str()
    }

    pub fn username_length(&self) -> LengthBounds {
        self.username_length
    }

    pub fn password_pattern(&self) -> &str {
        self.password.as_str()
    }

    pub fn password_length(&self) -> LengthBounds {
        self.password_length
    }

    /// Validate an email address
    ///
    /// # Errors
    ///
    /// - `InvalidEmailFormat` if the email does not match the email pattern
    /// - `NullEmail` if no email was given
    /// - `InvalidPattern` if the email pattern does not compile
    pub fn validate_email(&self, email: Option<&str>) -> Result<(), ValidationError> {
        if let Some(email) = email
            && !self.email.is_full_match(email)?
        {
            return reject(ValidationError::InvalidEmailFormat);
        }

        if email.is_none() {
            return reject(ValidationError::NullEmail);
        }

        accept(Field::Email)
    }

    /// Validate a username
    ///
    /// Checks run in this order: format, minimum length, maximum length,
    /// presence.
    ///
    /// # Errors
    ///
    /// - `InvalidUsernameFormat` if the username does not match the pattern
    /// - `InvalidUsernameLength` if it is shorter than the minimum or longer
    ///   than the maximum
    /// - `UsernameIsNull` if no username was given
    /// - `InvalidPattern` if the username pattern does not compile
    pub fn validate_username(&self, username: Option<&str>) -> Result<(), ValidationError> {
        if let Some(username) = username {
            if !self.username.is_full_match(username)? {
                return reject(ValidationError::InvalidUsernameFormat);
            }

            if let Some(violation) = self.username_length.check_min(username) {
                return reject(ValidationError::InvalidUsernameLength(violation));
            }

            if let Some(violation) = self.username_length.check_max(username) {
                return reject(ValidationError::InvalidUsernameLength(violation));
            }
        }

        if username.is_none() {
            return reject(ValidationError::UsernameIsNull);
        }

        accept(Field::Username)
    }

    /// Validate a password for the given username
    ///
    /// Checks run in this order: character set, difference from the
    /// username, maximum length, minimum length, presence. The username
    /// itself is not validated.
    ///
    /// # Errors
    ///
    /// - `InvalidPasswordFormat` if the password has characters outside the
    ///   password pattern
    /// - `InvalidPassword` if the password equals the username
    /// - `InvalidPasswordLength` if it is longer than the maximum or shorter
    ///   than the minimum
    /// - `NullPassword` if no password was given
    /// - `InvalidPattern` if the password pattern does not compile
    pub fn validate_password(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<(), ValidationError> {
        if let Some(password) = password {
            if !self.password.is_full_match(password)? {
                return reject(ValidationError::InvalidPasswordFormat);
            }

            if username == Some(password) {
                return reject(ValidationError::InvalidPassword);
            }

            if let Some(violation) = self.password_length.check_max(password) {
                return reject(ValidationError::InvalidPasswordLength(violation));
            }

            if let Some(violation) = self.password_length.check_min(password) {
                return reject(ValidationError::InvalidPasswordLength(violation));
            }
        }

        if password.is_none() {
            return reject(ValidationError::NullPassword);
        }

        accept(Field::Password)
    }
}

/// Log a rejection and return it
///
/// Only the field and rule are logged, never the input.
fn reject(error: ValidationError) -> Result<(), ValidationError> {
    tracing::debug!(field = %error.field(), rule = error.code(), "input rejected");
    Err(error)
}

fn accept(field: Field) -> Result<(), ValidationError> {
    tracing::trace!(%field, "input accepted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LengthViolation;

    fn default_validator() -> Validator {
        Validator::default()
    }

    // Email

    #[test]
    fn test_valid_emails() {
        let validator = default_validator();
        for email in [
            "user@example.com",
            "first.last+tag@sub.example.org",
            "a_b%c-d@x1.io",
            "UPPER@EXAMPLE.COM",
        ] {
            assert_eq!(validator.validate_email(Some(email)), Ok(()), "{}", email);
        }
    }

    #[test]
    fn test_null_email() {
        assert_eq!(
            default_validator().validate_email(None),
            Err(ValidationError::NullEmail)
        );
    }

    #[test]
    fn test_malformed_emails() {
        let validator = default_validator();
        for email in [
            "not-an-email",
            "",
            "user@",
            "@example.com",
            "user@example",
            "user@example.c",
            "user name@example.com",
            "user@-example.com",
        ] {
            assert_eq!(
                validator.validate_email(Some(email)),
                Err(ValidationError::InvalidEmailFormat),
                "{}",
                email
            );
        }
    }

    #[test]
    fn test_email_rejects_surrounding_junk() {
        let validator = default_validator();
        assert_eq!(
            validator.validate_email(Some("<user@example.com>")),
            Err(ValidationError::InvalidEmailFormat)
        );
        assert_eq!(
            validator.validate_email(Some("user@example.com ")),
            Err(ValidationError::InvalidEmailFormat)
        );
    }

    // Username

    #[test]
    fn test_valid_usernames() {
        let validator = default_validator();
        let longest = "a".repeat(25);
        for username in ["abc", "alice", "bob_123", "dash-name", longest.as_str()] {
            assert_eq!(
                validator.validate_username(Some(username)),
                Ok(()),
                "{}",
                username
            );
        }
    }

    #[test]
    fn test_username_too_short() {
        assert_eq!(
            default_validator().validate_username(Some("ab")),
            Err(ValidationError::InvalidUsernameLength(
                LengthViolation::TooShort
            ))
        );
    }

    #[test]
    fn test_username_too_long() {
        let username = "a".repeat(26);
        assert_eq!(
            default_validator().validate_username(Some(&username)),
            Err(ValidationError::InvalidUsernameLength(
                LengthViolation::TooLong
            ))
        );
    }

    #[test]
    fn test_username_bad_format() {
        assert_eq!(
            default_validator().validate_username(Some("bad name!")),
            Err(ValidationError::InvalidUsernameFormat)
        );
    }

    #[test]
    fn test_username_format_checked_before_length() {
        // Too short and badly formatted: format wins
        assert_eq!(
            default_validator().validate_username(Some("a!")),
            Err(ValidationError::InvalidUsernameFormat)
        );
    }

    #[test]
    fn test_null_username() {
        assert_eq!(
            default_validator().validate_username(None),
            Err(ValidationError::UsernameIsNull)
        );
    }

    #[test]
    fn test_empty_username_is_too_short_not_null() {
        assert_eq!(
            default_validator().validate_username(Some("")),
            Err(ValidationError::InvalidUsernameLength(
                LengthViolation::TooShort
            ))
        );
    }

    // Password

    #[test]
    fn test_valid_password() {
        assert_eq!(
            default_validator().validate_password(Some("alice"), Some("Secret1")),
            Ok(())
        );
    }

    #[test]
    fn test_password_allows_special_set() {
        assert_eq!(
            default_validator().validate_password(Some("alice"), Some("a_.,&%€@#~")),
            Ok(())
        );
    }

    #[test]
    fn test_password_equal_to_username() {
        assert_eq!(
            default_validator().validate_password(Some("alice1"), Some("alice1")),
            Err(ValidationError::InvalidPassword)
        );
    }

    #[test]
    fn test_password_equal_to_short_username_reports_equality_first() {
        // "alice" is also too short; equality is checked before length
        assert_eq!(
            default_validator().validate_password(Some("alice"), Some("alice")),
            Err(ValidationError::InvalidPassword)
        );
    }

    #[test]
    fn test_password_equality_is_case_sensitive() {
        assert_eq!(
            default_validator().validate_password(Some("Alice1"), Some("alice1")),
            Ok(())
        );
    }

    #[test]
    fn test_password_too_short() {
        assert_eq!(
            default_validator().validate_password(Some("alice"), Some("short")),
            Err(ValidationError::InvalidPasswordLength(
                LengthViolation::TooShort
            ))
        );
    }

    #[test]
    fn test_password_too_long() {
        let password = "p".repeat(21);
        assert_eq!(
            default_validator().validate_password(Some("alice"), Some(&password)),
            Err(ValidationError::InvalidPasswordLength(
                LengthViolation::TooLong
            ))
        );
    }

    #[test]
    fn test_password_bad_format() {
        assert_eq!(
            default_validator().validate_password(Some("alice"), Some("bad pwd")),
            Err(ValidationError::InvalidPasswordFormat)
        );
    }

    #[test]
    fn test_null_password() {
        assert_eq!(
            default_validator().validate_password(Some("alice"), None),
            Err(ValidationError::NullPassword)
        );
        assert_eq!(
            default_validator().validate_password(None, None),
            Err(ValidationError::NullPassword)
        );
    }

    #[test]
    fn test_password_without_username() {
        assert_eq!(
            default_validator().validate_password(None, Some("Secret1")),
            Ok(())
        );
    }

    #[test]
    fn test_max_checked_before_min_when_inverted() {
        let validator = Validator::builder()
            .password_min_length(30)
            .password_max_length(2)
            .build();
        assert_eq!(
            validator.validate_password(None, Some("abcdef")),
            Err(ValidationError::InvalidPasswordLength(
                LengthViolation::TooLong
            ))
        );
    }

    #[test]
    fn test_min_checked_before_max_for_username_when_inverted() {
        let validator = Validator::builder()
            .username_min_length(30)
            .username_max_length(2)
            .build();
        assert_eq!(
            validator.validate_username(Some("abcdef")),
            Err(ValidationError::InvalidUsernameLength(
                LengthViolation::TooShort
            ))
        );
    }

    // Configuration

    #[test]
    fn test_builder_override_takes_effect() {
        let default = default_validator();
        let strict = Validator::builder().username_min_length(5).build();

        assert_eq!(default.validate_username(Some("abcd")), Ok(()));
        assert_eq!(
            strict.validate_username(Some("abcd")),
            Err(ValidationError::InvalidUsernameLength(
                LengthViolation::TooShort
            ))
        );
    }

    #[test]
    fn test_invalid_pattern_reported_on_use() {
        let validator = Validator::builder().username_pattern("[").build();
        assert!(matches!(
            validator.validate_username(Some("alice")),
            Err(ValidationError::InvalidPattern {
                field: Field::Username,
                ..
            })
        ));
        // Null check does not need the pattern
        assert_eq!(
            validator.validate_username(None),
            Err(ValidationError::UsernameIsNull)
        );
        // Other fields are unaffected
        assert_eq!(validator.validate_email(Some("user@example.com")), Ok(()));
    }

    #[test]
    fn test_repeated_calls_are_stable() {
        let validator = default_validator();
        for _ in 0..3 {
            assert_eq!(
                validator.validate_username(Some("ab")),
                Err(ValidationError::InvalidUsernameLength(
                    LengthViolation::TooShort
                ))
            );
            assert_eq!(validator.validate_email(Some("user@example.com")), Ok(()));
        }
    }

    #[test]
    fn test_validator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Validator>();
    }
}
