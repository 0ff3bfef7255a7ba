//! Parsing and validation for user-validator.toml configuration files
//!
//! Every table and key is optional. A key that is present overrides the
//! corresponding [`ValidatorBuilder`] default; a missing key keeps it.

use crate::error::ConfigError;
use crate::rules::FieldPattern;
use crate::types::Field;
use crate::validator::{Validator, ValidatorBuilder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "user-validator.toml";

/// Main configuration struct for user-validator.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Email rules
    #[serde(default)]
    pub email: EmailSettings,

    /// Username rules
    #[serde(default)]
    pub username: FieldSettings,

    /// Password rules
    #[serde(default)]
    pub password: FieldSettings,
}

/// `[email]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmailSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// `[username]` and `[password]` sections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

impl ValidatorConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: ValidatorConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// Unlike the builder, a configuration file must describe a usable
    /// validator: every pattern it sets must compile and each length range
    /// must be non-empty once defaults are filled in.
    fn validate(&self) -> Result<(), ConfigError> {
        let patterns = [
            (Field::Email, &self.email.pattern),
            (Field::Username, &self.username.pattern),
            (Field::Password, &self.password.pattern),
        ];
        for (field, pattern) in patterns {
            if let Some(pattern) = pattern {
                FieldPattern::check(field, pattern)
                    .map_err(|e| ConfigError::Validation(e.to_string()))?;
            }
        }

        let validator = self.to_validator();
        let bounds = [
            (Field::Username, validator.username_length()),
            (Field::Password, validator.password_length()),
        ];
        for (field, bounds) in bounds {
            if !bounds.is_consistent() {
                return Err(ConfigError::Validation(format!(
                    "{} min_length ({}) is greater than max_length ({})",
                    field, bounds.min, bounds.max
                )));
            }
        }

        Ok(())
    }

    /// Apply the keys set in this configuration onto `builder`
    pub fn apply(&self, mut builder: ValidatorBuilder) -> ValidatorBuilder {
        if let Some(pattern) = &self.email.pattern {
            builder = builder.email_pattern(pattern.as_str());
        }

        if let Some(pattern) = &self.username.pattern {
            builder = builder.username_pattern(pattern.as_str());
        }
        if let Some(length) = self.username.min_length {
            builder = builder.username_min_length(length);
        }
        if let Some(length) = self.username.max_length {
            builder = builder.username_max_length(length);
        }

        if let Some(pattern) = &self.password.pattern {
            builder = builder.password_pattern(pattern.as_str());
        }
        if let Some(length) = self.password.min_length {
            builder = builder.password_min_length(length);
        }
        if let Some(length) = self.password.max_length {
            builder = builder.password_max_length(length);
        }

        builder
    }

    /// Build a Validator from the defaults overridden by this configuration
    pub fn to_validator(&self) -> Validator {
        self.apply(ValidatorBuilder::new()).build()
    }

    /// A fully populated configuration describing `validator`
    pub fn effective(validator: &Validator) -> Self {
        let username = validator.username_length();
        let password = validator.password_length();
        ValidatorConfig {
            email: EmailSettings {
                pattern: Some(validator.email_pattern().to_string()),
            },
            username: FieldSettings {
                pattern: Some(validator.username_pattern().to_string()),
                min_length: Some(username.min),
                max_length: Some(username.max),
            },
            password: FieldSettings {
                pattern: Some(validator.password_pattern().to_string()),
                min_length: Some(password.min),
                max_length: Some(password.max),
            },
        }
    }

    /// Render this configuration as TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}
