//! Configuration file parsing and validation

pub mod validator_toml;

pub use validator_toml::{DEFAULT_CONFIG_FILE, EmailSettings, FieldSettings, ValidatorConfig};
