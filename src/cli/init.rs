//! Initialize a user-validator configuration
//!
//! Writes a `user-validator.toml` listing every setting with its default
//! value commented out.

use crate::config::DEFAULT_CONFIG_FILE;
use crate::validator::builder::{
    DEFAULT_PASSWORD_MAX_LENGTH, DEFAULT_PASSWORD_MIN_LENGTH, DEFAULT_USERNAME_MAX_LENGTH,
    DEFAULT_USERNAME_MIN_LENGTH,
};
use std::fs;
use std::path::Path;

/// Default content for user-validator.toml
///
/// Patterns are TOML literal strings so backslashes need no escaping.
fn default_config_toml() -> String {
    format!(
        r#"# user-validator configuration
# Every key is optional. Uncomment a key to override its default.
# Patterns must match the whole input.

[email]
# pattern = '^[A-Za-z0-9+._%-]{{1,256}}@[A-Za-z0-9][A-Za-z0-9-]{{0,64}}(\.[A-Za-z0-9][A-Za-z0-9-]{{1,25}})+$'

[username]
# pattern = '^[-_A-Za-z0-9]*$'
# min_length = {username_min}
# max_length = {username_max}

[password]
# pattern = '^[A-Za-z0-9_.,&%€@#~]*$'
# min_length = {password_min}
# max_length = {password_max}
"#,
        username_min = DEFAULT_USERNAME_MIN_LENGTH,
        username_max = DEFAULT_USERNAME_MAX_LENGTH,
        password_min = DEFAULT_PASSWORD_MIN_LENGTH,
        password_max = DEFAULT_PASSWORD_MAX_LENGTH,
    )
}

/// Error type for init command
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Path error
    #[error("Path error: {0}")]
    Path(String),
}

/// What the init command did with the configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    Skipped,
    Overwritten,
}

/// Result of init command
#[derive(Debug, PartialEq, Eq)]
pub struct InitResult {
    /// The configuration file path
    pub path: String,
    pub outcome: InitOutcome,
}

/// Run the init command
///
/// # Arguments
/// * `config` - File to write; `user-validator.toml` in the current
///   directory when `None`
/// * `force` - If true, overwrite an existing file. If false, leave it alone.
///
/// # Returns
/// * `Ok(InitResult)` - Whether the file was created, skipped or overwritten
/// * `Err(InitError)` - If an I/O error occurred
pub fn run_init(config: Option<&Path>, force: bool) -> Result<InitResult, InitError> {
    run_init_at(config.unwrap_or(Path::new(DEFAULT_CONFIG_FILE)), force)
}

/// Run the init command, writing to `path`
pub fn run_init_at(path: &Path, force: bool) -> Result<InitResult, InitError> {
    let path_str = path_to_string(path)?;

    if path.is_dir() {
        return Err(InitError::Path(format!(
            "Path '{}' exists but is a directory",
            path_str
        )));
    }

    let outcome = if path.exists() {
        if force {
            fs::write(path, default_config_toml())?;
            InitOutcome::Overwritten
        } else {
            InitOutcome::Skipped
        }
    } else {
        fs::write(path, default_config_toml())?;
        InitOutcome::Created
    };

    tracing::debug!(path = %path_str, ?outcome, "init finished");

    Ok(InitResult {
        path: path_str,
        outcome,
    })
}

/// Convert a path to a string representation
fn path_to_string(path: &Path) -> Result<String, InitError> {
    path.to_str()
        .map(|s| s.to_string())
        .ok_or_else(|| InitError::Path(format!("Invalid UTF-8 in path: {:?}", path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidatorConfig;
    use crate::validator::builder::{
        DEFAULT_EMAIL_PATTERN, DEFAULT_PASSWORD_PATTERN, DEFAULT_USERNAME_PATTERN,
    };
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);

        let result = run_init_at(&path, false).expect("init should succeed");
        assert_eq!(result.outcome, InitOutcome::Created);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[username]"));
        assert!(content.contains("# min_length = 3"));
        assert!(content.contains("# max_length = 20"));
    }

    #[test]
    fn test_init_skips_existing_file_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "existing content").unwrap();

        let result = run_init_at(&path, false).expect("init should succeed");
        assert_eq!(result.outcome, InitOutcome::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "existing content");
    }

    #[test]
    fn test_init_overwrites_with_force() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "existing content").unwrap();

        let result = run_init_at(&path, true).expect("init should succeed");
        assert_eq!(result.outcome, InitOutcome::Overwritten);
        assert!(fs::read_to_string(&path).unwrap().contains("[password]"));
    }

    #[test]
    fn test_run_init_writes_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");

        let result = run_init(Some(&path), false).expect("init should succeed");
        assert_eq!(result.outcome, InitOutcome::Created);
        assert!(path.exists());
        assert!(!temp_dir.path().join(DEFAULT_CONFIG_FILE).exists());
    }

    #[test]
    fn test_init_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = run_init_at(temp_dir.path(), true);
        assert!(matches!(result, Err(InitError::Path(_))));
    }

    #[test]
    fn test_default_content_parses_to_defaults() {
        let config = ValidatorConfig::parse(&default_config_toml()).unwrap();
        assert_eq!(config, ValidatorConfig::default());
    }

    #[test]
    fn test_commented_patterns_match_defaults() {
        // Uncommenting every line must reproduce the default validator
        let uncommented = default_config_toml()
            .replace("# pattern", "pattern")
            .replace("# min", "min")
            .replace("# max", "max");
        let validator = ValidatorConfig::parse(&uncommented).unwrap().to_validator();

        assert_eq!(validator.email_pattern(), DEFAULT_EMAIL_PATTERN);
        assert_eq!(validator.username_pattern(), DEFAULT_USERNAME_PATTERN);
        assert_eq!(validator.password_pattern(), DEFAULT_PASSWORD_PATTERN);
        assert_eq!(validator.username_length().min, DEFAULT_USERNAME_MIN_LENGTH);
        assert_eq!(validator.password_length().max, DEFAULT_PASSWORD_MAX_LENGTH);
    }
}
