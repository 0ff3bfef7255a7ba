#![forbid(unsafe_code)]

//! Full-match regex rule
//!
//! This module provides FieldPattern, which tests whether a whole input
//! matches a configured regular expression.

use crate::error::ValidationError;
use crate::types::Field;
use regex::Regex;

/// A configured pattern for one field, compiled for whole-input matching
///
/// The source is compiled once, wrapped as `^(?:source)$`, so a pattern
/// accepts an input only when it matches the entire string whether or not
/// the source carries its own anchors. A source that fails to compile is
/// kept as-is; the failure surfaces as [`ValidationError::InvalidPattern`]
/// on the first match attempt.
#[derive(Clone)]
pub struct FieldPattern {
    field: Field,
    source: String,
    compiled: Result<Regex, String>,
}

impl std::fmt::Debug for FieldPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldPattern")
            .field("field", &self.field)
            .field("source", &self.source)
            .field("compiled", &self.compiled.is_ok())
            .finish()
    }
}

impl FieldPattern {
    /// Compile a pattern for `field`
    ///
    /// Never fails; see the type documentation for how compile errors are
    /// reported.
    pub fn new(field: Field, source: impl Into<String>) -> Self {
        let source = source.into();
        let compiled = Regex::new(&anchored(&source)).map_err(|e| e.to_string());
        FieldPattern {
            field,
            source,
            compiled,
        }
    }

    /// Check that `source` compiles, without building a FieldPattern
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPattern` with the regex error message.
    pub fn check(field: Field, source: &str) -> Result<(), ValidationError> {
        Regex::new(&anchored(source))
            .map(|_| ())
            .map_err(|e| ValidationError::InvalidPattern {
                field,
                message: e.to_string(),
            })
    }

    /// The field this pattern guards
    pub fn field(&self) -> Field {
        self.field
    }

    /// The pattern as configured, before anchoring
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns whether `value` matches the pattern in full
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPattern` if the configured source
    /// did not compile.
    pub fn is_full_match(&self, value: &str) -> Result<bool, ValidationError> {
        match &self.compiled {
            Ok(regex) => Ok(regex.is_match(value)),
            Err(message) => Err(ValidationError::InvalidPattern {
                field: self.field,
                message: message.clone(),
            }),
        }
    }
}

/// Wrap a pattern so it only matches whole inputs
fn anchored(source: &str) -> String {
    format!("^(?:{})$", source)
}
