//! Length bound rule

use crate::types::{LengthViolation, char_length};
use serde::{Deserialize, Serialize};

/// Inclusive minimum and maximum length for a field
///
/// Bounds are not checked against each other: `min > max` is representable
/// and simply rejects every input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBounds {
    pub min: usize,
    pub max: usize,
}

impl LengthBounds {
    pub fn new(min: usize, max: usize) -> Self {
        LengthBounds { min, max }
    }

    /// Returns `Some(TooShort)` if `value` has fewer than `min` characters
    pub fn check_min(&self, value: &str) -> Option<LengthViolation> {
        (char_length(value) < self.min).then_some(LengthViolation::TooShort)
    }

    /// Returns `Some(TooLong)` if `value` has more than `max` characters
    pub fn check_max(&self, value: &str) -> Option<LengthViolation> {
        (char_length(value) > self.max).then_some(LengthViolation::TooLong)
    }

    /// Whether `min <= max`
    pub fn is_consistent(&self) -> bool {
        self.min <= self.max
    }
}
