//! Test utilities for user-validator integration tests

#![allow(dead_code)]

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Assert that an expression is `Err` matching a pattern
#[macro_export]
macro_rules! assert_rejected {
    ($expr:expr, $pattern:pat) => {
        match $expr {
            Err($pattern) => {}
            other => panic!(
                "assertion failed: expected Err({}), got {:?}",
                stringify!($pattern),
                other
            ),
        }
    };
}

/// A string of `len` ASCII letters
pub fn letters(len: usize) -> String {
    "abcdefghij".chars().cycle().take(len).collect()
}
