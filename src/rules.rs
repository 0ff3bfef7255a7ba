//! Rule primitives shared by the validator
//!
//! A validation method is a chain of guard clauses built from two kinds of
//! rule: a full-match [`FieldPattern`] and a pair of [`LengthBounds`].

pub mod length;
pub mod pattern;

pub use length::LengthBounds;
pub use pattern::FieldPattern;
