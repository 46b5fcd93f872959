//! Common types for the typeis classification engine.
//!
//! This crate provides the vocabulary shared by every other typeis crate:
//! - Category taxonomy (`TypeName`)
//! - Refinement descriptions for assertion messages (`AssertionTypeDescription`)
//! - Numeric limits
//! - Failure kinds (`ArgumentError`, `TypeMismatch`, `TypeIsError`)

// Category taxonomy and tag-dispatch table
pub mod type_name;
pub use type_name::TypeName;
#[cfg(test)]
#[path = "../tests/type_name_tests.rs"]
mod type_name_tests;

// Human-facing refinement labels
pub mod description;
pub use description::AssertionTypeDescription;

pub mod limits;

pub mod errors;
pub use errors::{ArgumentError, Expected, Quantifier, TypeIsError, TypeMismatch};
#[cfg(test)]
#[path = "../tests/errors_tests.rs"]
mod errors_tests;
