//! Runtime value classification.
//!
//! Given a value of unknown provenance, `typeis` answers "what kind of thing
//! is this" more sharply than `typeof` does: plain objects versus class
//! instances, empty versus non-empty collections, async generator functions
//! versus generator functions, numeric strings, safe integers, and so on.
//!
//! ```
//! use typeis::{Check, TypeName, Value, assert, classify, is};
//!
//! let value = Value::from("0x56");
//! assert_eq!(classify(&value), TypeName::String);
//! assert!(is::numeric_string(&value));
//! assert!(assert::number(&value).is_err());
//! assert_eq!(is::any([Check::Number, Check::String], &[value]), Ok(true));
//! ```
//!
//! The workspace is split into:
//! - `typeis-common` - category taxonomy, refinement descriptions, errors
//! - `typeis-value` - the value model being classified
//! - `typeis-core` - classifier, predicates, assertions, combinators

pub use typeis_core::{Check, CheckList, RangeBound, assert, check, classify, is};

pub use typeis_common::{
    ArgumentError, AssertionTypeDescription, Expected, Quantifier, TypeIsError, TypeMismatch,
    TypeName, limits,
};

pub use typeis_value::{
    Function, FunctionFlags, Object, ObjectBuilder, ObjectKind, PropertyKey, Symbol,
    TypedArrayKind, Value, numeric, realm,
};

// Tracing configuration (TYPEIS_LOG / TYPEIS_LOG_FORMAT)
pub mod tracing_config;
pub use tracing_config::{LogFormat, init_tracing};
#[cfg(test)]
#[path = "../tests/tracing_config_tests.rs"]
mod tracing_config_tests;
