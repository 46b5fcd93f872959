//! Classification engine.
//!
//! This crate implements the predicate/assertion engine on top of the value
//! model in `typeis-value`:
//! - `classify` - resolve any value to exactly one `TypeName`
//! - `is` - one boolean predicate per category or refinement
//! - `Check` - the enum-indexed catalog of every predicate
//! - `assert` - predicates adapted to fail with a `TypeMismatch`
//! - `any` / `all` combinators and the range checker
//!
//! Data flows one way: taxonomy, classifier, predicates, then the assertion
//! wrapper and the combinators.

// Primitive classifier
pub mod classifier;
pub use classifier::classify;
#[cfg(test)]
#[path = "../tests/classifier_tests.rs"]
mod classifier_tests;

// Predicate set
pub mod is;
#[cfg(test)]
#[path = "../tests/predicate_tests.rs"]
mod predicate_tests;

pub mod range;
pub use range::RangeBound;
#[cfg(test)]
#[path = "../tests/range_tests.rs"]
mod range_tests;

pub mod check;
pub use check::Check;
#[cfg(test)]
#[path = "../tests/check_tests.rs"]
mod check_tests;

pub mod combinators;
pub use combinators::CheckList;
#[cfg(test)]
#[path = "../tests/combinators_tests.rs"]
mod combinators_tests;

// Assertion wrapper
pub mod assert;
#[cfg(test)]
#[path = "../tests/assert_tests.rs"]
mod assert_tests;

pub use typeis_common::{
    ArgumentError, AssertionTypeDescription, Expected, Quantifier, TypeIsError, TypeMismatch,
    TypeName,
};
pub use typeis_value::Value;
