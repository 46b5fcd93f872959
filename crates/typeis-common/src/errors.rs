//! Failure kinds.
//!
//! There are exactly two: caller misuse ([`ArgumentError`]) and an assertion
//! whose predicate returned false ([`TypeMismatch`]). Boolean predicate forms
//! never produce a `TypeMismatch`.

use crate::{AssertionTypeDescription, TypeName};
use std::borrow::Cow;
use std::fmt;

/// What an assertion expected to see.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expected {
    /// A plain category.
    Type(TypeName),
    /// A refinement of a category.
    Description(AssertionTypeDescription),
    /// A caller-supplied predicate, by name.
    Named(Cow<'static, str>),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Type(name) => f.write_str(name.as_str()),
            Expected::Description(description) => f.write_str(description.as_str()),
            Expected::Named(name) => f.write_str(name),
        }
    }
}

impl From<TypeName> for Expected {
    fn from(name: TypeName) -> Self {
        Expected::Type(name)
    }
}

impl From<AssertionTypeDescription> for Expected {
    fn from(description: AssertionTypeDescription) -> Self {
        Expected::Description(description)
    }
}

/// How the expectation was quantified over the supplied values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quantifier {
    /// A single value checked by a single predicate.
    One,
    /// At least one predicate held for at least one value.
    Any,
    /// The predicate held for every value.
    All,
}

/// Caller misuse, detected before or instead of classification.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("range bound must contain exactly 2 numbers, received {len}")]
    RangeArity { len: usize },

    #[error("expected at least one value to check")]
    NoValues,
}

/// An assertion whose predicate returned false.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{}", self.render())]
pub struct TypeMismatch {
    pub expected: Vec<Expected>,
    /// Classified category of every inspected value, in argument order.
    pub actual: Vec<TypeName>,
    pub quantifier: Quantifier,
}

impl TypeMismatch {
    pub fn single(expected: impl Into<Expected>, actual: TypeName) -> Self {
        TypeMismatch {
            expected: vec![expected.into()],
            actual: vec![actual],
            quantifier: Quantifier::One,
        }
    }

    fn render(&self) -> String {
        let (lead, received) = match self.quantifier {
            Quantifier::One => ("Expected value which is ", ", received value of type "),
            Quantifier::Any => ("Expected any of values to be ", ", received values of types "),
            Quantifier::All => ("Expected all values to be ", ", received values of types "),
        };
        format!(
            "{lead}{}{received}{}.",
            quoted_list(&self.expected, " or "),
            quoted_list(&self.actual, ", ")
        )
    }
}

fn quoted_list<T: fmt::Display>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(|item| format!("`{item}`"))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Any failure raised by the predicate, assertion, or combinator surface.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TypeIsError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatch),
}

impl TypeIsError {
    pub fn is_argument(&self) -> bool {
        matches!(self, TypeIsError::Argument(_))
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, TypeIsError::TypeMismatch(_))
    }

    pub fn as_type_mismatch(&self) -> Option<&TypeMismatch> {
        match self {
            TypeIsError::TypeMismatch(mismatch) => Some(mismatch),
            TypeIsError::Argument(_) => None,
        }
    }
}
