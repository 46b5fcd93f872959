//! Refinement descriptions used in assertion failure messages.
//!
//! These never drive dispatch. A predicate such as `numericString` classifies
//! as `string` but reports "string with a number" when its assertion fails.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssertionTypeDescription {
    Class,
    NumericString,
    NullOrUndefined,
    Iterable,
    AsyncIterable,
    NativePromise,
    UrlInstance,
    UrlString,
    Truthy,
    Falsy,
    Nan,
    Primitive,
    Integer,
    SafeInteger,
    PlainObject,
    ArrayLike,
    TypedArray,
    Infinite,
    EmptyArray,
    NonEmptyArray,
    EmptyString,
    NonEmptyString,
    EmptyStringOrWhitespace,
    EmptyObject,
    NonEmptyObject,
    EmptySet,
    NonEmptySet,
    EmptyMap,
    NonEmptyMap,
    EvenInteger,
    OddInteger,
    BoundFunction,
    DirectInstanceOf,
    InRange,
}

impl AssertionTypeDescription {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::NumericString => "string with a number",
            Self::NullOrUndefined => "null or undefined",
            Self::Iterable => "Iterable",
            Self::AsyncIterable => "AsyncIterable",
            Self::NativePromise => "native Promise",
            Self::UrlInstance => "URL instance",
            Self::UrlString => "string with a URL",
            Self::Truthy => "truthy",
            Self::Falsy => "falsy",
            Self::Nan => "NaN",
            Self::Primitive => "primitive",
            Self::Integer => "integer",
            Self::SafeInteger => "safe integer",
            Self::PlainObject => "plain object",
            Self::ArrayLike => "array-like",
            Self::TypedArray => "TypedArray",
            Self::Infinite => "infinite number",
            Self::EmptyArray => "empty array",
            Self::NonEmptyArray => "non-empty array",
            Self::EmptyString => "empty string",
            Self::NonEmptyString => "non-empty string",
            Self::EmptyStringOrWhitespace => "empty string or whitespace",
            Self::EmptyObject => "empty object",
            Self::NonEmptyObject => "non-empty object",
            Self::EmptySet => "empty set",
            Self::NonEmptySet => "non-empty set",
            Self::EmptyMap => "empty map",
            Self::NonEmptyMap => "non-empty map",
            Self::EvenInteger => "even integer",
            Self::OddInteger => "odd integer",
            Self::BoundFunction => "bound Function",
            Self::DirectInstanceOf => "T",
            Self::InRange => "in range",
        }
    }
}

impl fmt::Display for AssertionTypeDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
