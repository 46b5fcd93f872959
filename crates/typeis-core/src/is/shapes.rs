//! Capability probes.
//!
//! These look for specific callable members instead of consulting the
//! classifier, so userland values that implement a protocol qualify.

use crate::classifier::is_category;
use typeis_common::TypeName;
use typeis_common::limits::MAX_SAFE_INTEGER;
use typeis_value::{Symbol, Value};

/// Exposes a callable `Symbol.iterator`.
pub fn iterable(value: &Value) -> bool {
    !value.is_nullish() && value.has_method(Symbol::ITERATOR)
}

/// Exposes a callable `Symbol.asyncIterator`.
pub fn async_iterable(value: &Value) -> bool {
    !value.is_nullish() && value.has_method(Symbol::ASYNC_ITERATOR)
}

/// Not callable and carrying a `length` that is a valid array length.
pub fn array_like(value: &Value) -> bool {
    if value.is_nullish() || value.is_callable() {
        return false;
    }
    value
        .get("length")
        .and_then(|length| length.as_number())
        .is_some_and(is_valid_length)
}

fn is_valid_length(length: f64) -> bool {
    (0.0..=MAX_SAFE_INTEGER).contains(&length) && length.trunc() == length
}

/// A native promise, or anything with callable `then` and `catch` members.
pub fn promise(value: &Value) -> bool {
    native_promise(value) || (value.has_method("then") && value.has_method("catch"))
}

pub fn native_promise(value: &Value) -> bool {
    is_category(value, TypeName::Promise)
}

pub fn generator(value: &Value) -> bool {
    is_category(value, TypeName::Generator)
}

pub fn async_generator(value: &Value) -> bool {
    is_category(value, TypeName::AsyncGenerator)
}
