//! Callable refinements.
//!
//! The four callable sub-shapes are told apart by construction tag. Bound
//! functions and classes have no tag of their own, so both are best-effort:
//! a bound function is recognised by the absence of an own `prototype`, a
//! class by its source text.

use crate::classifier::is_category;
use typeis_common::TypeName;
use typeis_value::{PropertyKey, Value};

pub fn function(value: &Value) -> bool {
    is_category(value, TypeName::Function)
}

fn construction_tag(value: &Value) -> Option<&'static str> {
    value.as_function().map(|function| function.construction_tag())
}

pub fn async_function(value: &Value) -> bool {
    construction_tag(value) == Some(TypeName::AsyncFunction.as_str())
}

pub fn generator_function(value: &Value) -> bool {
    construction_tag(value) == Some(TypeName::GeneratorFunction.as_str())
}

pub fn async_generator_function(value: &Value) -> bool {
    construction_tag(value) == Some(TypeName::AsyncGeneratorFunction.as_str())
}

/// A callable without an own `prototype` property.
///
/// Arrow functions, concise methods and plain async functions are created
/// without one, so they report as bound too, as does a function whose
/// `prototype` was deleted.
pub fn bound_function(value: &Value) -> bool {
    function(value)
        && value
            .as_object()
            .is_some_and(|object| !object.has_own_property(&PropertyKey::from("prototype")))
}

/// A callable whose source text starts with the `class` keyword.
pub fn class_(value: &Value) -> bool {
    value.as_function().is_some_and(|function| {
        function
            .source()
            .strip_prefix("class")
            .and_then(|rest| rest.chars().next())
            .is_some_and(|next| next.is_whitespace() || next == '{')
    })
}
