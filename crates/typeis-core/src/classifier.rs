//! Primitive classifier.
//!
//! Resolves a value to the single most specific category. Structured
//! built-ins are recognised by their internal construction tag, never by
//! prototype identity, so null-prototype objects and objects whose prototype
//! was swapped classify by what they are.

use typeis_common::TypeName;
use typeis_value::{Object, Value};

/// `is(value)`: the category of a value.
///
/// Precedence: absence, primitive tag, callability, construction tag. Unknown
/// tags fall back to `Object`; classification never fails.
pub fn classify(value: &Value) -> TypeName {
    match value {
        Value::Undefined => TypeName::Undefined,
        Value::Null => TypeName::Null,
        Value::String(_) => TypeName::String,
        Value::Number(_) => TypeName::Number,
        Value::BigInt(_) => TypeName::BigInt,
        Value::Boolean(_) => TypeName::Boolean,
        Value::Symbol(_) => TypeName::Symbol,
        Value::Object(object) => classify_object(object),
    }
}

fn classify_object(object: &Object) -> TypeName {
    // Generator and async variants still tag as Function at this level.
    if object.is_callable() {
        return TypeName::Function;
    }

    let tag = object.construction_tag();
    TypeName::from_tag(tag).unwrap_or_else(|| {
        tracing::trace!(tag, "unrecognised construction tag, classifying as Object");
        TypeName::Object
    })
}

/// Whether `value` classifies as exactly `name`.
pub(crate) fn is_category(value: &Value, name: TypeName) -> bool {
    classify(value) == name
}
