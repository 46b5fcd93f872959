//! Object categories and object refinements.

use crate::classifier::is_category;
use std::sync::Arc;
use typeis_common::TypeName;
use typeis_value::{Object, ObjectKind, Value, realm};

/// Anything that is not a primitive: objects and functions alike.
pub fn object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

pub fn regexp(value: &Value) -> bool {
    is_category(value, TypeName::RegExp)
}

pub fn date(value: &Value) -> bool {
    is_category(value, TypeName::Date)
}

pub fn error(value: &Value) -> bool {
    is_category(value, TypeName::Error)
}

/// Own enumerable key count of a key-value container, or `None` for
/// primitives, arrays, maps and sets.
fn key_count(value: &Value) -> Option<usize> {
    let object = value.as_object()?;
    match object.kind() {
        ObjectKind::Array(_) | ObjectKind::Map(_) | ObjectKind::Set(_) => None,
        _ => Some(object.own_enumerable_key_count()),
    }
}

pub fn empty_object(value: &Value) -> bool {
    key_count(value) == Some(0)
}

pub fn non_empty_object(value: &Value) -> bool {
    key_count(value).is_some_and(|count| count > 0)
}

/// An ordinary object whose prototype is `Object.prototype` or absent.
///
/// `{}`, `new Object()` and `Object.create(null)` qualify; class instances,
/// `Object.create(proto)` results and exotic objects (arguments, URL) do not.
pub fn plain_object(value: &Value) -> bool {
    value.as_object().is_some_and(|object| {
        matches!(object.kind(), ObjectKind::Ordinary)
            && object
                .prototype()
                .is_none_or(|prototype| Arc::ptr_eq(prototype, realm().object_prototype()))
    })
}

/// Whether the value's immediate prototype is `constructor.prototype`.
///
/// Subclass instances are rejected. Primitives are compared through their
/// wrapper prototype, so a string is a direct instance of `String`.
pub fn direct_instance_of(value: &Value, constructor: &Value) -> bool {
    let Some(expected) = constructor
        .get("prototype")
        .and_then(|prototype| prototype.as_object().cloned())
    else {
        return false;
    };
    immediate_prototype(value).is_some_and(|prototype| Arc::ptr_eq(prototype, &expected))
}

fn immediate_prototype(value: &Value) -> Option<&Arc<Object>> {
    match value {
        Value::Object(object) => object.prototype(),
        _ => realm().primitive_prototype(value),
    }
}

/// A WHATWG `URL` object.
pub fn url_instance(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|object| matches!(object.kind(), ObjectKind::Url(_)))
}
