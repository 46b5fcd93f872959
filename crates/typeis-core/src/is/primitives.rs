//! Absence, primitive categories, and truthiness.

use crate::classifier::{classify, is_category};
use typeis_common::TypeName;
use typeis_value::Value;

pub fn undefined(value: &Value) -> bool {
    value.is_undefined()
}

pub fn null(value: &Value) -> bool {
    value.is_null()
}

pub fn null_or_undefined(value: &Value) -> bool {
    value.is_nullish()
}

pub fn string(value: &Value) -> bool {
    is_category(value, TypeName::String)
}

/// Category `number`, excluding NaN (which has its own refinement).
pub fn number(value: &Value) -> bool {
    is_category(value, TypeName::Number) && !super::nan(value)
}

pub fn bigint(value: &Value) -> bool {
    is_category(value, TypeName::BigInt)
}

pub fn boolean(value: &Value) -> bool {
    is_category(value, TypeName::Boolean)
}

pub fn symbol(value: &Value) -> bool {
    is_category(value, TypeName::Symbol)
}

/// `undefined`, `null`, or one of the five primitive categories.
pub fn primitive(value: &Value) -> bool {
    classify(value).is_primitive()
}

/// Native `ToBoolean`.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Undefined | Value::Null => false,
        Value::Boolean(b) => *b,
        Value::Number(n) => !(*n == 0.0 || n.is_nan()),
        Value::BigInt(n) => *n != 0,
        Value::String(s) => !s.is_empty(),
        Value::Symbol(_) | Value::Object(_) => true,
    }
}

pub fn falsy(value: &Value) -> bool {
    !truthy(value)
}
