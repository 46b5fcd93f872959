//! Arrays, keyed collections, and binary data.

use crate::classifier::{classify, is_category};
use typeis_common::TypeName;
use typeis_value::Value;

pub fn array(value: &Value) -> bool {
    is_category(value, TypeName::Array)
}

pub fn empty_array(value: &Value) -> bool {
    array(value) && length(value) == Some(0)
}

pub fn non_empty_array(value: &Value) -> bool {
    array(value) && length(value).is_some_and(|len| len > 0)
}

pub fn map(value: &Value) -> bool {
    is_category(value, TypeName::Map)
}

pub fn empty_map(value: &Value) -> bool {
    map(value) && size(value) == Some(0)
}

pub fn non_empty_map(value: &Value) -> bool {
    map(value) && size(value).is_some_and(|size| size > 0)
}

pub fn set(value: &Value) -> bool {
    is_category(value, TypeName::Set)
}

pub fn empty_set(value: &Value) -> bool {
    set(value) && size(value) == Some(0)
}

pub fn non_empty_set(value: &Value) -> bool {
    set(value) && size(value).is_some_and(|size| size > 0)
}

pub fn weak_map(value: &Value) -> bool {
    is_category(value, TypeName::WeakMap)
}

pub fn weak_set(value: &Value) -> bool {
    is_category(value, TypeName::WeakSet)
}

/// Any of the twelve fixed-width array views. They share no construction
/// tag, so this is a disjunction over the categories.
pub fn typed_array(value: &Value) -> bool {
    classify(value).is_typed_array()
}

pub fn int8_array(value: &Value) -> bool {
    is_category(value, TypeName::Int8Array)
}

pub fn uint8_array(value: &Value) -> bool {
    is_category(value, TypeName::Uint8Array)
}

pub fn uint8_clamped_array(value: &Value) -> bool {
    is_category(value, TypeName::Uint8ClampedArray)
}

pub fn int16_array(value: &Value) -> bool {
    is_category(value, TypeName::Int16Array)
}

pub fn uint16_array(value: &Value) -> bool {
    is_category(value, TypeName::Uint16Array)
}

pub fn int32_array(value: &Value) -> bool {
    is_category(value, TypeName::Int32Array)
}

pub fn uint32_array(value: &Value) -> bool {
    is_category(value, TypeName::Uint32Array)
}

pub fn float16_array(value: &Value) -> bool {
    is_category(value, TypeName::Float16Array)
}

pub fn float32_array(value: &Value) -> bool {
    is_category(value, TypeName::Float32Array)
}

pub fn float64_array(value: &Value) -> bool {
    is_category(value, TypeName::Float64Array)
}

pub fn big_int64_array(value: &Value) -> bool {
    is_category(value, TypeName::BigInt64Array)
}

pub fn big_uint64_array(value: &Value) -> bool {
    is_category(value, TypeName::BigUint64Array)
}

pub fn array_buffer(value: &Value) -> bool {
    is_category(value, TypeName::ArrayBuffer)
}

pub fn data_view(value: &Value) -> bool {
    is_category(value, TypeName::DataView)
}

fn length(value: &Value) -> Option<usize> {
    value.as_object().and_then(|object| object.length())
}

fn size(value: &Value) -> Option<usize> {
    value.as_object().and_then(|object| object.size())
}
