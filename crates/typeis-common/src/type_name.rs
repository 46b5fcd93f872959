//! Category taxonomy.
//!
//! `TypeName` is the closed set of categories the classifier can return, plus
//! the callable refinements (`GeneratorFunction`, `AsyncGeneratorFunction`,
//! `AsyncFunction`) which only ever appear in assertion messages.
//!
//! The string form of each variant is the runtime construction tag it
//! corresponds to, so [`TypeName::from_tag`] doubles as the tag-dispatch table
//! for structured built-ins.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A classification category.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TypeName {
    // =========================================================================
    // Absence
    // =========================================================================
    #[serde(rename = "undefined")]
    Undefined,
    #[serde(rename = "null")]
    Null,

    // =========================================================================
    // Primitives
    // =========================================================================
    #[serde(rename = "string")]
    String,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "bigint")]
    BigInt,
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "symbol")]
    Symbol,

    // =========================================================================
    // Callables
    // =========================================================================
    Function,
    /// Description only; the classifier reports `Function`.
    GeneratorFunction,
    /// Description only; the classifier reports `Function`.
    AsyncGeneratorFunction,
    /// Description only; the classifier reports `Function`.
    AsyncFunction,

    // =========================================================================
    // Structured built-ins
    // =========================================================================
    Array,
    Object,
    RegExp,
    Date,
    Error,
    Map,
    Set,
    WeakMap,
    WeakSet,
    Promise,

    // =========================================================================
    // Binary data
    // =========================================================================
    Int8Array,
    Uint8Array,
    Uint8ClampedArray,
    Int16Array,
    Uint16Array,
    Int32Array,
    Uint32Array,
    Float16Array,
    Float32Array,
    Float64Array,
    BigInt64Array,
    BigUint64Array,
    ArrayBuffer,
    DataView,

    // =========================================================================
    // Suspensions
    // =========================================================================
    Generator,
    AsyncGenerator,
}

impl TypeName {
    /// Every category, in declaration order.
    pub const ALL: [TypeName; 37] = [
        TypeName::Undefined,
        TypeName::Null,
        TypeName::String,
        TypeName::Number,
        TypeName::BigInt,
        TypeName::Boolean,
        TypeName::Symbol,
        TypeName::Function,
        TypeName::GeneratorFunction,
        TypeName::AsyncGeneratorFunction,
        TypeName::AsyncFunction,
        TypeName::Array,
        TypeName::Object,
        TypeName::RegExp,
        TypeName::Date,
        TypeName::Error,
        TypeName::Map,
        TypeName::Set,
        TypeName::WeakMap,
        TypeName::WeakSet,
        TypeName::Promise,
        TypeName::Int8Array,
        TypeName::Uint8Array,
        TypeName::Uint8ClampedArray,
        TypeName::Int16Array,
        TypeName::Uint16Array,
        TypeName::Int32Array,
        TypeName::Uint32Array,
        TypeName::Float16Array,
        TypeName::Float32Array,
        TypeName::Float64Array,
        TypeName::BigInt64Array,
        TypeName::BigUint64Array,
        TypeName::ArrayBuffer,
        TypeName::DataView,
        TypeName::Generator,
        TypeName::AsyncGenerator,
    ];

    /// The twelve fixed-width array views.
    pub const TYPED_ARRAYS: [TypeName; 12] = [
        TypeName::Int8Array,
        TypeName::Uint8Array,
        TypeName::Uint8ClampedArray,
        TypeName::Int16Array,
        TypeName::Uint16Array,
        TypeName::Int32Array,
        TypeName::Uint32Array,
        TypeName::Float16Array,
        TypeName::Float32Array,
        TypeName::Float64Array,
        TypeName::BigInt64Array,
        TypeName::BigUint64Array,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            TypeName::Undefined => "undefined",
            TypeName::Null => "null",
            TypeName::String => "string",
            TypeName::Number => "number",
            TypeName::BigInt => "bigint",
            TypeName::Boolean => "boolean",
            TypeName::Symbol => "symbol",
            TypeName::Function => "Function",
            TypeName::GeneratorFunction => "GeneratorFunction",
            TypeName::AsyncGeneratorFunction => "AsyncGeneratorFunction",
            TypeName::AsyncFunction => "AsyncFunction",
            TypeName::Array => "Array",
            TypeName::Object => "Object",
            TypeName::RegExp => "RegExp",
            TypeName::Date => "Date",
            TypeName::Error => "Error",
            TypeName::Map => "Map",
            TypeName::Set => "Set",
            TypeName::WeakMap => "WeakMap",
            TypeName::WeakSet => "WeakSet",
            TypeName::Promise => "Promise",
            TypeName::Int8Array => "Int8Array",
            TypeName::Uint8Array => "Uint8Array",
            TypeName::Uint8ClampedArray => "Uint8ClampedArray",
            TypeName::Int16Array => "Int16Array",
            TypeName::Uint16Array => "Uint16Array",
            TypeName::Int32Array => "Int32Array",
            TypeName::Uint32Array => "Uint32Array",
            TypeName::Float16Array => "Float16Array",
            TypeName::Float32Array => "Float32Array",
            TypeName::Float64Array => "Float64Array",
            TypeName::BigInt64Array => "BigInt64Array",
            TypeName::BigUint64Array => "BigUint64Array",
            TypeName::ArrayBuffer => "ArrayBuffer",
            TypeName::DataView => "DataView",
            TypeName::Generator => "Generator",
            TypeName::AsyncGenerator => "AsyncGenerator",
        }
    }

    /// Map a structured built-in's construction tag to its category.
    ///
    /// Only tags the classifier may return for objects are recognized. Primitive
    /// names and the callable refinements are deliberately absent: those are
    /// decided before tag lookup ever happens.
    pub fn from_tag(tag: &str) -> Option<TypeName> {
        let name = match tag {
            "Array" => TypeName::Array,
            "Object" => TypeName::Object,
            "RegExp" => TypeName::RegExp,
            "Date" => TypeName::Date,
            "Error" => TypeName::Error,
            "Map" => TypeName::Map,
            "Set" => TypeName::Set,
            "WeakMap" => TypeName::WeakMap,
            "WeakSet" => TypeName::WeakSet,
            "Promise" => TypeName::Promise,
            "Int8Array" => TypeName::Int8Array,
            "Uint8Array" => TypeName::Uint8Array,
            "Uint8ClampedArray" => TypeName::Uint8ClampedArray,
            "Int16Array" => TypeName::Int16Array,
            "Uint16Array" => TypeName::Uint16Array,
            "Int32Array" => TypeName::Int32Array,
            "Uint32Array" => TypeName::Uint32Array,
            "Float16Array" => TypeName::Float16Array,
            "Float32Array" => TypeName::Float32Array,
            "Float64Array" => TypeName::Float64Array,
            "BigInt64Array" => TypeName::BigInt64Array,
            "BigUint64Array" => TypeName::BigUint64Array,
            "ArrayBuffer" => TypeName::ArrayBuffer,
            "DataView" => TypeName::DataView,
            "Generator" => TypeName::Generator,
            "AsyncGenerator" => TypeName::AsyncGenerator,
            _ => return None,
        };
        Some(name)
    }

    /// Check if this category is one of the primitive value categories.
    pub const fn is_primitive(self) -> bool {
        matches!(
            self,
            TypeName::Undefined
                | TypeName::Null
                | TypeName::String
                | TypeName::Number
                | TypeName::BigInt
                | TypeName::Boolean
                | TypeName::Symbol
        )
    }

    /// Check if this category is one of the fixed-width array views.
    pub const fn is_typed_array(self) -> bool {
        matches!(
            self,
            TypeName::Int8Array
                | TypeName::Uint8Array
                | TypeName::Uint8ClampedArray
                | TypeName::Int16Array
                | TypeName::Uint16Array
                | TypeName::Int32Array
                | TypeName::Uint32Array
                | TypeName::Float16Array
                | TypeName::Float32Array
                | TypeName::Float64Array
                | TypeName::BigInt64Array
                | TypeName::BigUint64Array
        )
    }

    /// Check if the classifier never returns this category.
    pub const fn is_description_only(self) -> bool {
        matches!(
            self,
            TypeName::GeneratorFunction | TypeName::AsyncGeneratorFunction | TypeName::AsyncFunction
        )
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
