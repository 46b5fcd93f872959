//! The value space the engine classifies.

use crate::function::Function;
use crate::object::{Object, ObjectBuilder, ObjectKind, PropertyKey, TypedArrayKind};
use crate::realm::realm;
use crate::symbol::Symbol;
use std::sync::Arc;

/// A runtime value of unknown provenance.
///
/// Cloning is cheap: strings and objects are reference counted, and objects
/// keep their identity across clones.
#[derive(Clone, Debug)]
pub enum Value {
    /// Absence of a binding.
    Undefined,
    /// Explicit absence.
    Null,
    Boolean(bool),
    /// IEEE-754 double, including NaN and both zeros.
    Number(f64),
    BigInt(i128),
    String(Arc<str>),
    Symbol(Symbol),
    Object(Arc<Object>),
}

impl Value {
    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Arc<Object>> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        self.as_object().and_then(|object| object.as_function())
    }

    /// Whether the value can be invoked.
    pub fn is_callable(&self) -> bool {
        self.as_object().is_some_and(|object| object.is_callable())
    }

    /// The `typeof` operator.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Object(object) if object.is_callable() => "function",
            Value::Object(_) => "object",
        }
    }

    /// Identity comparison for objects; always false for primitives.
    pub fn same_object(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// `value[key]`, walking the prototype chain. Primitives are looked up
    /// through their wrapper prototype. `None` stands for `undefined` and for
    /// lookups on `null`/`undefined`, which would throw in a host language.
    pub fn get(&self, key: impl Into<PropertyKey>) -> Option<Value> {
        let key = key.into();
        match self {
            Value::Undefined | Value::Null => None,
            Value::Object(object) => object.get(&key),
            Value::String(s) => {
                if matches!(&key, PropertyKey::String(name) if &**name == "length") {
                    return Some(Value::Number(s.encode_utf16().count() as f64));
                }
                realm().primitive_prototype(self)?.get(&key)
            }
            _ => realm().primitive_prototype(self)?.get(&key),
        }
    }

    /// Whether `value[key]` resolves to something callable.
    pub fn has_method(&self, key: impl Into<PropertyKey>) -> bool {
        self.get(key).is_some_and(|member| member.is_callable())
    }

    // =========================================================================
    // Constructors
    // =========================================================================

    pub fn string(s: impl Into<Arc<str>>) -> Value {
        Value::String(s.into())
    }

    /// `Symbol(description)`
    pub fn symbol(description: Option<&str>) -> Value {
        Value::Symbol(Symbol::new(description))
    }

    /// `[a, b, c]`
    pub fn array(elements: impl IntoIterator<Item = Value>) -> Value {
        ObjectBuilder::new(ObjectKind::Array(elements.into_iter().collect())).build()
    }

    /// `new Array(length)`; holes read as `undefined`.
    pub fn array_with_length(length: usize) -> Value {
        Value::array(std::iter::repeat_n(Value::Undefined, length))
    }

    /// The `arguments` object of a call with these arguments.
    pub fn arguments(arguments: impl IntoIterator<Item = Value>) -> Value {
        ObjectBuilder::new(ObjectKind::Arguments(arguments.into_iter().collect())).build()
    }

    /// Object literal with enumerable own properties.
    pub fn object<K: Into<PropertyKey>>(entries: impl IntoIterator<Item = (K, Value)>) -> Value {
        entries
            .into_iter()
            .fold(ObjectBuilder::ordinary(), |builder, (key, value)| {
                builder.property(key, value)
            })
            .build()
    }

    /// `{}`
    pub fn empty_object() -> Value {
        ObjectBuilder::ordinary().build()
    }

    /// `Object.create(prototype)`. Anything other than an object yields a
    /// null-prototype object.
    pub fn object_with_prototype(prototype: &Value) -> Value {
        ObjectBuilder::ordinary()
            .prototype(prototype.as_object().cloned())
            .build()
    }

    pub fn function(function: Function) -> Value {
        ObjectBuilder::function(function).build()
    }

    /// `class name {}`
    pub fn class(name: &str) -> Value {
        Value::function(Function::class(name, None))
    }

    /// `class name extends base {}`: instances inherit from
    /// `base.prototype`.
    pub fn subclass(name: &str, base: &Value) -> Value {
        let base_name = base.as_function().map(Function::name).unwrap_or("Object");
        let prototype_object = ObjectBuilder::ordinary().prototype_from(base).build();
        ObjectBuilder::new(ObjectKind::Function(Function::class(name, Some(base_name))))
            .hidden_property("prototype", prototype_object)
            .build()
    }

    /// `new constructor()` for a constructor producing ordinary objects.
    pub fn instance_of(constructor: &Value) -> Value {
        ObjectBuilder::ordinary().prototype_from(constructor).build()
    }

    /// `new RegExp(source, flags)`
    pub fn regexp(source: &str, flags: &str) -> Value {
        ObjectBuilder::new(ObjectKind::RegExp {
            source: Arc::from(source),
            flags: Arc::from(flags),
        })
        .build()
    }

    /// `new Date(ms)`
    pub fn date(epoch_millis: f64) -> Value {
        ObjectBuilder::new(ObjectKind::Date(epoch_millis)).build()
    }

    /// `new Error(message)`
    pub fn error(message: &str) -> Value {
        ObjectBuilder::new(ObjectKind::Error {
            message: Arc::from(message),
        })
        .build()
    }

    /// `new Map(entries)`
    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Value {
        ObjectBuilder::new(ObjectKind::Map(entries.into_iter().collect())).build()
    }

    /// `new Set(items)`
    pub fn set(items: impl IntoIterator<Item = Value>) -> Value {
        ObjectBuilder::new(ObjectKind::Set(items.into_iter().collect())).build()
    }

    pub fn weak_map() -> Value {
        ObjectBuilder::new(ObjectKind::WeakMap).build()
    }

    pub fn weak_set() -> Value {
        ObjectBuilder::new(ObjectKind::WeakSet).build()
    }

    /// `Promise.resolve()`
    pub fn promise() -> Value {
        ObjectBuilder::new(ObjectKind::Promise).build()
    }

    /// `new Int8Array(length)` and friends.
    pub fn typed_array(kind: TypedArrayKind, length: usize) -> Value {
        ObjectBuilder::new(ObjectKind::TypedArray { kind, length }).build()
    }

    pub fn array_buffer(byte_length: usize) -> Value {
        ObjectBuilder::new(ObjectKind::ArrayBuffer { byte_length }).build()
    }

    pub fn data_view(byte_length: usize) -> Value {
        ObjectBuilder::new(ObjectKind::DataView { byte_length }).build()
    }

    /// Result of calling a generator function.
    pub fn generator() -> Value {
        ObjectBuilder::new(ObjectKind::Generator).build()
    }

    /// Result of calling an async generator function.
    pub fn async_generator() -> Value {
        ObjectBuilder::new(ObjectKind::AsyncGenerator).build()
    }

    /// `new URL(..)`
    pub fn url(url: url::Url) -> Value {
        ObjectBuilder::new(ObjectKind::Url(url)).build()
    }
}
