//! Heap objects.
//!
//! An `Object` is an internal kind (the slots that decide its construction
//! tag), a prototype link, and ordered own properties. Objects are immutable
//! once built; `ObjectBuilder` is the only way to assemble one.

use crate::function::Function;
use crate::realm::realm;
use crate::symbol::Symbol;
use crate::value::Value;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Property key: a string or a symbol.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    String(Arc<str>),
    Symbol(Symbol),
}

impl From<&str> for PropertyKey {
    fn from(key: &str) -> Self {
        PropertyKey::String(Arc::from(key))
    }
}

impl From<String> for PropertyKey {
    fn from(key: String) -> Self {
        PropertyKey::String(Arc::from(key))
    }
}

impl From<Symbol> for PropertyKey {
    fn from(symbol: Symbol) -> Self {
        PropertyKey::Symbol(symbol)
    }
}

impl PropertyKey {
    fn is_string(&self, name: &str) -> bool {
        matches!(self, PropertyKey::String(key) if &**key == name)
    }

    /// Canonical array index (`"0"`, `"17"`, but not `"01"` or `"+1"`).
    fn as_array_index(&self) -> Option<usize> {
        let PropertyKey::String(key) = self else {
            return None;
        };
        if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
            return None;
        }
        if !key.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        key.parse().ok()
    }
}

/// An own data property.
#[derive(Clone, Debug)]
pub struct Property {
    pub value: Value,
    pub enumerable: bool,
}

/// Element type of a fixed-width array view.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypedArrayKind {
    Int8,
    Uint8,
    Uint8Clamped,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Float16,
    Float32,
    Float64,
    BigInt64,
    BigUint64,
}

impl TypedArrayKind {
    pub const ALL: [TypedArrayKind; 12] = [
        TypedArrayKind::Int8,
        TypedArrayKind::Uint8,
        TypedArrayKind::Uint8Clamped,
        TypedArrayKind::Int16,
        TypedArrayKind::Uint16,
        TypedArrayKind::Int32,
        TypedArrayKind::Uint32,
        TypedArrayKind::Float16,
        TypedArrayKind::Float32,
        TypedArrayKind::Float64,
        TypedArrayKind::BigInt64,
        TypedArrayKind::BigUint64,
    ];

    pub const fn tag(self) -> &'static str {
        match self {
            TypedArrayKind::Int8 => "Int8Array",
            TypedArrayKind::Uint8 => "Uint8Array",
            TypedArrayKind::Uint8Clamped => "Uint8ClampedArray",
            TypedArrayKind::Int16 => "Int16Array",
            TypedArrayKind::Uint16 => "Uint16Array",
            TypedArrayKind::Int32 => "Int32Array",
            TypedArrayKind::Uint32 => "Uint32Array",
            TypedArrayKind::Float16 => "Float16Array",
            TypedArrayKind::Float32 => "Float32Array",
            TypedArrayKind::Float64 => "Float64Array",
            TypedArrayKind::BigInt64 => "BigInt64Array",
            TypedArrayKind::BigUint64 => "BigUint64Array",
        }
    }
}

/// Internal slots of an object.
#[derive(Clone, Debug)]
pub enum ObjectKind {
    /// `{}`, `new Object()`, `Object.create(..)`, class instances.
    Ordinary,
    Array(Vec<Value>),
    /// A function's `arguments` object.
    Arguments(Vec<Value>),
    Function(Function),
    RegExp {
        source: Arc<str>,
        flags: Arc<str>,
    },
    /// Milliseconds since the epoch; NaN for an invalid date.
    Date(f64),
    Error {
        message: Arc<str>,
    },
    Map(Vec<(Value, Value)>),
    Set(Vec<Value>),
    WeakMap,
    WeakSet,
    Promise,
    TypedArray {
        kind: TypedArrayKind,
        length: usize,
    },
    ArrayBuffer {
        byte_length: usize,
    },
    DataView {
        byte_length: usize,
    },
    Generator,
    AsyncGenerator,
    /// WHATWG `URL` host object.
    Url(url::Url),
}

impl ObjectKind {
    /// Internal construction tag, as `Object.prototype.toString` reports it.
    pub fn construction_tag(&self) -> &'static str {
        match self {
            ObjectKind::Ordinary => "Object",
            ObjectKind::Array(_) => "Array",
            ObjectKind::Arguments(_) => "Arguments",
            ObjectKind::Function(function) => function.construction_tag(),
            ObjectKind::RegExp { .. } => "RegExp",
            ObjectKind::Date(_) => "Date",
            ObjectKind::Error { .. } => "Error",
            ObjectKind::Map(_) => "Map",
            ObjectKind::Set(_) => "Set",
            ObjectKind::WeakMap => "WeakMap",
            ObjectKind::WeakSet => "WeakSet",
            ObjectKind::Promise => "Promise",
            ObjectKind::TypedArray { kind, .. } => kind.tag(),
            ObjectKind::ArrayBuffer { .. } => "ArrayBuffer",
            ObjectKind::DataView { .. } => "DataView",
            ObjectKind::Generator => "Generator",
            ObjectKind::AsyncGenerator => "AsyncGenerator",
            ObjectKind::Url(_) => "URL",
        }
    }

    /// Number of integer-indexed own keys.
    fn index_key_count(&self) -> usize {
        match self {
            ObjectKind::Array(elements) | ObjectKind::Arguments(elements) => elements.len(),
            ObjectKind::TypedArray { length, .. } => *length,
            _ => 0,
        }
    }
}

pub struct Object {
    kind: ObjectKind,
    prototype: Option<Arc<Object>>,
    properties: IndexMap<PropertyKey, Property>,
}

impl Object {
    /// Bypasses `ObjectBuilder`, which needs the realm. Used while the realm
    /// itself is being created.
    pub(crate) fn from_parts(
        kind: ObjectKind,
        prototype: Option<Arc<Object>>,
        properties: IndexMap<PropertyKey, Property>,
    ) -> Arc<Object> {
        Arc::new(Object {
            kind,
            prototype,
            properties,
        })
    }

    pub fn kind(&self) -> &ObjectKind {
        &self.kind
    }

    /// Immediate prototype; `None` for null-prototype objects.
    pub fn prototype(&self) -> Option<&Arc<Object>> {
        self.prototype.as_ref()
    }

    pub fn construction_tag(&self) -> &'static str {
        self.kind.construction_tag()
    }

    pub fn as_function(&self) -> Option<&Function> {
        match &self.kind {
            ObjectKind::Function(function) => Some(function),
            _ => None,
        }
    }

    pub fn is_callable(&self) -> bool {
        matches!(self.kind, ObjectKind::Function(_))
    }

    /// `length` of arrays, arguments objects and typed arrays.
    pub fn length(&self) -> Option<usize> {
        match &self.kind {
            ObjectKind::Array(elements) | ObjectKind::Arguments(elements) => Some(elements.len()),
            ObjectKind::TypedArray { length, .. } => Some(*length),
            _ => None,
        }
    }

    /// `size` of maps and sets.
    pub fn size(&self) -> Option<usize> {
        match &self.kind {
            ObjectKind::Map(entries) => Some(entries.len()),
            ObjectKind::Set(items) => Some(items.len()),
            _ => None,
        }
    }

    /// Own property, including the ones synthesized from internal slots.
    pub fn get_own(&self, key: &PropertyKey) -> Option<Value> {
        if let Some(property) = self.properties.get(key) {
            return Some(property.value.clone());
        }
        if key.is_string("length") {
            return self.length().map(|len| Value::Number(len as f64));
        }
        if let (ObjectKind::Array(elements) | ObjectKind::Arguments(elements), Some(index)) =
            (&self.kind, key.as_array_index())
        {
            return elements.get(index).cloned();
        }
        if key.is_string("size") {
            return self.size().map(|size| Value::Number(size as f64));
        }
        None
    }

    pub fn has_own_property(&self, key: &PropertyKey) -> bool {
        self.get_own(key).is_some()
    }

    /// Property lookup along the prototype chain.
    pub fn get(&self, key: &PropertyKey) -> Option<Value> {
        let mut current = self;
        loop {
            if let Some(value) = current.get_own(key) {
                return Some(value);
            }
            current = current.prototype.as_deref()?;
        }
    }

    /// Number of own enumerable string keys (`Object.keys(o).length`).
    pub fn own_enumerable_key_count(&self) -> usize {
        let named = self
            .properties
            .iter()
            .filter(|(key, property)| property.enumerable && matches!(key, PropertyKey::String(_)))
            .count();
        named + self.kind.index_key_count()
    }

    pub fn own_property_keys(&self) -> impl Iterator<Item = &PropertyKey> {
        self.properties.keys()
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("tag", &self.construction_tag())
            .field("has_prototype", &self.prototype.is_some())
            .field("keys", &self.properties.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Assembles an [`Object`].
///
/// The prototype defaults to the intrinsic prototype matching the kind.
pub struct ObjectBuilder {
    kind: ObjectKind,
    prototype: Option<Arc<Object>>,
    properties: IndexMap<PropertyKey, Property>,
}

impl ObjectBuilder {
    pub fn new(kind: ObjectKind) -> ObjectBuilder {
        let prototype = Some(realm().prototype_for(&kind).clone());
        let mut properties = IndexMap::new();
        if matches!(kind, ObjectKind::Arguments(_)) {
            properties.insert(
                PropertyKey::Symbol(Symbol::ITERATOR),
                Property {
                    value: realm().native_method("values"),
                    enumerable: false,
                },
            );
        }
        ObjectBuilder {
            kind,
            prototype,
            properties,
        }
    }

    /// `{}`
    pub fn ordinary() -> ObjectBuilder {
        ObjectBuilder::new(ObjectKind::Ordinary)
    }

    /// A function object, with an own `prototype` when its form has one.
    pub fn function(function: Function) -> ObjectBuilder {
        let has_own_prototype = function.has_own_prototype();
        let builder = ObjectBuilder::new(ObjectKind::Function(function));
        if has_own_prototype {
            let prototype_object = ObjectBuilder::ordinary().build();
            builder.hidden_property("prototype", prototype_object)
        } else {
            builder
        }
    }

    /// Start from a copy of an existing object.
    pub fn from_object(object: &Object) -> ObjectBuilder {
        ObjectBuilder {
            kind: object.kind.clone(),
            prototype: object.prototype.clone(),
            properties: object.properties.clone(),
        }
    }

    pub fn prototype(mut self, prototype: Option<Arc<Object>>) -> Self {
        self.prototype = prototype;
        self
    }

    /// Use the object stored in `constructor.prototype`, if any, as the
    /// prototype. A constructor without one leaves a null prototype.
    pub fn prototype_from(self, constructor: &Value) -> Self {
        let prototype = constructor
            .get("prototype")
            .and_then(|value| value.as_object().cloned());
        self.prototype(prototype)
    }

    /// Enumerable own property.
    pub fn property(mut self, key: impl Into<PropertyKey>, value: impl Into<Value>) -> Self {
        self.properties.insert(
            key.into(),
            Property {
                value: value.into(),
                enumerable: true,
            },
        );
        self
    }

    /// Non-enumerable own property.
    pub fn hidden_property(mut self, key: impl Into<PropertyKey>, value: impl Into<Value>) -> Self {
        self.properties.insert(
            key.into(),
            Property {
                value: value.into(),
                enumerable: false,
            },
        );
        self
    }

    /// Enumerable own method, as written in an object literal.
    pub fn method(self, key: impl Into<PropertyKey>) -> Self {
        let key = key.into();
        let name = match &key {
            PropertyKey::String(name) => name.to_string(),
            PropertyKey::Symbol(symbol) => format!("[{}]", symbol.description().unwrap_or("")),
        };
        self.property(key, Value::function(Function::method(&name)))
    }

    /// Delete an own property (`delete o[key]`).
    pub fn remove(mut self, key: impl Into<PropertyKey>) -> Self {
        self.properties.shift_remove(&key.into());
        self
    }

    pub fn build_object(self) -> Arc<Object> {
        Arc::new(Object {
            kind: self.kind,
            prototype: self.prototype,
            properties: self.properties,
        })
    }

    pub fn build(self) -> Value {
        Value::Object(self.build_object())
    }
}
