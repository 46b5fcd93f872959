//! Intrinsic prototypes.
//!
//! Built once per process and shared by every value. Only the members that
//! capability probes look for are installed: iteration methods, the promise
//! API, the generator protocol, and a handful of ordinary methods.

use crate::function::Function;
use crate::object::{Object, ObjectKind, Property, PropertyKey, TypedArrayKind};
use crate::symbol::Symbol;
use crate::value::Value;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::sync::Arc;
use typeis_common::TypeName;

static REALM: Lazy<Realm> = Lazy::new(Realm::new);

/// The process-wide realm.
pub fn realm() -> &'static Realm {
    &REALM
}

pub struct Realm {
    object_prototype: Arc<Object>,
    function_prototype: Arc<Object>,
    array_prototype: Arc<Object>,
    string_prototype: Arc<Object>,
    number_prototype: Arc<Object>,
    boolean_prototype: Arc<Object>,
    bigint_prototype: Arc<Object>,
    symbol_prototype: Arc<Object>,
    regexp_prototype: Arc<Object>,
    date_prototype: Arc<Object>,
    error_prototype: Arc<Object>,
    map_prototype: Arc<Object>,
    set_prototype: Arc<Object>,
    weak_map_prototype: Arc<Object>,
    weak_set_prototype: Arc<Object>,
    promise_prototype: Arc<Object>,
    /// Per-kind prototypes; all share `%TypedArray%.prototype` as parent.
    typed_array_prototypes: [Arc<Object>; 12],
    array_buffer_prototype: Arc<Object>,
    data_view_prototype: Arc<Object>,
    generator_prototype: Arc<Object>,
    async_generator_prototype: Arc<Object>,
    url_prototype: Arc<Object>,
}

fn native_function(function_prototype: &Arc<Object>, name: &str) -> Value {
    Value::Object(Object::from_parts(
        ObjectKind::Function(Function::native(name)),
        Some(function_prototype.clone()),
        IndexMap::new(),
    ))
}

fn intrinsic(
    parent: &Arc<Object>,
    function_prototype: &Arc<Object>,
    methods: &[PropertyKey],
) -> Arc<Object> {
    let mut properties = IndexMap::with_capacity(methods.len());
    for key in methods {
        let name = match key {
            PropertyKey::String(name) => name.to_string(),
            PropertyKey::Symbol(symbol) => format!("[{}]", symbol.description().unwrap_or("")),
        };
        properties.insert(
            key.clone(),
            Property {
                value: native_function(function_prototype, &name),
                enumerable: false,
            },
        );
    }
    Object::from_parts(ObjectKind::Ordinary, Some(parent.clone()), properties)
}

impl Realm {
    fn new() -> Realm {
        tracing::debug!("initialising intrinsic prototypes");

        let object_prototype = Object::from_parts(ObjectKind::Ordinary, None, IndexMap::new());
        // Function.prototype's own methods would need Function.prototype as
        // their prototype; it carries none.
        let function_prototype = Object::from_parts(
            ObjectKind::Ordinary,
            Some(object_prototype.clone()),
            IndexMap::new(),
        );

        let fp = &function_prototype;
        let op = &object_prototype;
        let iterator = || PropertyKey::Symbol(Symbol::ITERATOR);
        let async_iterator = || PropertyKey::Symbol(Symbol::ASYNC_ITERATOR);
        let named = |name: &str| PropertyKey::from(name);

        let typed_array_prototype = intrinsic(op, fp, &[iterator(), named("subarray")]);
        let typed_array_prototypes =
            TypedArrayKind::ALL.map(|_| intrinsic(&typed_array_prototype, fp, &[]));

        let array_prototype = intrinsic(op, fp, &[iterator(), named("forEach"), named("map")]);
        let string_prototype = intrinsic(op, fp, &[iterator(), named("charAt"), named("trim")]);
        let number_prototype = intrinsic(op, fp, &[named("toFixed")]);
        let boolean_prototype = intrinsic(op, fp, &[named("valueOf")]);
        let bigint_prototype = intrinsic(op, fp, &[named("toString")]);
        let symbol_prototype = intrinsic(op, fp, &[named("toString")]);
        let regexp_prototype = intrinsic(op, fp, &[named("exec"), named("test")]);
        let date_prototype = intrinsic(op, fp, &[named("getTime")]);
        let error_prototype = intrinsic(op, fp, &[named("toString")]);
        let map_prototype = intrinsic(op, fp, &[iterator(), named("get"), named("set")]);
        let set_prototype = intrinsic(op, fp, &[iterator(), named("add"), named("has")]);
        let weak_map_prototype = intrinsic(op, fp, &[named("get"), named("set")]);
        let weak_set_prototype = intrinsic(op, fp, &[named("add"), named("has")]);
        let promise_prototype =
            intrinsic(op, fp, &[named("then"), named("catch"), named("finally")]);
        let array_buffer_prototype = intrinsic(op, fp, &[named("slice")]);
        let data_view_prototype = intrinsic(op, fp, &[named("getInt8")]);
        let generator_prototype = intrinsic(
            op,
            fp,
            &[iterator(), named("next"), named("return"), named("throw")],
        );
        let async_generator_prototype = intrinsic(
            op,
            fp,
            &[async_iterator(), named("next"), named("return"), named("throw")],
        );
        let url_prototype = intrinsic(op, fp, &[named("toString"), named("toJSON")]);

        Realm {
            object_prototype,
            function_prototype,
            array_prototype,
            string_prototype,
            number_prototype,
            boolean_prototype,
            bigint_prototype,
            symbol_prototype,
            regexp_prototype,
            date_prototype,
            error_prototype,
            map_prototype,
            set_prototype,
            weak_map_prototype,
            weak_set_prototype,
            promise_prototype,
            typed_array_prototypes,
            array_buffer_prototype,
            data_view_prototype,
            generator_prototype,
            async_generator_prototype,
            url_prototype,
        }
    }

    /// `Object.prototype`
    pub fn object_prototype(&self) -> &Arc<Object> {
        &self.object_prototype
    }

    /// `Function.prototype`
    pub fn function_prototype(&self) -> &Arc<Object> {
        &self.function_prototype
    }

    /// Prototype a freshly created object of this kind starts with.
    pub fn prototype_for(&self, kind: &ObjectKind) -> &Arc<Object> {
        match kind {
            ObjectKind::Ordinary | ObjectKind::Arguments(_) => &self.object_prototype,
            ObjectKind::Array(_) => &self.array_prototype,
            ObjectKind::Function(_) => &self.function_prototype,
            ObjectKind::RegExp { .. } => &self.regexp_prototype,
            ObjectKind::Date(_) => &self.date_prototype,
            ObjectKind::Error { .. } => &self.error_prototype,
            ObjectKind::Map(_) => &self.map_prototype,
            ObjectKind::Set(_) => &self.set_prototype,
            ObjectKind::WeakMap => &self.weak_map_prototype,
            ObjectKind::WeakSet => &self.weak_set_prototype,
            ObjectKind::Promise => &self.promise_prototype,
            ObjectKind::TypedArray { kind, .. } => &self.typed_array_prototypes[*kind as usize],
            ObjectKind::ArrayBuffer { .. } => &self.array_buffer_prototype,
            ObjectKind::DataView { .. } => &self.data_view_prototype,
            ObjectKind::Generator => &self.generator_prototype,
            ObjectKind::AsyncGenerator => &self.async_generator_prototype,
            ObjectKind::Url(_) => &self.url_prototype,
        }
    }

    /// Wrapper prototype consulted for property lookups on a primitive.
    pub fn primitive_prototype(&self, value: &Value) -> Option<&Arc<Object>> {
        match value {
            Value::String(_) => Some(&self.string_prototype),
            Value::Number(_) => Some(&self.number_prototype),
            Value::Boolean(_) => Some(&self.boolean_prototype),
            Value::BigInt(_) => Some(&self.bigint_prototype),
            Value::Symbol(_) => Some(&self.symbol_prototype),
            Value::Undefined | Value::Null | Value::Object(_) => None,
        }
    }

    /// The object stored in `<Constructor>.prototype` for a built-in category.
    pub fn prototype_of(&self, name: TypeName) -> Option<&Arc<Object>> {
        let prototype = match name {
            TypeName::Object => &self.object_prototype,
            TypeName::Function => &self.function_prototype,
            TypeName::Array => &self.array_prototype,
            TypeName::String => &self.string_prototype,
            TypeName::Number => &self.number_prototype,
            TypeName::Boolean => &self.boolean_prototype,
            TypeName::BigInt => &self.bigint_prototype,
            TypeName::Symbol => &self.symbol_prototype,
            TypeName::RegExp => &self.regexp_prototype,
            TypeName::Date => &self.date_prototype,
            TypeName::Error => &self.error_prototype,
            TypeName::Map => &self.map_prototype,
            TypeName::Set => &self.set_prototype,
            TypeName::WeakMap => &self.weak_map_prototype,
            TypeName::WeakSet => &self.weak_set_prototype,
            TypeName::Promise => &self.promise_prototype,
            TypeName::ArrayBuffer => &self.array_buffer_prototype,
            TypeName::DataView => &self.data_view_prototype,
            TypeName::Generator => &self.generator_prototype,
            TypeName::AsyncGenerator => &self.async_generator_prototype,
            name if name.is_typed_array() => {
                let kind = TypedArrayKind::ALL
                    .into_iter()
                    .position(|kind| kind.tag() == name.as_str())?;
                &self.typed_array_prototypes[kind]
            }
            _ => return None,
        };
        Some(prototype)
    }

    /// The built-in constructor for a category (`Error`, `Map`, ...), whose
    /// own `prototype` property is the matching intrinsic prototype.
    pub fn constructor(&self, name: TypeName) -> Option<Value> {
        let prototype = self.prototype_of(name)?;
        let mut properties = IndexMap::new();
        properties.insert(
            PropertyKey::from("prototype"),
            Property {
                value: Value::Object(prototype.clone()),
                enumerable: false,
            },
        );
        Some(Value::Object(Object::from_parts(
            ObjectKind::Function(Function::native(name.as_str())),
            Some(self.function_prototype.clone()),
            properties,
        )))
    }

    /// A standalone host built-in function.
    pub fn native_method(&self, name: &str) -> Value {
        native_function(&self.function_prototype, name)
    }
}
