//! The predicate catalog.
//!
//! `Check` names every predicate as an enum variant, so callers can store,
//! pass and combine predicates as data, and the assertion wrapper can look up
//! the expected category of any predicate without a string table. Adding a
//! predicate to the `unary_checks!` table below is enough to give it a name,
//! an assertion message, and a slot in `Check::ALL_UNARY`.

use crate::is;
use crate::range::{self, RangeBound};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use typeis_common::{AssertionTypeDescription as Description, Expected, TypeIsError, TypeName};
use typeis_value::Value;

/// A caller-supplied predicate.
pub type CustomPredicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

macro_rules! unary_checks {
    ($($variant:ident => $name:literal, $predicate:path, $expected:expr;)*) => {
        /// A predicate, as data.
        #[derive(Clone)]
        pub enum Check {
            $($variant,)*
            /// [`is::in_range`] with this bound.
            InRange(RangeBound),
            /// [`is::direct_instance_of`] with this constructor.
            DirectInstanceOf(Value),
            Custom {
                name: Cow<'static, str>,
                predicate: CustomPredicate,
            },
        }

        const UNARY_COUNT: usize = [$($name),*].len();

        impl Check {
            /// Every predicate that takes nothing but the value.
            pub const ALL_UNARY: [Check; UNARY_COUNT] = [$(Check::$variant),*];

            /// Run the predicate. Only `InRange` can fail, on a malformed
            /// bound.
            pub fn test(&self, value: &Value) -> Result<bool, TypeIsError> {
                let result = match self {
                    $(Check::$variant => $predicate(value),)*
                    Check::InRange(bound) => range::contains(bound, value)?,
                    Check::DirectInstanceOf(constructor) => {
                        is::direct_instance_of(value, constructor)
                    }
                    Check::Custom { predicate, .. } => predicate(value),
                };
                Ok(result)
            }

            /// camelCase name of the predicate, e.g. `numericString`.
            pub fn name(&self) -> &str {
                match self {
                    $(Check::$variant => $name,)*
                    Check::InRange(_) => "inRange",
                    Check::DirectInstanceOf(_) => "directInstanceOf",
                    Check::Custom { name, .. } => &**name,
                }
            }

            /// What an assertion of this predicate reports as expected.
            pub fn expected(&self) -> Expected {
                match self {
                    $(Check::$variant => Expected::from($expected),)*
                    Check::InRange(_) => Expected::Description(Description::InRange),
                    Check::DirectInstanceOf(constructor) => constructor
                        .as_function()
                        .map(|function| function.name())
                        .filter(|name| !name.is_empty())
                        .map_or(Expected::Description(Description::DirectInstanceOf), |name| {
                            Expected::Named(Cow::Owned(name.to_string()))
                        }),
                    Check::Custom { name, .. } => Expected::Named(name.clone()),
                }
            }
        }
    };
}

unary_checks! {
    // Absence and primitives
    Undefined => "undefined", is::undefined, TypeName::Undefined;
    Null => "null", is::null, TypeName::Null;
    NullOrUndefined => "nullOrUndefined", is::null_or_undefined, Description::NullOrUndefined;
    String => "string", is::string, TypeName::String;
    Number => "number", is::number, TypeName::Number;
    BigInt => "bigint", is::bigint, TypeName::BigInt;
    Boolean => "boolean", is::boolean, TypeName::Boolean;
    Symbol => "symbol", is::symbol, TypeName::Symbol;
    Primitive => "primitive", is::primitive, Description::Primitive;
    Truthy => "truthy", is::truthy, Description::Truthy;
    Falsy => "falsy", is::falsy, Description::Falsy;

    // Numbers
    Nan => "nan", is::nan, Description::Nan;
    Integer => "integer", is::integer, Description::Integer;
    SafeInteger => "safeInteger", is::safe_integer, Description::SafeInteger;
    Infinite => "infinite", is::infinite, Description::Infinite;
    EvenInteger => "evenInteger", is::even_integer, Description::EvenInteger;
    OddInteger => "oddInteger", is::odd_integer, Description::OddInteger;

    // Strings
    NumericString => "numericString", is::numeric_string, Description::NumericString;
    EmptyString => "emptyString", is::empty_string, Description::EmptyString;
    NonEmptyString => "nonEmptyString", is::non_empty_string, Description::NonEmptyString;
    EmptyStringOrWhitespace => "emptyStringOrWhitespace", is::empty_string_or_whitespace,
        Description::EmptyStringOrWhitespace;
    UrlString => "urlString", is::url_string, Description::UrlString;

    // Callables
    Function => "function", is::function, TypeName::Function;
    AsyncFunction => "asyncFunction", is::async_function, TypeName::AsyncFunction;
    GeneratorFunction => "generatorFunction", is::generator_function, TypeName::GeneratorFunction;
    AsyncGeneratorFunction => "asyncGeneratorFunction", is::async_generator_function,
        TypeName::AsyncGeneratorFunction;
    BoundFunction => "boundFunction", is::bound_function, Description::BoundFunction;
    Class => "class", is::class_, Description::Class;

    // Collections
    Array => "array", is::array, TypeName::Array;
    EmptyArray => "emptyArray", is::empty_array, Description::EmptyArray;
    NonEmptyArray => "nonEmptyArray", is::non_empty_array, Description::NonEmptyArray;
    Map => "map", is::map, TypeName::Map;
    EmptyMap => "emptyMap", is::empty_map, Description::EmptyMap;
    NonEmptyMap => "nonEmptyMap", is::non_empty_map, Description::NonEmptyMap;
    Set => "set", is::set, TypeName::Set;
    EmptySet => "emptySet", is::empty_set, Description::EmptySet;
    NonEmptySet => "nonEmptySet", is::non_empty_set, Description::NonEmptySet;
    WeakMap => "weakMap", is::weak_map, TypeName::WeakMap;
    WeakSet => "weakSet", is::weak_set, TypeName::WeakSet;
    TypedArray => "typedArray", is::typed_array, Description::TypedArray;
    Int8Array => "int8Array", is::int8_array, TypeName::Int8Array;
    Uint8Array => "uint8Array", is::uint8_array, TypeName::Uint8Array;
    Uint8ClampedArray => "uint8ClampedArray", is::uint8_clamped_array, TypeName::Uint8ClampedArray;
    Int16Array => "int16Array", is::int16_array, TypeName::Int16Array;
    Uint16Array => "uint16Array", is::uint16_array, TypeName::Uint16Array;
    Int32Array => "int32Array", is::int32_array, TypeName::Int32Array;
    Uint32Array => "uint32Array", is::uint32_array, TypeName::Uint32Array;
    Float16Array => "float16Array", is::float16_array, TypeName::Float16Array;
    Float32Array => "float32Array", is::float32_array, TypeName::Float32Array;
    Float64Array => "float64Array", is::float64_array, TypeName::Float64Array;
    BigInt64Array => "bigInt64Array", is::big_int64_array, TypeName::BigInt64Array;
    BigUint64Array => "bigUint64Array", is::big_uint64_array, TypeName::BigUint64Array;
    ArrayBuffer => "arrayBuffer", is::array_buffer, TypeName::ArrayBuffer;
    DataView => "dataView", is::data_view, TypeName::DataView;

    // Objects
    Object => "object", is::object, TypeName::Object;
    EmptyObject => "emptyObject", is::empty_object, Description::EmptyObject;
    NonEmptyObject => "nonEmptyObject", is::non_empty_object, Description::NonEmptyObject;
    PlainObject => "plainObject", is::plain_object, Description::PlainObject;
    UrlInstance => "urlInstance", is::url_instance, Description::UrlInstance;
    RegExp => "regExp", is::regexp, TypeName::RegExp;
    Date => "date", is::date, TypeName::Date;
    Error => "error", is::error, TypeName::Error;

    // Shapes
    Promise => "promise", is::promise, TypeName::Promise;
    NativePromise => "nativePromise", is::native_promise, Description::NativePromise;
    Generator => "generator", is::generator, TypeName::Generator;
    AsyncGenerator => "asyncGenerator", is::async_generator, TypeName::AsyncGenerator;
    Iterable => "iterable", is::iterable, Description::Iterable;
    AsyncIterable => "asyncIterable", is::async_iterable, Description::AsyncIterable;
    ArrayLike => "arrayLike", is::array_like, Description::ArrayLike;
}

impl Check {
    /// Wrap a caller-supplied predicate. `name` is what assertion messages
    /// report as expected.
    pub fn custom(
        name: impl Into<Cow<'static, str>>,
        predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Check {
        Check::Custom {
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }
}

/// The predicate that accepts exactly the values of a category. The callable
/// refinements map to their refinement predicates.
impl From<TypeName> for Check {
    fn from(name: TypeName) -> Self {
        match name {
            TypeName::Undefined => Check::Undefined,
            TypeName::Null => Check::Null,
            TypeName::String => Check::String,
            TypeName::Number => Check::Number,
            TypeName::BigInt => Check::BigInt,
            TypeName::Boolean => Check::Boolean,
            TypeName::Symbol => Check::Symbol,
            TypeName::Function => Check::Function,
            TypeName::GeneratorFunction => Check::GeneratorFunction,
            TypeName::AsyncGeneratorFunction => Check::AsyncGeneratorFunction,
            TypeName::AsyncFunction => Check::AsyncFunction,
            TypeName::Array => Check::Array,
            TypeName::Object => Check::Object,
            TypeName::RegExp => Check::RegExp,
            TypeName::Date => Check::Date,
            TypeName::Error => Check::Error,
            TypeName::Map => Check::Map,
            TypeName::Set => Check::Set,
            TypeName::WeakMap => Check::WeakMap,
            TypeName::WeakSet => Check::WeakSet,
            TypeName::Promise => Check::NativePromise,
            TypeName::Int8Array => Check::Int8Array,
            TypeName::Uint8Array => Check::Uint8Array,
            TypeName::Uint8ClampedArray => Check::Uint8ClampedArray,
            TypeName::Int16Array => Check::Int16Array,
            TypeName::Uint16Array => Check::Uint16Array,
            TypeName::Int32Array => Check::Int32Array,
            TypeName::Uint32Array => Check::Uint32Array,
            TypeName::Float16Array => Check::Float16Array,
            TypeName::Float32Array => Check::Float32Array,
            TypeName::Float64Array => Check::Float64Array,
            TypeName::BigInt64Array => Check::BigInt64Array,
            TypeName::BigUint64Array => Check::BigUint64Array,
            TypeName::ArrayBuffer => Check::ArrayBuffer,
            TypeName::DataView => Check::DataView,
            TypeName::Generator => Check::Generator,
            TypeName::AsyncGenerator => Check::AsyncGenerator,
        }
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Check::InRange(bound) => f.debug_tuple("InRange").field(bound).finish(),
            Check::DirectInstanceOf(constructor) => {
                f.debug_tuple("DirectInstanceOf").field(constructor).finish()
            }
            Check::Custom { name, .. } => f.debug_struct("Custom").field("name", name).finish(),
            unary => f.write_str(unary.name()),
        }
    }
}
