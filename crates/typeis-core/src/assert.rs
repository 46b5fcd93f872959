//! Assertion wrapper.
//!
//! Every predicate in [`crate::is`] has a counterpart here with the same
//! arguments. It returns `Ok(())` when the predicate holds and a
//! [`TypeMismatch`] naming the expected and the actual category otherwise.
//! The predicate is evaluated once, and its own errors (a malformed range
//! bound) come back unchanged instead of as a mismatch.

use crate::check::Check;
use crate::classifier::classify;
use crate::combinators::{CheckList, all_of, any_of};
use crate::range::RangeBound;
use typeis_common::{Quantifier, TypeIsError, TypeMismatch};
use typeis_value::Value;

/// Assert an arbitrary [`Check`].
pub fn that(check: &Check, value: &Value) -> Result<(), TypeIsError> {
    if check.test(value)? {
        return Ok(());
    }
    let actual = classify(value);
    tracing::trace!(check = check.name(), %actual, "assertion failed");
    Err(TypeMismatch::single(check.expected(), actual).into())
}

macro_rules! unary_assertions {
    ($($name:ident => $variant:ident),* $(,)?) => {
        $(
            pub fn $name(value: &Value) -> Result<(), TypeIsError> {
                that(&Check::$variant, value)
            }
        )*
    };
}

unary_assertions! {
    undefined => Undefined,
    null => Null,
    null_or_undefined => NullOrUndefined,
    string => String,
    number => Number,
    bigint => BigInt,
    boolean => Boolean,
    symbol => Symbol,
    primitive => Primitive,
    truthy => Truthy,
    falsy => Falsy,
    nan => Nan,
    integer => Integer,
    safe_integer => SafeInteger,
    infinite => Infinite,
    even_integer => EvenInteger,
    odd_integer => OddInteger,
    numeric_string => NumericString,
    empty_string => EmptyString,
    non_empty_string => NonEmptyString,
    empty_string_or_whitespace => EmptyStringOrWhitespace,
    url_string => UrlString,
    function => Function,
    async_function => AsyncFunction,
    generator_function => GeneratorFunction,
    async_generator_function => AsyncGeneratorFunction,
    bound_function => BoundFunction,
    class_ => Class,
    array => Array,
    empty_array => EmptyArray,
    non_empty_array => NonEmptyArray,
    map => Map,
    empty_map => EmptyMap,
    non_empty_map => NonEmptyMap,
    set => Set,
    empty_set => EmptySet,
    non_empty_set => NonEmptySet,
    weak_map => WeakMap,
    weak_set => WeakSet,
    typed_array => TypedArray,
    int8_array => Int8Array,
    uint8_array => Uint8Array,
    uint8_clamped_array => Uint8ClampedArray,
    int16_array => Int16Array,
    uint16_array => Uint16Array,
    int32_array => Int32Array,
    uint32_array => Uint32Array,
    float16_array => Float16Array,
    float32_array => Float32Array,
    float64_array => Float64Array,
    big_int64_array => BigInt64Array,
    big_uint64_array => BigUint64Array,
    array_buffer => ArrayBuffer,
    data_view => DataView,
    object => Object,
    empty_object => EmptyObject,
    non_empty_object => NonEmptyObject,
    plain_object => PlainObject,
    url_instance => UrlInstance,
    regexp => RegExp,
    date => Date,
    error => Error,
    promise => Promise,
    native_promise => NativePromise,
    generator => Generator,
    async_generator => AsyncGenerator,
    iterable => Iterable,
    async_iterable => AsyncIterable,
    array_like => ArrayLike,
}

/// Fails with the bound's argument error before the value is inspected.
pub fn in_range(value: &Value, bound: impl Into<RangeBound>) -> Result<(), TypeIsError> {
    that(&Check::InRange(bound.into()), value)
}

pub fn direct_instance_of(value: &Value, constructor: &Value) -> Result<(), TypeIsError> {
    that(&Check::DirectInstanceOf(constructor.clone()), value)
}

/// The failure names every supplied predicate and the category of every
/// supplied value.
pub fn any(predicates: impl Into<CheckList>, values: &[Value]) -> Result<(), TypeIsError> {
    let predicates = predicates.into();
    if any_of(predicates.as_slice(), values)? {
        return Ok(());
    }
    Err(TypeMismatch {
        expected: predicates.as_slice().iter().map(Check::expected).collect(),
        actual: values.iter().map(classify).collect(),
        quantifier: Quantifier::Any,
    }
    .into())
}

pub fn all(predicate: Check, values: &[Value]) -> Result<(), TypeIsError> {
    if all_of(&predicate, values)? {
        return Ok(());
    }
    Err(TypeMismatch {
        expected: vec![predicate.expected()],
        actual: values.iter().map(classify).collect(),
        quantifier: Quantifier::All,
    }
    .into())
}
