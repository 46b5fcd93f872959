//! Classification from many threads at once.
//!
//! Values share intrinsic prototypes through the process-wide realm; these
//! tests hammer the realm's lazy initialisation and the shared prototypes
//! from a rayon pool.

use rayon::prelude::*;
use typeis::{Check, Function, TypeName, TypedArrayKind, Value, classify, is, realm};

fn sample(i: usize) -> (Value, TypeName) {
    match i % 8 {
        0 => (Value::from(i as f64), TypeName::Number),
        1 => (Value::from(format!("{i}")), TypeName::String),
        2 => (Value::array([Value::from(1)]), TypeName::Array),
        3 => (Value::promise(), TypeName::Promise),
        4 => (Value::function(Function::generator("g")), TypeName::Function),
        5 => (
            Value::typed_array(TypedArrayKind::ALL[i % 12], i % 5),
            TypeName::TYPED_ARRAYS[i % 12],
        ),
        6 => (Value::object([("i", Value::from(i as f64))]), TypeName::Object),
        _ => (Value::map([]), TypeName::Map),
    }
}

#[test]
fn test_parallel_classification_matches_sequential() {
    let expected: Vec<TypeName> = (0..4096).map(|i| sample(i).1).collect();
    let actual: Vec<TypeName> = (0..4096)
        .into_par_iter()
        .map(|i| classify(&sample(i).0))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_shared_values_across_threads() {
    let values: Vec<Value> = (0..512).map(|i| sample(i).0).collect();
    let sequential: Vec<bool> = values.iter().map(is::iterable).collect();
    let parallel: Vec<bool> = values.par_iter().map(is::iterable).collect();
    assert_eq!(parallel, sequential);

    let plain = values
        .par_iter()
        .filter(|value| is::plain_object(value))
        .count();
    assert_eq!(plain, 64);
}

#[test]
fn test_realm_is_shared() {
    let prototypes: Vec<usize> = (0..64)
        .into_par_iter()
        .map(|_| std::sync::Arc::as_ptr(realm().object_prototype()) as usize)
        .collect();
    assert!(prototypes.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn test_checks_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Check>();
    assert_send_sync::<Value>();

    let checks: Vec<Check> = Check::ALL_UNARY.to_vec();
    let value = Value::from("🦄");
    let accepted: Vec<&str> = checks
        .par_iter()
        .filter(|check| check.test(&value) == Ok(true))
        .map(|check| check.name())
        .collect();
    assert!(accepted.contains(&"string"));
    assert!(accepted.contains(&"nonEmptyString"));
    assert!(!accepted.contains(&"emptyString"));
}
