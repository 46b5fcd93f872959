use super::*;

#[test]
fn test_single_mismatch_message() {
    let err = TypeMismatch::single(TypeName::Number, TypeName::String);
    assert_eq!(
        err.to_string(),
        "Expected value which is `number`, received value of type `string`."
    );
}

#[test]
fn test_refinement_mismatch_message() {
    let err = TypeMismatch::single(AssertionTypeDescription::EmptyString, TypeName::String);
    assert_eq!(
        err.to_string(),
        "Expected value which is `empty string`, received value of type `string`."
    );
}

#[test]
fn test_any_mismatch_names_every_predicate() {
    let err = TypeMismatch {
        expected: vec![TypeName::String.into(), TypeName::Number.into()],
        actual: vec![TypeName::Object, TypeName::Boolean],
        quantifier: Quantifier::Any,
    };
    assert_eq!(
        err.to_string(),
        "Expected any of values to be `string` or `number`, received values of types `Object`, `boolean`."
    );
}

#[test]
fn test_all_mismatch_message() {
    let err = TypeMismatch {
        expected: vec![Expected::Named("isPositive".into())],
        actual: vec![TypeName::Number, TypeName::Array],
        quantifier: Quantifier::All,
    };
    assert_eq!(
        err.to_string(),
        "Expected all values to be `isPositive`, received values of types `number`, `Array`."
    );
}

#[test]
fn test_error_kind_helpers() {
    let argument: TypeIsError = ArgumentError::RangeArity { len: 3 }.into();
    assert!(argument.is_argument());
    assert!(!argument.is_type_mismatch());
    assert!(argument.as_type_mismatch().is_none());
    assert_eq!(
        argument.to_string(),
        "range bound must contain exactly 2 numbers, received 3"
    );

    let mismatch: TypeIsError = TypeMismatch::single(TypeName::Map, TypeName::Set).into();
    assert!(mismatch.is_type_mismatch());
    assert_eq!(
        mismatch.as_type_mismatch().map(|m| m.actual.clone()),
        Some(vec![TypeName::Set])
    );
}

#[test]
fn test_mismatch_is_a_leaf_error() {
    let mismatch = TypeMismatch::single(TypeName::Map, TypeName::Set);
    let err: &dyn std::error::Error = &mismatch;
    assert!(err.source().is_none());
    assert_eq!(
        err.to_string(),
        "Expected value which is `Map`, received value of type `Set`."
    );

    let wrapped = TypeIsError::from(mismatch.clone());
    assert_eq!(wrapped.to_string(), mismatch.to_string());
}

#[test]
fn test_any_mismatch_without_predicates() {
    let err = TypeMismatch {
        expected: vec![],
        actual: vec![TypeName::String],
        quantifier: Quantifier::Any,
    };
    assert_eq!(
        err.to_string(),
        "Expected any of values to be , received values of types `string`."
    );
}
