//! Property tests for the range checker and the combinators.

use proptest::prelude::*;
use typeis_core::{Check, RangeBound, Value, assert, classify, is};

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        (-1000i32..1000).prop_map(Value::from),
        any::<i64>().prop_map(|n| Value::BigInt(i128::from(n))),
        ".{0,12}".prop_map(Value::from),
        prop::collection::vec(any::<i32>().prop_map(Value::from), 0..4).prop_map(Value::array),
        Just(Value::empty_object()),
        Just(Value::map([])),
        Just(Value::promise()),
    ]
}

fn arb_check() -> impl Strategy<Value = Check> {
    (0..Check::ALL_UNARY.len()).prop_map(|index| Check::ALL_UNARY[index].clone())
}

fn holds(check: &Check, value: &Value) -> bool {
    check.test(value).expect("unary checks never fail")
}

proptest! {
    #[test]
    fn range_is_symmetric(x in any::<f64>(), a in any::<f64>(), b in any::<f64>()) {
        let value = Value::from(x);
        prop_assert_eq!(is::in_range(&value, [a, b]), is::in_range(&value, [b, a]));
    }

    #[test]
    fn range_contains_its_endpoints(a in -1e9f64..1e9, b in -1e9f64..1e9) {
        prop_assert_eq!(is::in_range(&Value::from(a), [a, b]), Ok(true));
        prop_assert_eq!(is::in_range(&Value::from(b), [a, b]), Ok(true));
    }

    #[test]
    fn single_bound_matches_zero_tuple(x in -100i32..100, upper in -100i32..100) {
        let value = Value::from(x);
        prop_assert_eq!(
            is::in_range(&value, RangeBound::from(upper)),
            is::in_range(&value, [0, upper])
        );
    }

    #[test]
    fn malformed_bounds_always_fail(x in any::<f64>(), bound in prop::collection::vec(any::<f64>(), 0..6)) {
        prop_assume!(bound.len() != 2);
        let result = is::in_range(&Value::from(x), bound);
        prop_assert!(result.is_err_and(|err| err.is_argument()));
    }

    #[test]
    fn all_is_conjunction(check in arb_check(), v1 in arb_value(), v2 in arb_value()) {
        let expected = holds(&check, &v1) && holds(&check, &v2);
        prop_assert_eq!(is::all(check, &[v1, v2]), Ok(expected));
    }

    #[test]
    fn any_is_disjunction(p in arb_check(), q in arb_check(), v in arb_value()) {
        let expected = holds(&p, &v) || holds(&q, &v);
        prop_assert_eq!(is::any([p, q], &[v]), Ok(expected));
    }

    #[test]
    fn assertion_agrees_with_predicate(check in arb_check(), value in arb_value()) {
        let asserted = assert::that(&check, &value);
        prop_assert_eq!(asserted.is_ok(), holds(&check, &value));
        if let Err(err) = asserted {
            let mismatch = err.as_type_mismatch().cloned();
            prop_assert_eq!(mismatch.map(|m| m.actual), Some(vec![classify(&value)]));
        }
    }

    #[test]
    fn classification_is_deterministic(value in arb_value()) {
        prop_assert_eq!(classify(&value), classify(&value.clone()));
    }
}
