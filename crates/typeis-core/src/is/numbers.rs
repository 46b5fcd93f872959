//! Numeric refinements.

use typeis_common::limits::{MAX_SAFE_INTEGER, MIN_SAFE_INTEGER};
use typeis_value::Value;

pub fn nan(value: &Value) -> bool {
    value.as_number().is_some_and(f64::is_nan)
}

/// Finite and without a fractional part. `-0` counts.
pub fn integer(value: &Value) -> bool {
    value.as_number().is_some_and(is_integral)
}

/// An integer of magnitude at most 2^53 - 1.
pub fn safe_integer(value: &Value) -> bool {
    value
        .as_number()
        .is_some_and(|n| is_integral(n) && (MIN_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&n))
}

pub fn infinite(value: &Value) -> bool {
    value.as_number().is_some_and(f64::is_infinite)
}

pub fn even_integer(value: &Value) -> bool {
    value
        .as_number()
        .is_some_and(|n| is_integral(n) && (n % 2.0).abs() == 0.0)
}

pub fn odd_integer(value: &Value) -> bool {
    value
        .as_number()
        .is_some_and(|n| is_integral(n) && (n % 2.0).abs() == 1.0)
}

fn is_integral(n: f64) -> bool {
    n.is_finite() && n.trunc() == n
}
