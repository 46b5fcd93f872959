//! Range checker.

use smallvec::SmallVec;
use typeis_common::limits::RANGE_BOUND_ARITY;
use typeis_common::{ArgumentError, TypeIsError};
use typeis_value::Value;

/// The second argument of [`in_range`].
#[derive(Clone, Debug, PartialEq)]
pub enum RangeBound {
    /// `n`: the interval between `0` and `n`, whichever side of zero `n` is.
    Upper(f64),
    /// `[a, b]`: the interval between `a` and `b` in either order. Any other
    /// length is an argument error.
    Sequence(SmallVec<[f64; 2]>),
}

impl RangeBound {
    /// Closed interval `(low, high)` described by this bound.
    ///
    /// A NaN endpoint yields an interval that contains nothing.
    pub fn interval(&self) -> Result<(f64, f64), ArgumentError> {
        match self {
            RangeBound::Upper(n) => Ok(ordered(0.0, *n)),
            RangeBound::Sequence(items) if items.len() == RANGE_BOUND_ARITY => {
                Ok(ordered(items[0], items[1]))
            }
            RangeBound::Sequence(items) => Err(ArgumentError::RangeArity { len: items.len() }),
        }
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

impl From<f64> for RangeBound {
    fn from(n: f64) -> Self {
        RangeBound::Upper(n)
    }
}

impl From<i32> for RangeBound {
    fn from(n: i32) -> Self {
        RangeBound::Upper(f64::from(n))
    }
}

impl<const N: usize> From<[f64; N]> for RangeBound {
    fn from(items: [f64; N]) -> Self {
        RangeBound::Sequence(items.into_iter().collect())
    }
}

impl<const N: usize> From<[i32; N]> for RangeBound {
    fn from(items: [i32; N]) -> Self {
        RangeBound::Sequence(items.into_iter().map(f64::from).collect())
    }
}

impl From<&[f64]> for RangeBound {
    fn from(items: &[f64]) -> Self {
        RangeBound::Sequence(SmallVec::from_slice(items))
    }
}

impl From<Vec<f64>> for RangeBound {
    fn from(items: Vec<f64>) -> Self {
        RangeBound::Sequence(SmallVec::from_vec(items))
    }
}

/// Whether `value` is a number inside the closed interval described by
/// `bound`.
///
/// The bound's shape is validated before `value` is looked at, so a malformed
/// bound fails even for a non-number.
pub fn in_range(value: &Value, bound: impl Into<RangeBound>) -> Result<bool, TypeIsError> {
    let bound = bound.into();
    Ok(contains(&bound, value)?)
}

pub(crate) fn contains(bound: &RangeBound, value: &Value) -> Result<bool, ArgumentError> {
    let (low, high) = bound.interval()?;
    Ok(value.as_number().is_some_and(|n| low <= n && n <= high))
}
