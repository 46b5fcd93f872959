//! Numeric limits shared by the value model and the predicate set.

/// Largest integer `n` such that `n` and `n + 1` are both exactly representable
/// as an IEEE-754 double (2^53 - 1).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Negation of [`MAX_SAFE_INTEGER`].
pub const MIN_SAFE_INTEGER: f64 = -MAX_SAFE_INTEGER;

/// Number of elements a range bound sequence must carry.
pub const RANGE_BOUND_ARITY: usize = 2;
