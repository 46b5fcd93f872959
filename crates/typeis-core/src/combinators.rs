//! `any` / `all` combinators.
//!
//! Both reject an empty value list before evaluating anything. An empty
//! predicate list is not an error: `any` over no predicates is false. A predicate
//! that fails (a malformed `InRange` bound) aborts the combinator and the
//! error propagates unchanged.

use crate::check::Check;
use smallvec::SmallVec;
use typeis_common::{ArgumentError, TypeIsError};
use typeis_value::Value;

/// One predicate or a list of predicates, as accepted by [`any`].
#[derive(Clone, Debug, Default)]
pub struct CheckList(SmallVec<[Check; 4]>);

impl CheckList {
    pub fn as_slice(&self) -> &[Check] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Check> for CheckList {
    fn from(check: Check) -> Self {
        let mut checks = SmallVec::new();
        checks.push(check);
        CheckList(checks)
    }
}

impl<const N: usize> From<[Check; N]> for CheckList {
    fn from(checks: [Check; N]) -> Self {
        CheckList(checks.into_iter().collect())
    }
}

impl From<Vec<Check>> for CheckList {
    fn from(checks: Vec<Check>) -> Self {
        CheckList(SmallVec::from_vec(checks))
    }
}

impl From<&[Check]> for CheckList {
    fn from(checks: &[Check]) -> Self {
        CheckList(checks.iter().cloned().collect())
    }
}

impl FromIterator<Check> for CheckList {
    fn from_iter<I: IntoIterator<Item = Check>>(iter: I) -> Self {
        CheckList(iter.into_iter().collect())
    }
}

pub(crate) fn validate(values: &[Value]) -> Result<(), ArgumentError> {
    if values.is_empty() {
        return Err(ArgumentError::NoValues);
    }
    Ok(())
}

/// True iff some predicate holds for some value.
///
/// Evaluation is predicate-major and stops at the first success.
pub fn any(predicates: impl Into<CheckList>, values: &[Value]) -> Result<bool, TypeIsError> {
    let predicates = predicates.into();
    any_of(predicates.as_slice(), values)
}

pub(crate) fn any_of(predicates: &[Check], values: &[Value]) -> Result<bool, TypeIsError> {
    validate(values)?;
    tracing::trace!(
        predicates = predicates.len(),
        values = values.len(),
        "evaluating any"
    );
    for predicate in predicates {
        for value in values {
            if predicate.test(value)? {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// True iff `predicate` holds for every value. Stops at the first failure.
pub fn all(predicate: Check, values: &[Value]) -> Result<bool, TypeIsError> {
    all_of(&predicate, values)
}

pub(crate) fn all_of(predicate: &Check, values: &[Value]) -> Result<bool, TypeIsError> {
    validate(values)?;
    tracing::trace!(
        predicate = predicate.name(),
        values = values.len(),
        "evaluating all"
    );
    for value in values {
        if !predicate.test(value)? {
            return Ok(false);
        }
    }
    Ok(true)
}
