//! The predicate set.
//!
//! One total `fn(&Value) -> bool` per category or refinement. Category
//! predicates defer to the classifier; refinements add a test on top of a
//! category match; shape predicates probe for members directly.
//!
//! The predicates that take an auxiliary argument or can fail on caller
//! misuse (`in_range`, `any`, `all`) return `Result<bool, TypeIsError>`.

mod collections;
mod functions;
mod numbers;
mod objects;
mod primitives;
mod shapes;
mod strings;

pub use collections::*;
pub use functions::*;
pub use numbers::*;
pub use objects::*;
pub use primitives::*;
pub use shapes::*;
pub use strings::*;

pub use crate::classifier::classify;
pub use crate::combinators::{all, any};
pub use crate::range::in_range;
