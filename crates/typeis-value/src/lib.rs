//! Runtime value model for the typeis classification engine.
//!
//! This crate provides the values the engine classifies:
//! - `Value` - primitives and shared, immutable objects
//! - `Object`, `ObjectKind`, `ObjectBuilder` - internal slots, prototype links, own properties
//! - `Function`, `FunctionFlags` - callable forms and source text
//! - `Symbol` - unique and well-known symbols
//! - `realm` - intrinsic prototypes shared by every value
//! - `numeric` - ECMAScript string-to-number conversion

pub mod symbol;
pub use symbol::Symbol;

pub mod function;
pub use function::{Function, FunctionFlags};

pub mod object;
pub use object::{Object, ObjectBuilder, ObjectKind, Property, PropertyKey, TypedArrayKind};
#[cfg(test)]
#[path = "../tests/object_tests.rs"]
mod object_tests;

pub mod realm;
pub use realm::{Realm, realm};

pub mod value;
pub use value::Value;

mod convert;
#[cfg(test)]
#[path = "../tests/convert_tests.rs"]
mod convert_tests;

pub mod numeric;
#[cfg(test)]
#[path = "../tests/numeric_tests.rs"]
mod numeric_tests;
