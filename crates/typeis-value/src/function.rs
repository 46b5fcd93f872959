//! Callable values.
//!
//! A `Function` records what a reflective host can observe about a callable:
//! its name, the syntactic form it was created with, and its source text.
//! Whether the function object gets an own `prototype` property is derived
//! from the form, the same way ECMAScript does it.

use bitflags::bitflags;
use std::sync::Arc;

bitflags! {
    /// Syntactic form of a callable.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct FunctionFlags: u8 {
        const ASYNC = 1 << 0;
        const GENERATOR = 1 << 1;
        /// Arrow function (`() => {}`).
        const ARROW = 1 << 2;
        /// Concise method (`{ m() {} }`).
        const METHOD = 1 << 3;
        /// Result of `Function.prototype.bind`.
        const BOUND = 1 << 4;
        /// Built-in function implemented by the host.
        const NATIVE = 1 << 5;
    }
}

#[derive(Clone, Debug)]
pub struct Function {
    name: Arc<str>,
    flags: FunctionFlags,
    source: Arc<str>,
}

impl Function {
    pub fn new(name: &str, flags: FunctionFlags, source: &str) -> Function {
        Function {
            name: Arc::from(name),
            flags,
            source: Arc::from(source),
        }
    }

    /// `function name() {}`
    pub fn declaration(name: &str) -> Function {
        let source = if name.is_empty() {
            "function () {}".to_string()
        } else {
            format!("function {name}() {{}}")
        };
        Function::new(name, FunctionFlags::empty(), &source)
    }

    /// `() => {}`
    pub fn arrow() -> Function {
        Function::new("", FunctionFlags::ARROW, "() => {}")
    }

    /// `{ name() {} }`
    pub fn method(name: &str) -> Function {
        Function::new(name, FunctionFlags::METHOD, &format!("{name}() {{}}"))
    }

    /// `async function name() {}`
    pub fn async_function(name: &str) -> Function {
        let source = if name.is_empty() {
            "async function () {}".to_string()
        } else {
            format!("async function {name}() {{}}")
        };
        Function::new(name, FunctionFlags::ASYNC, &source)
    }

    /// `async () => {}`
    pub fn async_arrow() -> Function {
        Function::new(
            "",
            FunctionFlags::ASYNC | FunctionFlags::ARROW,
            "async () => {}",
        )
    }

    /// `function* name() {}`
    pub fn generator(name: &str) -> Function {
        Function::new(
            name,
            FunctionFlags::GENERATOR,
            &format!("function* {name}() {{}}"),
        )
    }

    /// `async function* name() {}`
    pub fn async_generator(name: &str) -> Function {
        Function::new(
            name,
            FunctionFlags::ASYNC | FunctionFlags::GENERATOR,
            &format!("async function* {name}() {{}}"),
        )
    }

    /// The constructor produced by a class declaration.
    pub fn class(name: &str, extends: Option<&str>) -> Function {
        let source = match extends {
            Some(base) => format!("class {name} extends {base} {{}}"),
            None => format!("class {name} {{}}"),
        };
        Function::new(name, FunctionFlags::empty(), &source)
    }

    /// A host built-in such as `Array.prototype.forEach`.
    pub fn native(name: &str) -> Function {
        Function::new(
            name,
            FunctionFlags::NATIVE,
            &format!("function {name}() {{ [native code] }}"),
        )
    }

    /// `Function.prototype.bind`: the result keeps the async and generator
    /// form of its target.
    pub fn bind(&self) -> Function {
        let kept = self.flags & (FunctionFlags::ASYNC | FunctionFlags::GENERATOR);
        Function {
            name: Arc::from(format!("bound {}", self.name)),
            flags: kept | FunctionFlags::BOUND,
            source: Arc::from("function () { [native code] }"),
        }
    }

    /// Replace the recorded source text.
    pub fn with_source(mut self, source: &str) -> Function {
        self.source = Arc::from(source);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn flags(&self) -> FunctionFlags {
        self.flags
    }

    /// Text returned by `Function.prototype.toString`.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_async(&self) -> bool {
        self.flags.contains(FunctionFlags::ASYNC)
    }

    pub fn is_generator(&self) -> bool {
        self.flags.contains(FunctionFlags::GENERATOR)
    }

    /// Whether a freshly created function object of this form carries an own
    /// `prototype` property.
    ///
    /// Arrows, methods, bound functions, natives and plain async functions do
    /// not. Generator and async generator functions do, as do ordinary
    /// functions and class constructors.
    pub fn has_own_prototype(&self) -> bool {
        if self.flags.intersects(
            FunctionFlags::ARROW | FunctionFlags::METHOD | FunctionFlags::BOUND | FunctionFlags::NATIVE,
        ) {
            return false;
        }
        self.is_generator() || !self.is_async()
    }

    /// Internal construction tag, as `Object.prototype.toString` reports it.
    pub fn construction_tag(&self) -> &'static str {
        match (self.is_async(), self.is_generator()) {
            (true, true) => "AsyncGeneratorFunction",
            (true, false) => "AsyncFunction",
            (false, true) => "GeneratorFunction",
            (false, false) => "Function",
        }
    }
}
