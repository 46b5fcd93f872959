//! String refinements.

use typeis_value::Value;
use typeis_value::numeric::{string_to_number, trim_js_whitespace};

/// A string that converts to a number.
///
/// Native conversion turns an empty or all-whitespace string into `0`; those
/// are rejected here. `"Infinity"` and radix literals such as `"0x56"` are
/// accepted.
pub fn numeric_string(value: &Value) -> bool {
    value.as_str().is_some_and(|s| {
        let trimmed = trim_js_whitespace(s);
        !trimmed.is_empty() && !string_to_number(trimmed).is_nan()
    })
}

pub fn empty_string(value: &Value) -> bool {
    value.as_str().is_some_and(str::is_empty)
}

pub fn non_empty_string(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.is_empty())
}

/// Empty, or made only of ECMAScript whitespace and line terminators.
pub fn empty_string_or_whitespace(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| trim_js_whitespace(s).is_empty())
}

/// A string that parses as an absolute WHATWG URL.
pub fn url_string(value: &Value) -> bool {
    value.as_str().is_some_and(|s| url::Url::parse(s).is_ok())
}
