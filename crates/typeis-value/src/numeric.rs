//! String-to-number conversion with ECMAScript semantics.
//!
//! `Number(" 0x56 ")` is 86, `Number("Infinity")` is infinite, and
//! `Number("1e")` is NaN. Rust's float parser disagrees with all three in
//! some direction (it accepts `inf` and `NaN`, and knows nothing of radix
//! prefixes), so the literal grammar is validated here before handing the
//! decimal case to `str::parse`.

/// ECMAScript `WhiteSpace` or `LineTerminator` (the `\s` class).
pub fn is_js_whitespace(ch: char) -> bool {
    matches!(
        ch,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

pub fn trim_js_whitespace(text: &str) -> &str {
    text.trim_matches(is_js_whitespace)
}

/// `ToNumber` applied to a string.
pub fn string_to_number(text: &str) -> f64 {
    let trimmed = trim_js_whitespace(text);
    if trimmed.is_empty() {
        return 0.0;
    }

    let radix = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)];
    for (prefix, base) in radix {
        if let Some(rest) = trimmed.strip_prefix(prefix) {
            return parse_radix_digits(rest, base).unwrap_or(f64::NAN);
        }
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if !is_decimal_literal(trimmed) {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Digits of a `0x`/`0o`/`0b` literal, prefix already stripped.
fn parse_radix_digits(text: &str, base: u32) -> Option<f64> {
    if text.is_empty() {
        return None;
    }

    let base_value = base as f64;
    let mut value = 0f64;
    for ch in text.chars() {
        let digit = ch.to_digit(base)?;
        value = value * base_value + digit as f64;
    }
    Some(value)
}

/// `StrDecimalLiteral` without the `Infinity` alternative:
/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`
fn is_decimal_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = pos - int_start;

    let mut frac_digits = 0;
    if pos < bytes.len() && bytes[pos] == b'.' {
        pos += 1;
        let frac_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        frac_digits = pos - frac_start;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if pos < bytes.len() && matches!(bytes[pos], b'e' | b'E') {
        pos += 1;
        if pos < bytes.len() && matches!(bytes[pos], b'+' | b'-') {
            pos += 1;
        }
        let exp_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == exp_start {
            return false;
        }
    }

    pos == bytes.len()
}
