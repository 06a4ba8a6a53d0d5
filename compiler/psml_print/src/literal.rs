//! Literal text for leaf values.
//!
//! Numbers follow the host runtime's `Number#toString` so REPL output stays
//! stable: shortest round-trip digits, exponent notation outside
//! `[1e-6, 1e21)`, and `.0` appended to integral results so floats never
//! read as integers.

/// Format a float in shortest round-trip form.
///
/// ```text
/// 42.0   -> "42.0"
/// 0.1    -> "0.1"
/// 1e21   -> "1e+21"
/// 1.5e-7 -> "1.5e-7"
/// NaN    -> "NaN"
/// ```
pub fn format_float(f: f64) -> String {
    let mut text = number_to_string(f);
    if is_integer_text(&text) {
        text.push_str(".0");
    }
    text
}

fn number_to_string(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Negative zero prints as plain zero.
    if f == 0.0 {
        return "0".to_string();
    }

    let magnitude = f.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{f}");
    }

    // `{:e}` gives shortest digits but omits the sign of positive exponents.
    let text = format!("{f:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

/// `-?[0-9]+`
fn is_integer_text(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Quote and escape a string as a JSON string literal.
pub fn quote_string(s: &str) -> String {
    // Serializing a `str` cannot fail; Debug quoting is only a backstop.
    serde_json::to_string(s).unwrap_or_else(|_| format!("{s:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn integral_floats_get_decimal_suffix() {
        assert_eq!(format_float(42.0), "42.0");
        assert_eq!(format_float(-3.0), "-3.0");
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(-0.0), "0.0");
        assert_eq!(format_float(1e20), "100000000000000000000.0");
    }

    #[test]
    fn fractional_floats_use_shortest_digits() {
        assert_eq!(format_float(0.1), "0.1");
        assert_eq!(format_float(1.5), "1.5");
        assert_eq!(format_float(-2.25), "-2.25");
        assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_float(0.000_001), "0.000001");
    }

    #[test]
    fn large_and_small_magnitudes_use_exponents() {
        assert_eq!(format_float(1e21), "1e+21");
        assert_eq!(format_float(-1.5e300), "-1.5e+300");
        assert_eq!(format_float(1.5e-7), "1.5e-7");
        assert_eq!(format_float(5e-324), "5e-324");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_float(f64::NAN), "NaN");
        assert_eq!(format_float(f64::INFINITY), "Infinity");
        assert_eq!(format_float(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn quote_escapes_like_json() {
        assert_eq!(quote_string("hi"), r#""hi""#);
        assert_eq!(quote_string("a\"b"), r#""a\"b""#);
        assert_eq!(quote_string("line\nbreak\ttab"), r#""line\nbreak\ttab""#);
        assert_eq!(quote_string("back\\slash"), r#""back\\slash""#);
        assert_eq!(quote_string("\u{1}"), r#""\u0001""#);
        assert_eq!(quote_string("héllo ✓"), "\"héllo ✓\"");
        assert_eq!(quote_string(""), r#""""#);
    }
}
