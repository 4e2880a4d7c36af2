use once_cell::sync::Lazy;
use regex::Regex;

use crate::value::Value;

// Decimal floating-point literals only; spellings like "inf" and "nan"
// stay plain strings.
static FLOAT_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").unwrap());

/// Coerce one trimmed scalar fragment into a typed [`Value`].
///
/// This is a total function: there is no reserved or invalid token class,
/// so unrecognised text always maps to a plain string. Interpretation
/// precedence is fixed, first match wins:
///
/// 1. empty text -> `Null`
/// 2. `true`/`yes`/`on` and `false`/`no`/`off` (case-insensitive) -> `Bool`
/// 3. `null`/`none`/`~` (case-insensitive) -> `Null`
/// 4. all ASCII decimal digits -> `Int` (a leading sign falls through)
/// 5. decimal floating-point literal -> `Float`
/// 6. one matching pair of `"` or `'` -> `Str` of the inner text
/// 7. anything else -> `Str` verbatim
pub fn coerce(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::Null;
    }

    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" => return Value::Bool(true),
        "false" | "no" | "off" => return Value::Bool(false),
        "null" | "none" | "~" => return Value::Null,
        _ => {}
    }

    if raw.bytes().all(|b| b.is_ascii_digit()) {
        // overflow of i64 falls through to the float branch
        if let Ok(n) = raw.parse::<i64>() {
            return Value::Int(n);
        }
    }

    if FLOAT_LITERAL.is_match(raw) {
        if let Ok(x) = raw.parse::<f64>() {
            return Value::Float(x);
        }
    }

    if raw.len() >= 2 {
        let bytes = raw.as_bytes();
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            // no escape processing inside quotes
            return Value::Str(raw[1..raw.len() - 1].to_string());
        }
    }

    Value::Str(raw.to_string())
}
