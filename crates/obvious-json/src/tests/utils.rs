use crate::{Outcome, Parser, ParserOptions, Value, parse_value};

/// Options under which `serde_json` output reads back unchanged.
pub(crate) fn reference_options() -> ParserOptions {
    ParserOptions {
        decode_unicode_escapes: true,
        max_depth: None,
        ..ParserOptions::default()
    }
}

/// Value and consumed length, panicking on anything but `Valid`.
pub(crate) fn valid(input: &str) -> (Value, usize) {
    match parse_value(input) {
        Outcome::Valid(value, cursor) => (value, cursor.position()),
        other => panic!("expected {input:?} to parse, got {other:?}"),
    }
}

pub(crate) fn valid_with(options: ParserOptions, input: &str) -> (Value, usize) {
    match Parser::new(options).value(crate::Cursor::new(input)) {
        Outcome::Valid(value, cursor) => (value, cursor.position()),
        other => panic!("expected {input:?} to parse, got {other:?}"),
    }
}

/// Converts a `serde_json` value into ours.
pub(crate) fn from_reference(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(a) => a.into_iter().map(from_reference).collect(),
        serde_json::Value::Object(m) => m.into_iter().map(|(k, v)| (k, from_reference(v))).collect(),
    }
}

/// Structural equality with a relative tolerance on numbers, since digits
/// are accumulated rather than correctly rounded.
pub(crate) fn approx_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            x == y || (x - y).abs() <= 1e-12 * x.abs().max(y.abs())
        }
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| approx_eq(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .zip(ys)
                    .all(|((kx, x), (ky, y))| kx == ky && approx_eq(x, y))
        }
        _ => a == b,
    }
}
