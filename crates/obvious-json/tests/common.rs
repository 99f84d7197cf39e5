#![allow(missing_docs)]
#![allow(dead_code)]

use obvious_json::{Map, Outcome, Value, parse_value};

/// Relative tolerance for numbers; the parser accumulates digits in an `f64`
/// and so may differ from a correctly rounded reader in the last bits.
pub const TOLERANCE: f64 = 1e-12;

pub fn from_reference(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => {
            Value::Array(items.into_iter().map(from_reference).collect())
        }
        serde_json::Value::Object(entries) => Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k, from_reference(v)))
                .collect::<Map>(),
        ),
    }
}

pub fn approx_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            x == y || (x - y).abs() <= TOLERANCE * x.abs().max(y.abs())
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

/// Parses `input`, panicking unless the outcome is `Valid`.
pub fn valid(input: &str) -> (Value, usize) {
    match parse_value(input) {
        Outcome::Valid(value, cursor) => (value, cursor.position()),
        other => panic!("expected {input:?} to parse, got {other:?}"),
    }
}
