//! A recursive-descent JSON parser.
//!
//! Each grammar rule reports one of three outcomes (see [`Outcome`]), which is
//! what lets the value dispatcher try alternatives in order and tell "not a
//! match" apart from "malformed".
//!
//! ```rust
//! use obvious_json::{Outcome, SyntaxError, Value, parse_value};
//!
//! let Outcome::Valid(value, cursor) = parse_value(r#" {"a": [1, true]} "#) else {
//!     panic!("expected a value");
//! };
//! assert_eq!(value["a"][1], Value::Boolean(true));
//! assert_eq!(cursor.position(), 18);
//!
//! assert_eq!(parse_value("[1,]"), Outcome::Invalid(SyntaxError::NonValueInArray));
//! assert!(parse_value("abc").is_unrecognized());
//! ```
//!
//! Parsing stops after the first value; whatever follows is left to the
//! caller, who can compare the consumed length with the input length. The
//! [`from_str`] helper and [`ParserOptions::strict`] do that check.

mod error;
mod options;
mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use error::{Error, SyntaxError};
pub use options::ParserOptions;
pub use parser::{Cursor, Outcome, Parsed, Parser, Rule};
pub use value::{Array, Map, Value};

/// Parses one value from the start of `text` with default options.
///
/// On success the cursor's [`position`](Cursor::position) is the number of
/// bytes consumed, trailing whitespace included.
pub fn parse_value(text: &str) -> Outcome<'_, Value> {
    Parser::default().value(Cursor::new(text))
}

/// Parses one value from the start of `text` with default options, folding
/// the outcome into a `Result`.
///
/// ```rust
/// use obvious_json::{Error, SyntaxError, from_str};
///
/// let parsed = from_str("[1, 2] trailing").unwrap();
/// assert_eq!(parsed.length, 7);
///
/// assert_eq!(from_str("nope"), Err(Error::Unrecognized));
/// let err = from_str(r#"{"a" 1}"#).unwrap_err();
/// assert_eq!(err, Error::Invalid(SyntaxError::MissingColon));
/// assert_eq!(err.to_string(), "invalid: expected colon in object");
/// ```
///
/// # Errors
///
/// See [`Parser::parse`].
pub fn from_str(text: &str) -> Result<Parsed, Error> {
    Parser::default().parse(text)
}
