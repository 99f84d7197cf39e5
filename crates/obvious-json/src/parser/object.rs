use super::{Cursor, Outcome, Parser, outcome::reject};
use crate::{SyntaxError, Value, value::Map};

/// `{ "key": value, ... }`. A repeated key replaces the earlier value and
/// keeps the earlier key's position.
pub(super) fn parse<'src>(parser: &Parser, start: Cursor<'src>, depth: usize) -> Outcome<'src, Value> {
    if start.head() != Some('{') {
        return Outcome::Unrecognized;
    }
    let depth = depth + 1;
    if parser.nesting_exceeded(depth) {
        return reject(SyntaxError::NestingTooDeep, start);
    }
    log::trace!("object at byte {} (depth {depth})", start.position());

    let mut cursor = start.branch();
    cursor.advance(1);
    cursor = parser.skip_whitespace(cursor);

    let mut entries = Map::new();
    let mut first = true;
    loop {
        match cursor.head() {
            None => return reject(SyntaxError::UnterminatedObject, cursor),
            Some('}') => {
                cursor.advance(1);
                return Outcome::Valid(Value::Object(entries), cursor);
            }
            Some(',') if !first => {
                cursor.advance(1);
                cursor = parser.skip_whitespace(cursor);
            }
            Some(_) if !first => return reject(SyntaxError::MissingObjectComma, cursor),
            Some(_) => first = false,
        }

        let key = match parser.string(cursor) {
            Outcome::Valid(key, next) => {
                cursor = next;
                key
            }
            Outcome::Invalid(err) => return Outcome::Invalid(err),
            Outcome::Unrecognized => return reject(SyntaxError::NonStringKey, cursor),
        };

        cursor = parser.skip_whitespace(cursor);
        if cursor.head() != Some(':') {
            return reject(SyntaxError::MissingColon, cursor);
        }
        cursor.advance(1);

        match parser.value_at(cursor, depth) {
            Outcome::Valid(value, next) => {
                entries.insert(key, value);
                cursor = next;
            }
            Outcome::Invalid(err) => return Outcome::Invalid(err),
            Outcome::Unrecognized => return reject(SyntaxError::NonValueInObject, cursor),
        }
    }
}
