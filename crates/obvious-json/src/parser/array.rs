use super::{Cursor, Outcome, Parser, outcome::reject};
use crate::{SyntaxError, Value, value::Array};

/// `[ value, ... ]`. `depth` counts the containers around this one.
pub(super) fn parse<'src>(parser: &Parser, start: Cursor<'src>, depth: usize) -> Outcome<'src, Value> {
    if start.head() != Some('[') {
        return Outcome::Unrecognized;
    }
    let depth = depth + 1;
    if parser.nesting_exceeded(depth) {
        return reject(SyntaxError::NestingTooDeep, start);
    }
    log::trace!("array at byte {} (depth {depth})", start.position());

    let mut cursor = start.branch();
    cursor.advance(1);
    cursor = parser.skip_whitespace(cursor);

    let mut items = Array::new();
    loop {
        match cursor.head() {
            None => return reject(SyntaxError::UnterminatedArray, cursor),
            Some(']') => {
                cursor.advance(1);
                return Outcome::Valid(Value::Array(items), cursor);
            }
            Some(',') if !items.is_empty() => cursor.advance(1),
            Some(_) if !items.is_empty() => {
                return reject(SyntaxError::MissingArrayComma, cursor);
            }
            Some(_) => {}
        }

        match parser.value_at(cursor, depth) {
            Outcome::Valid(item, next) => {
                items.push(item);
                cursor = next;
            }
            Outcome::Invalid(err) => return Outcome::Invalid(err),
            Outcome::Unrecognized => return reject(SyntaxError::NonValueInArray, cursor),
        }
    }
}
