use super::{Cursor, Outcome};
use crate::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    True,
    False,
    Null,
}

impl Keyword {
    /// Match order.
    const ALL: [Keyword; 3] = [Keyword::True, Keyword::False, Keyword::Null];

    fn literal(self) -> &'static str {
        match self {
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::Null => "null",
        }
    }

    fn value(self) -> Value {
        match self {
            Keyword::True => Value::Boolean(true),
            Keyword::False => Value::Boolean(false),
            Keyword::Null => Value::Null,
        }
    }
}

/// Matches `true`, `false` or `null` as whole literals. What follows the
/// literal is not examined: `truex` yields `true` and leaves `x` unread.
pub(super) fn parse(start: Cursor<'_>) -> Outcome<'_, Value> {
    for keyword in Keyword::ALL {
        let literal = keyword.literal();
        if start.at_literal(literal) {
            let mut cursor = start.branch();
            cursor.advance(literal.len());
            return Outcome::Valid(keyword.value(), cursor);
        }
    }
    Outcome::Unrecognized
}
