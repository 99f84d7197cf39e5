//! Insignificant whitespace between tokens.

use super::{Cursor, Outcome};

#[inline]
fn is_json_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Moves past a maximal run of whitespace. An exhausted cursor comes back
/// unchanged.
pub(super) fn skip(mut cursor: Cursor<'_>, allow_unicode: bool) -> Cursor<'_> {
    while let Some(c) = cursor.head() {
        if !(is_json_whitespace(c) || (allow_unicode && c.is_whitespace())) {
            break;
        }
        cursor.advance(c.len_utf8());
    }
    cursor
}

/// The whitespace rule as an [`Outcome`]: always valid, never carries a value.
pub(super) fn parse(cursor: Cursor<'_>, allow_unicode: bool) -> Outcome<'_, ()> {
    Outcome::Valid((), skip(cursor, allow_unicode))
}
