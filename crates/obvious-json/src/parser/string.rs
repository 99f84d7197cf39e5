//! Double-quoted string literals.
//!
//! The scanner has two states. In `Normal`, plain characters are copied into
//! the output in runs; a `"` ends the string and a `\` switches to `Escape`.
//! In `Escape`, the next character is translated through the short escape
//! table and scanning returns to `Normal`.
//!
//! Characters outside the table are kept as-is rather than rejected, so
//! `"\q"` reads as `q`. With
//! [`decode_unicode_escapes`](crate::ParserOptions::decode_unicode_escapes)
//! set, `u` is instead followed by four hex digits naming a UTF-16 code unit.

use super::{Cursor, Outcome, outcome::reject};
use crate::{ParserOptions, SyntaxError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    Escape,
}

/// Translates the character after a backslash. `None` means the character is
/// not a recognized escape.
fn unescape(c: char) -> Option<char> {
    Some(match c {
        '"' => '"',
        'b' => '\u{0008}',
        'f' => '\u{000C}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        '\\' => '\\',
        '/' => '/',
        _ => return None,
    })
}

pub(super) fn parse<'src>(start: Cursor<'src>, options: &ParserOptions) -> Outcome<'src, String> {
    if start.head() != Some('"') {
        return Outcome::Unrecognized;
    }
    let mut cursor = start.branch();
    cursor.advance(1);

    let mut value = String::new();
    let mut state = ScanState::Normal;

    loop {
        match state {
            ScanState::Normal => {
                let rest = cursor.remaining();
                let run = rest.find(['"', '\\']).unwrap_or(rest.len());
                value.push_str(&rest[..run]);
                cursor.advance(run);

                match cursor.bump() {
                    Some('"') => return Outcome::Valid(value, cursor),
                    Some(_) => state = ScanState::Escape,
                    None => break,
                }
            }
            ScanState::Escape => {
                let Some(c) = cursor.bump() else {
                    break;
                };
                state = ScanState::Normal;

                if let Some(unescaped) = unescape(c) {
                    value.push(unescaped);
                } else if c == 'u' && options.decode_unicode_escapes {
                    match decode_unicode_escape(&mut cursor) {
                        Ok(decoded) => value.push(decoded),
                        Err(err) => return reject(err, cursor),
                    }
                } else {
                    value.push(c);
                }
            }
        }
    }

    reject(SyntaxError::UnterminatedString, cursor)
}

/// Reads the four hex digits after `\u`.
fn read_code_unit(cursor: &mut Cursor<'_>) -> Result<u32, SyntaxError> {
    let digits = cursor.take(4);
    if digits.len() < 4 {
        return Err(if cursor.remaining().len() < 4 {
            SyntaxError::TruncatedUnicodeEscape
        } else {
            SyntaxError::InvalidUnicodeEscape
        });
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(SyntaxError::InvalidUnicodeEscape);
    }
    u32::from_str_radix(digits, 16).map_err(|_| SyntaxError::InvalidUnicodeEscape)
}

/// Decodes one `\uXXXX` escape whose `\u` has been consumed, pairing a high
/// surrogate with an immediately following `\uXXXX` low surrogate. Unpaired
/// surrogates become U+FFFD.
fn decode_unicode_escape(cursor: &mut Cursor<'_>) -> Result<char, SyntaxError> {
    let unit = read_code_unit(cursor)?;
    if !(0xD800..0xDC00).contains(&unit) {
        return Ok(char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER));
    }

    if cursor.at_literal("\\u") {
        let mut ahead = cursor.branch();
        ahead.advance(2);
        if let Ok(low @ 0xDC00..=0xDFFF) = read_code_unit(&mut ahead) {
            *cursor = ahead;
            let scalar = 0x1_0000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
            return Ok(char::from_u32(scalar).unwrap_or(char::REPLACEMENT_CHARACTER));
        }
    }
    Ok(char::REPLACEMENT_CHARACTER)
}
