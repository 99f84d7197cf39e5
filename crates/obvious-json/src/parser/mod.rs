//! Recursive-descent JSON parser built from one function per grammar rule.
//!
//! Overview
//! - Every rule takes a [`Cursor`] and returns an [`Outcome`]: `Unrecognized`
//!   when the rule does not start at the cursor, `Invalid` when it does but
//!   the input is malformed, and `Valid` with the value and the cursor just
//!   past what was consumed.
//! - Cursors are `Copy`. A rule branches the cursor it was given and only
//!   ever moves its own copy, so a rule that gives up leaves the caller free
//!   to try the next alternative from the same position.
//! - [`Parser::value`] is the dispatcher. It trims whitespace and tries the
//!   value rules in the fixed order of [`Rule::VALUE_ORDER`]. Arrays and
//!   objects call back into it for their elements, which is the only
//!   recursion in the grammar. The current nesting depth is passed along with
//!   those calls; no rule keeps state between calls.
//! - The first `Invalid` anywhere aborts the whole parse. No partial value is
//!   returned with it and no attempt is made to resynchronize.

mod array;
mod cursor;
mod keyword;
mod number;
mod object;
mod outcome;
mod string;
mod whitespace;


use core::fmt;

pub use cursor::Cursor;
pub use outcome::Outcome;

use crate::{Error, ParserOptions, Value};

/// The value rules the dispatcher chooses between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// A double-quoted string.
    String,
    /// A number, optionally negative, with optional fraction and exponent.
    Number,
    /// `true`, `false` or `null`.
    Keyword,
    /// `[ ... ]`
    Array,
    /// `{ ... }`
    Object,
}

impl Rule {
    /// The order in which [`Parser::value`] tries the rules.
    pub const VALUE_ORDER: [Rule; 5] = [
        Rule::String,
        Rule::Number,
        Rule::Keyword,
        Rule::Array,
        Rule::Object,
    ];

    /// Lowercase rule name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Rule::String => "string",
            Rule::Number => "number",
            Rule::Keyword => "keyword",
            Rule::Array => "array",
            Rule::Object => "object",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A successfully parsed document.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    /// Bytes consumed, including whitespace after the value.
    pub length: usize,
    /// The parsed value.
    pub data: Value,
}

/// Entry point for all grammar rules.
///
/// A `Parser` only holds its [`ParserOptions`]; it can be shared freely and
/// reused for any number of inputs.
///
/// # Examples
///
/// ```rust
/// use obvious_json::{Cursor, Outcome, Parser, Value};
///
/// let parser = Parser::default();
/// let Outcome::Valid(value, cursor) = parser.value(Cursor::new("[1, 2] tail")) else {
///     panic!("expected a value");
/// };
/// assert_eq!(value, Value::Array(vec![1.0.into(), 2.0.into()]));
/// assert_eq!(cursor.remaining(), "tail");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    /// Creates a parser with the given options.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// The options this parser was created with.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Skips whitespace. Always valid, with no value.
    pub fn whitespace<'src>(&self, cursor: Cursor<'src>) -> Outcome<'src, ()> {
        whitespace::parse(cursor, self.options.allow_unicode_whitespace)
    }

    /// A double-quoted, escape-aware string.
    pub fn string<'src>(&self, cursor: Cursor<'src>) -> Outcome<'src, String> {
        string::parse(cursor, &self.options)
    }

    /// A JSON number as a double.
    pub fn number<'src>(&self, cursor: Cursor<'src>) -> Outcome<'src, f64> {
        number::parse(cursor)
    }

    /// `true`, `false` or `null`.
    pub fn keyword<'src>(&self, cursor: Cursor<'src>) -> Outcome<'src, Value> {
        keyword::parse(cursor)
    }

    /// An array. Its elements go through [`Parser::value`].
    pub fn array<'src>(&self, cursor: Cursor<'src>) -> Outcome<'src, Value> {
        array::parse(self, cursor, 0)
    }

    /// An object. Keys go through [`Parser::string`], values through
    /// [`Parser::value`].
    pub fn object<'src>(&self, cursor: Cursor<'src>) -> Outcome<'src, Value> {
        object::parse(self, cursor, 0)
    }

    /// Any value, with surrounding whitespace trimmed.
    ///
    /// Tries [`Rule::VALUE_ORDER`] and settles on the first rule that is not
    /// `Unrecognized`. If none applies, the result is `Unrecognized`.
    pub fn value<'src>(&self, cursor: Cursor<'src>) -> Outcome<'src, Value> {
        self.value_at(cursor, 0)
    }

    /// Applies a single value rule.
    pub fn apply<'src>(&self, rule: Rule, cursor: Cursor<'src>) -> Outcome<'src, Value> {
        self.apply_at(rule, cursor, 0)
    }

    /// Parses one value from the start of `text`.
    ///
    /// Unlike the rule methods, the outcome is folded into a `Result`. Input
    /// after the value is accepted and reflected in [`Parsed::length`] unless
    /// [`ParserOptions::reject_trailing_content`] is set.
    ///
    /// # Errors
    ///
    /// [`Error::Unrecognized`] when `text` does not start with a value,
    /// [`Error::Invalid`] when it is malformed, and
    /// [`Error::TrailingContent`] for leftover input in strict mode.
    pub fn parse(&self, text: &str) -> Result<Parsed, Error> {
        let (data, cursor) = self
            .value(Cursor::new(text))
            .into_result()?
            .ok_or(Error::Unrecognized)?;

        let length = cursor.position();
        if self.options.reject_trailing_content && cursor.is_valid() {
            log::debug!("{} bytes of trailing content", text.len() - length);
            return Err(Error::TrailingContent { length });
        }
        Ok(Parsed { length, data })
    }

    pub(crate) fn skip_whitespace<'src>(&self, cursor: Cursor<'src>) -> Cursor<'src> {
        whitespace::skip(cursor, self.options.allow_unicode_whitespace)
    }

    pub(crate) fn nesting_exceeded(&self, depth: usize) -> bool {
        self.options.max_depth.is_some_and(|max| depth > max)
    }

    pub(crate) fn value_at<'src>(&self, start: Cursor<'src>, depth: usize) -> Outcome<'src, Value> {
        let cursor = self.skip_whitespace(start);

        for rule in Rule::VALUE_ORDER {
            match self.apply_at(rule, cursor, depth) {
                Outcome::Unrecognized => {}
                Outcome::Invalid(err) => return Outcome::Invalid(err),
                Outcome::Valid(value, end) => {
                    #[cfg(any(test, feature = "fuzzing"))]
                    assert!(
                        end.position() > cursor.position()
                            && end.text().is_char_boundary(end.position()),
                        "Internal error: {rule} ended at byte {} from {}",
                        end.position(),
                        cursor.position()
                    );
                    log::trace!(
                        "{rule} at bytes {}..{}",
                        cursor.position(),
                        end.position()
                    );
                    return Outcome::Valid(value, self.skip_whitespace(end));
                }
            }
        }

        log::trace!("no value at byte {}", cursor.position());
        Outcome::Unrecognized
    }

    fn apply_at<'src>(&self, rule: Rule, cursor: Cursor<'src>, depth: usize) -> Outcome<'src, Value> {
        match rule {
            Rule::String => self.string(cursor).map(Value::String),
            Rule::Number => self.number(cursor).map(Value::Number),
            Rule::Keyword => self.keyword(cursor),
            Rule::Array => array::parse(self, cursor, depth),
            Rule::Object => object::parse(self, cursor, depth),
        }
    }
}
