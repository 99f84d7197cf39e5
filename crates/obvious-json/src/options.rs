/// Configuration options for [`Parser`](crate::Parser).
///
/// The defaults reproduce the reference grammar exactly: unknown escapes
/// (including `\u`) pass through literally, only the four JSON whitespace
/// characters are skipped, and input after the first value is left for the
/// caller to inspect.
///
/// # Examples
///
/// ```rust
/// use obvious_json::{Parser, ParserOptions};
///
/// let parser = Parser::new(ParserOptions {
///     decode_unicode_escapes: true,
///     ..Default::default()
/// });
/// let parsed = parser.parse(r#""café""#).unwrap();
/// assert_eq!(parsed.data.as_str(), Some("café"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Whether `\uXXXX` escapes inside strings are decoded.
    ///
    /// When `false`, `\u` is handled like every other unknown escape: the `u`
    /// is kept and the four digits after it are ordinary string content.
    ///
    /// # Default
    ///
    /// `false`
    pub decode_unicode_escapes: bool,

    /// Whether to skip any Unicode whitespace between tokens.
    ///
    /// By default, the parser only recognizes the four whitespace characters
    /// defined by the JSON specification: space (U+0020), line feed (U+000A),
    /// carriage return (U+000D), and horizontal tab (U+0009).
    ///
    /// # Default
    ///
    /// `false`
    pub allow_unicode_whitespace: bool,

    /// Deepest array/object nesting accepted before the parse is rejected
    /// with [`SyntaxError::NestingTooDeep`](crate::SyntaxError::NestingTooDeep).
    ///
    /// `None` removes the limit, in which case deeply nested input is bounded
    /// only by the call stack.
    ///
    /// # Default
    ///
    /// `Some(128)`
    pub max_depth: Option<usize>,

    /// Whether [`Parser::parse`](crate::Parser::parse) fails when input
    /// remains after the value.
    ///
    /// The rule-level API ([`Parser::value`](crate::Parser::value),
    /// [`parse_value`](crate::parse_value)) never checks this; callers read
    /// the consumed length from the returned cursor instead.
    ///
    /// # Default
    ///
    /// `false`
    pub reject_trailing_content: bool,
}

impl ParserOptions {
    /// Default nesting limit.
    pub const DEFAULT_MAX_DEPTH: usize = 128;

    /// Options for validating complete documents: unicode escapes are
    /// decoded and trailing content is an error.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            decode_unicode_escapes: true,
            allow_unicode_whitespace: false,
            max_depth: Some(Self::DEFAULT_MAX_DEPTH),
            reject_trailing_content: true,
        }
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            decode_unicode_escapes: false,
            allow_unicode_whitespace: false,
            max_depth: Some(Self::DEFAULT_MAX_DEPTH),
            reject_trailing_content: false,
        }
    }
}
