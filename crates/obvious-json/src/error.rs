use thiserror::Error;

/// Diagnostic carried by [`Outcome::Invalid`](crate::Outcome::Invalid).
///
/// A rule reports one of these once it has recognized that it applies at the
/// current position but the input breaks the grammar. The `Display` text is
/// the fixed, rule-specific message. No position is attached.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("unexpected end of string")]
    UnterminatedString,
    #[error("invalid unicode escape near end of string")]
    TruncatedUnicodeEscape,
    #[error("invalid unicode escape")]
    InvalidUnicodeEscape,
    #[error("digit required after decimal point")]
    MissingFractionDigit,
    #[error("missing comma in array")]
    MissingArrayComma,
    #[error("non-value in array")]
    NonValueInArray,
    #[error("unexpected end of string in array")]
    UnterminatedArray,
    #[error("missing comma in object")]
    MissingObjectComma,
    #[error("key must be a string")]
    NonStringKey,
    #[error("expected colon in object")]
    MissingColon,
    #[error("unrecognized value in object")]
    NonValueInObject,
    #[error("unexpected end of string in object")]
    UnterminatedObject,
    #[error("nesting too deep")]
    NestingTooDeep,
}

/// Failure of a whole-document parse through [`from_str`](crate::from_str) or
/// [`Parser::parse`](crate::Parser::parse).
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Error {
    /// No rule matched at the start of the input.
    #[error("could not parse as value")]
    Unrecognized,
    /// A rule matched but the input is malformed.
    #[error("invalid: {0}")]
    Invalid(#[from] SyntaxError),
    /// A value was parsed but unconsumed input follows it. Only reported when
    /// [`ParserOptions::reject_trailing_content`](crate::ParserOptions) is set.
    #[error("trailing content after value at byte {length}")]
    TrailingContent {
        /// Bytes consumed before the trailing content starts.
        length: usize,
    },
}
